use clap::{Parser, ValueEnum};
use log::{debug, info};
use retiolib::{
    aggregate::{aggregate, summarize, Dimension},
    error::{Result, RetioError},
    filter::Filters,
    formats::csv::Csv,
    keyword::KeywordFilter,
    month::parse_month_set,
    nlq,
    traits::{ReadDataset, WriteReport},
};
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Dim {
    Day,
    Month,
    Year,
    Customer,
    Country,
    Product,
}

impl From<Dim> for Dimension {
    fn from(d: Dim) -> Dimension {
        match d {
            Dim::Day => Dimension::Day,
            Dim::Month => Dimension::Month,
            Dim::Year => Dimension::Year,
            Dim::Customer => Dimension::Customer,
            Dim::Country => Dimension::Country,
            Dim::Product => Dimension::Product,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name="retio", version, about="Агрегация розничных продаж по CSV-датасету")]
struct Cli {
    /// Входной CSV (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Ось агрегации; для --query по умолчанию дневной тренд
    #[arg(short='d', long="dimension", value_enum, required_unless_present = "query")]
    dimension: Option<Dim>,

    /// Фильтр по месяцу (число или имя, можно несколько раз);
    /// нераспознанные значения игнорируются
    #[arg(short='m', long="month")]
    months: Vec<String>,

    /// Булев запрос по описанию товара (AND/OR/NOT)
    #[arg(short='k', long="keyword")]
    keyword: Option<String>,

    /// Запрос свободным текстом, например "Show me last month's sales in UK"
    #[arg(short='q', long="query")]
    query: Option<String>,

    /// Сколько строк выводить для customer/product (0 — все)
    #[arg(long="top", default_value_t = 20)]
    top: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let ds = Csv::read(BufReader::new(reader))?;
    info!("dataset: {} records", ds.records.len());

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let mut filters = Filters::default();

    if let Some(query) = cli.query.as_deref() {
        if let Some(max_date) = ds.max_invoice_date() {
            let detected = nlq::extract(query, max_date);
            if let Some(c) = &detected.country {
                writeln!(writer, "Detected country filter: {c}")?;
            }
            if let Some((start, end)) = detected.date_range {
                writeln!(writer, "Detected date filter: {start} to {end}")?;
            }
            filters = Filters::from_detected(&detected);
        }
    }

    let month_set = parse_month_set(&cli.months);
    if !month_set.is_empty() {
        filters.months = Some(month_set);
    }
    if let Some(kw) = cli.keyword.as_deref() {
        filters.keyword = Some(KeywordFilter::compile(kw));
    }
    debug!("filters: {filters:?}");

    if cli.query.is_some() {
        let summary = summarize(&ds.records, &filters);
        writeln!(writer, "Total sales: {:.2}", summary.total_sales)?;
        writeln!(writer, "Transactions: {}", summary.transactions)?;
        writeln!(writer, "Average transaction value: {:.2}", summary.avg_transaction)?;
    }

    let dim = cli.dimension.map(Dimension::from).unwrap_or(Dimension::Day);
    let mut rows = aggregate(&ds.records, dim, &filters);
    if cli.top > 0 && matches!(dim, Dimension::Customer | Dimension::Product) {
        rows.truncate(cli.top);
    }
    Csv::write(&mut writer, &rows)?;

    writer.flush().map_err(RetioError::from)
}
