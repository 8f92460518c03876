use retiolib::{
    aggregate::{aggregate, Dimension},
    filter::Filters,
    formats::csv::Csv,
    traits::{ReadDataset, WriteReport},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV-датасет со stdin -> помесячные продажи на stdout
    let ds = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let rows = aggregate(&ds.records, Dimension::Month, &Filters::default());
    Csv::write(std::io::stdout(), &rows)?;
    Ok(())
}
