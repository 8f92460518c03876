use retiolib::{
    aggregate::{aggregate, Dimension},
    filter::Filters,
    formats::csv::Csv,
    traits::{ReadDataset, WriteReport},
};
use rust_decimal::Decimal;
use std::io::Cursor;

const INPUT: &str = "\
InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
536365,85123A,WHITE HANGING HEART T-LIGHT HOLDER,6,2010-12-01 08:26:00,2.55,17850,United Kingdom
C536379,D,Discount,-1,2010-12-01 09:41:00,27.50,14527,United Kingdom
536370,22728,ALARM CLOCK BAKELIKE PINK,24,2010-12-01 08:45:00,3.75,,France
";

#[test]
fn csv_load_skips_cancelled_and_computes_line_value() {
    let ds = Csv::read(Cursor::new(INPUT)).expect("read csv");

    // отменённый счёт C536379 отброшен
    assert_eq!(ds.records.len(), 2);

    let first = &ds.records[0];
    assert_eq!(first.invoice_id, "536365");
    assert_eq!(first.line_value, Decimal::from_str_exact("15.30").unwrap());
    assert_eq!(first.customer_id.as_deref(), Some("17850"));
    assert_eq!(
        first.description.as_deref(),
        Some("WHITE HANGING HEART T-LIGHT HOLDER")
    );

    // пустой CustomerID — отсутствующее значение
    assert!(ds.records[1].customer_id.is_none());
}

#[test]
fn csv_load_accepts_slash_dates() {
    let input = "\
InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
536365,85123A,WHITE HANGING HEART T-LIGHT HOLDER,6,01/12/2010 08:26,2.55,17850,United Kingdom
";
    let ds = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(ds.records.len(), 1);
    assert_eq!(
        ds.records[0].invoice_date.date(),
        chrono::NaiveDate::from_ymd_opt(2010, 12, 1).unwrap()
    );
}

#[test]
fn csv_load_rejects_bad_price() {
    let input = "\
InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
536365,85123A,HEART,6,2010-12-01 08:26:00,oops,17850,United Kingdom
";
    assert!(Csv::read(Cursor::new(input)).is_err());
}

#[test]
fn report_rows_use_period_labels() {
    let ds = Csv::read(Cursor::new(INPUT)).expect("read csv");
    let rows = aggregate(&ds.records, Dimension::Month, &Filters::default());

    let mut out = Vec::new();
    Csv::write(&mut out, &rows).expect("write report");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.starts_with("key,total"));
    assert!(text.contains("December - 2010"));
    assert!(text.contains("105.30"));
}
