//! CSV-датасет Online Retail, заголовки:
//! InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
//! (лишние колонки игнорируются). Отменённые счета ("C...") отбрасываются при загрузке.

use crate::{
    aggregate::AggRow,
    error::{Result, RetioError},
    model::{Dataset, SalesRecord},
    traits::{ReadDataset, WriteReport},
};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InvoiceNo")]
    invoice_no: String,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "InvoiceDate")]
    invoice_date: String,
    #[serde(rename = "UnitPrice")]
    unit_price: String,
    #[serde(rename = "CustomerID")]
    customer_id: Option<String>,
    #[serde(rename = "Country")]
    country: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow {
    key: String,
    total: String,
}

pub struct Csv;

impl ReadDataset for Csv {
    fn read<R: BufRead>(r: R) -> Result<Dataset> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut records = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            // отменённые заказы в датасет не попадают
            if row.invoice_no.starts_with('C') {
                continue;
            }

            let invoice_date = parse_invoice_date(row.invoice_date.trim())?;
            let unit_price: Decimal = row
                .unit_price
                .trim()
                .parse()
                .map_err(|e| RetioError::Parse(format!("unit_price: {e}")))?;

            // пустые ячейки считаем отсутствующими значениями
            let customer_id = row.customer_id.filter(|s| !s.trim().is_empty());
            let description = row.description.filter(|s| !s.trim().is_empty());

            records.push(SalesRecord {
                invoice_id: row.invoice_no,
                invoice_date,
                customer_id,
                country: row.country,
                description,
                quantity: row.quantity,
                unit_price,
                line_value: Decimal::from(row.quantity) * unit_price,
            });
        }
        Ok(Dataset::new(records))
    }
}

impl WriteReport for Csv {
    fn write<W: Write>(mut w: W, rows: &[AggRow]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);
        for row in rows {
            wrt.serialize(CsvOutRow {
                key: row.key.label(),
                total: row.total.to_string(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}

// датасет гуляет в двух вариантах записи даты
fn parse_invoice_date(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M"))
        .map_err(|e| RetioError::Parse(format!("invoice_date: {e}")))
}
