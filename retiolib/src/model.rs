//! Доменные модели — строка продажи, датасет и сводные метрики.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    pub invoice_id: String,
    pub invoice_date: NaiveDateTime,
    pub customer_id: Option<String>,
    pub country: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// quantity * unit_price, считается один раз при загрузке
    pub line_value: Decimal,
}

/// Датасет загружается один раз и дальше передаётся по ссылке;
/// ядро его не мутирует, только строит отфильтрованные представления.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Dataset { records }
    }

    /// Максимальная дата счёта — опорная точка для "last month".
    pub fn max_invoice_date(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.invoice_date).max()
    }
}

/// Сводка по отфильтрованному набору: transactions — число уникальных счетов.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_sales: Decimal,
    pub transactions: u64,
    pub avg_transaction: Decimal,
}
