//! Группировка отфильтрованных строк по измерению и суммирование line value.

use crate::filter::{filter_rows, Filters};
use crate::model::{SalesRecord, Summary};
use crate::month::month_name;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// Ось агрегации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Day,
    Month,
    Year,
    Customer,
    Country,
    Product,
}

/// Ключ группы; вариант зависит от измерения.
/// Порядок полей Month даёт сортировку (год, месяц).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
    Year(i32),
    Customer(String),
    Country(String),
    Product(String),
}

impl GroupKey {
    /// Подпись для вывода; месяц — "March - 2011".
    pub fn label(&self) -> String {
        match self {
            GroupKey::Day(d) => d.format("%Y-%m-%d").to_string(),
            GroupKey::Month { year, month } => format!("{} - {}", month_name(*month), year),
            GroupKey::Year(y) => y.to_string(),
            GroupKey::Customer(id) => id.clone(),
            GroupKey::Country(c) => c.clone(),
            GroupKey::Product(d) => d.clone(),
        }
    }
}

/// Одна строка результата: ключ группы и сумма line value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggRow {
    pub key: GroupKey,
    pub total: Decimal,
}

/// Сначала фильтры, затем groupby + sum. Датасет не мутируется,
/// пустой результат — нормальный исход. Календарные оси идут по
/// возрастанию ключа, остальные — по убыванию суммы; усечение
/// топ-N остаётся на вызывающей стороне.
pub fn aggregate(records: &[SalesRecord], dimension: Dimension, filters: &Filters) -> Vec<AggRow> {
    let mut groups: BTreeMap<GroupKey, Decimal> = BTreeMap::new();

    for rec in filter_rows(records, filters) {
        let key = match dimension {
            Dimension::Day => GroupKey::Day(rec.invoice_date.date()),
            Dimension::Month => GroupKey::Month {
                year: rec.invoice_date.year(),
                month: rec.invoice_date.month(),
            },
            Dimension::Year => GroupKey::Year(rec.invoice_date.year()),
            // без идентификатора клиента строке не к кому примкнуть;
            // остальные оси такие строки видят
            Dimension::Customer => match &rec.customer_id {
                Some(id) => GroupKey::Customer(id.clone()),
                None => continue,
            },
            Dimension::Country => GroupKey::Country(rec.country.clone()),
            Dimension::Product => match &rec.description {
                Some(d) => GroupKey::Product(d.clone()),
                None => continue,
            },
        };
        *groups.entry(key).or_insert(Decimal::ZERO) += rec.line_value;
    }

    let mut out: Vec<AggRow> = groups
        .into_iter()
        .map(|(key, total)| AggRow { key, total })
        .collect();

    match dimension {
        // BTreeMap уже отдал возрастающий порядок ключей
        Dimension::Day | Dimension::Month | Dimension::Year => {}
        Dimension::Customer | Dimension::Country | Dimension::Product => {
            out.sort_by(|a, b| b.total.cmp(&a.total));
        }
    }
    out
}

/// Сводные метрики отфильтрованного набора; transactions — уникальные
/// счета, среднее защищено от деления на ноль.
pub fn summarize(records: &[SalesRecord], filters: &Filters) -> Summary {
    let rows = filter_rows(records, filters);
    let total_sales: Decimal = rows.iter().map(|r| r.line_value).sum();
    let invoices: HashSet<&str> = rows.iter().map(|r| r.invoice_id.as_str()).collect();
    let transactions = invoices.len() as u64;
    let avg_transaction = if transactions == 0 {
        Decimal::ZERO
    } else {
        total_sales / Decimal::from(transactions)
    };
    Summary {
        total_sales,
        transactions,
        avg_transaction,
    }
}
