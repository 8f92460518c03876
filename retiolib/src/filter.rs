//! Применение разрешённых ограничений к строкам датасета.

use crate::keyword::KeywordFilter;
use crate::model::SalesRecord;
use crate::nlq::DetectedFilters;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Полный набор ограничений одного запроса; пустой набор пропускает всё.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub country: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub months: Option<BTreeSet<u32>>,
    pub keyword: Option<KeywordFilter>,
}

impl Filters {
    /// Ограничения, извлечённые из свободного текста.
    pub fn from_detected(d: &DetectedFilters) -> Filters {
        Filters {
            country: d.country.clone(),
            date_range: d.date_range,
            ..Filters::default()
        }
    }

    /// Чистый предикат: повторное применение не меняет результат.
    pub fn matches(&self, rec: &SalesRecord) -> bool {
        if let Some(country) = &self.country {
            if !rec.country.eq_ignore_ascii_case(country) {
                return false;
            }
        }
        if let Some((start, end)) = self.date_range {
            // сравниваем календарную дату, время внутри дня не важно
            let d = rec.invoice_date.date();
            if d < start || d > end {
                return false;
            }
        }
        if let Some(months) = &self.months {
            if !months.contains(&rec.invoice_date.month()) {
                return false;
            }
        }
        if let Some(kw) = &self.keyword {
            if !kw.matches(rec.description.as_deref()) {
                return false;
            }
        }
        true
    }
}

/// Отфильтрованное представление — ссылки на исходные строки, без копий.
pub fn filter_rows<'a>(records: &'a [SalesRecord], filters: &Filters) -> Vec<&'a SalesRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}
