//! Извлечение структурных фильтров из запроса свободным текстом.
//!
//! Не NLP: упорядоченный список правил (шаблон -> ограничение).
//! Новое правило добавляется в конец RULES.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static COUNTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)in (\w+)").expect("invalid regex"));

/// Найденные в тексте ограничения; обе части необязательны.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedFilters {
    pub country: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

type Rule = fn(&str, NaiveDateTime, &mut DetectedFilters);

const RULES: [Rule; 2] = [country_rule, last_month_rule];

/// Правила независимы: может сработать любое подмножество.
pub fn extract(sentence: &str, dataset_max_date: NaiveDateTime) -> DetectedFilters {
    let mut found = DetectedFilters::default();
    for rule in RULES {
        rule(sentence, dataset_max_date, &mut found);
    }
    found
}

/// "in <слово>" — кандидат страны; сверка со странами датасета
/// происходит только при применении фильтра.
fn country_rule(sentence: &str, _max: NaiveDateTime, out: &mut DetectedFilters) {
    if let Some(caps) = COUNTRY_RE.captures(sentence) {
        out.country = Some(caps[1].to_string());
    }
}

/// "last month" — календарный месяц, предшествующий месяцу
/// максимальной даты датасета; границы включительные.
fn last_month_rule(sentence: &str, max: NaiveDateTime, out: &mut DetectedFilters) {
    if !sentence.to_lowercase().contains("last month") {
        return;
    }
    let end = max.date().with_day(1).and_then(|d| d.pred_opt());
    let start = end.and_then(|d| d.with_day(1));
    if let (Some(start), Some(end)) = (start, end) {
        out.date_range = Some((start, end));
    }
}
