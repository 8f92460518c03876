//! Разбор месяца из свободного текста: число либо имя/аббревиатура.

use std::collections::BTreeSet;

// индекс + 1 = номер месяца
const MONTHS: [(&str, &str); 12] = [
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("may", "may"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
];

/// Номер месяца 1..=12 или None, если токен не распознан.
/// None — не ошибка: вызывающий просто не фильтрует по месяцу.
pub fn parse_month(token: &str) -> Option<u32> {
    let t = token.trim().to_lowercase();
    if t.is_empty() {
        return None;
    }
    if t.chars().all(|c| c.is_ascii_digit()) {
        // вне 1..=12 — отказ, а не подгонка к границе
        return match t.parse::<u32>() {
            Ok(n) if (1..=12).contains(&n) => Some(n),
            _ => None,
        };
    }
    MONTHS
        .iter()
        .position(|(full, abbr)| t == *full || t == *abbr)
        .map(|i| i as u32 + 1)
}

/// Множественный выбор месяцев; нераспознанные токены молча пропускаются.
pub fn parse_month_set<I, S>(tokens: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|t| parse_month(t.as_ref()))
        .collect()
}

/// Имя месяца для подписи периода ("March - 2011").
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
