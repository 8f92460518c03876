use chrono::{NaiveDate, NaiveDateTime};
use retiolib::nlq;

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn extracts_country_and_last_month() {
    let found = nlq::extract("Show me last month's sales in UK", dt(2011, 12, 9));
    assert_eq!(found.country.as_deref(), Some("UK"));
    assert_eq!(
        found.date_range,
        Some((date(2011, 11, 1), date(2011, 11, 30)))
    );
}

#[test]
fn last_month_crosses_year_boundary() {
    let found = nlq::extract("sales last month", dt(2011, 1, 15));
    assert_eq!(
        found.date_range,
        Some((date(2010, 12, 1), date(2010, 12, 31)))
    );
    assert!(found.country.is_none());
}

#[test]
fn country_rule_takes_first_match() {
    let found = nlq::extract("sales in France and in Germany", dt(2011, 12, 9));
    assert_eq!(found.country.as_deref(), Some("France"));
}

#[test]
fn country_match_is_case_insensitive() {
    let found = nlq::extract("Sales IN uk please", dt(2011, 12, 9));
    assert_eq!(found.country.as_deref(), Some("uk"));
}

#[test]
fn plain_sentence_yields_no_filters() {
    let found = nlq::extract("show me everything", dt(2011, 12, 9));
    assert!(found.country.is_none());
    assert!(found.date_range.is_none());
}
