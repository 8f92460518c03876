use retiolib::month::{month_name, parse_month, parse_month_set};

#[test]
fn numeric_tokens() {
    assert_eq!(parse_month("3"), Some(3));
    assert_eq!(parse_month(" 12 "), Some(12));
    assert_eq!(parse_month("0"), None);
    assert_eq!(parse_month("13"), None);
}

#[test]
fn names_and_abbreviations() {
    assert_eq!(parse_month("March"), Some(3));
    assert_eq!(parse_month("mar"), Some(3));
    assert_eq!(parse_month("SEPTEMBER"), Some(9));
    assert_eq!(parse_month("sep"), Some(9));
    assert_eq!(parse_month("May"), Some(5));
}

#[test]
fn unresolved_tokens_are_none() {
    assert_eq!(parse_month(""), None);
    assert_eq!(parse_month("   "), None);
    assert_eq!(parse_month("marchy"), None);
    assert_eq!(parse_month("m"), None);
}

#[test]
fn month_set_ignores_unresolved() {
    let set = parse_month_set(["jan", "3", "bogus", "March"]);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn month_names_for_labels() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
}
