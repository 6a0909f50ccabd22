use super::*;

#[test]
fn format_short_renders_abbreviated_month() {
    assert_eq!(format_short("2024-03-05T10:15:30"), "Mar 05, 2024");
    assert_eq!(format_short("2023-12-31T23:59:59"), "Dec 31, 2023");
}

#[test]
fn format_long_renders_full_month() {
    assert_eq!(format_long("2024-03-05T10:15:30"), "March 05, 2024");
    assert_eq!(format_long("2024-01-01T00:00:00"), "January 01, 2024");
}

#[test]
fn date_only_strings_parse() {
    assert_eq!(format_short("2024-07-09"), "Jul 09, 2024");
}

#[test]
fn unparseable_input_falls_through_unchanged() {
    assert_eq!(format_short("yesterday"), "yesterday");
    assert_eq!(format_long(""), "");
}

#[test]
fn out_of_range_components_fall_through() {
    assert_eq!(format_short("2024-13-05T00:00:00"), "2024-13-05T00:00:00");
    assert_eq!(format_short("2024-00-05T00:00:00"), "2024-00-05T00:00:00");
    assert_eq!(format_short("2024-02-40T00:00:00"), "2024-02-40T00:00:00");
}
