use sleepscale_core::clock::ClockTime;

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

#[test]
fn parses_form_times() {
    assert_eq!(t("23:30"), ClockTime::new(23, 30).unwrap());
    assert_eq!(t("6:40"), ClockTime::new(6, 40).unwrap());
    assert_eq!(t(" 07:00 "), ClockTime::new(7, 0).unwrap());
    assert_eq!(t("00:00").minutes_since_midnight(), 0);
}

#[test]
fn rejects_malformed_times() {
    for bad in ["", "7", "7:0", "24:00", "12:60", "123:00", "-1:30", "ab:cd", "12:30:00"] {
        assert!(bad.parse::<ClockTime>().is_err(), "{bad:?}");
    }
}

#[test]
fn displays_zero_padded() {
    assert_eq!(t("6:05").to_string(), "06:05");
}

#[test]
fn duration_crosses_midnight_forward() {
    assert_eq!(t("23:30").minutes_until(t("07:00")), 450);
    assert_eq!(t("01:00").minutes_until(t("08:30")), 450);
    assert_eq!(t("07:00").minutes_until(t("06:59")), 24 * 60 - 1);
    assert_eq!(t("07:00").minutes_until(t("07:00")), 0);
    assert_eq!(t("22:00").hours_until(t("06:00")), 8.0);
}

#[test]
fn serializes_as_string() {
    let json = serde_json::to_string(&t("9:15")).unwrap();
    assert_eq!(json, "\"09:15\"");
    let back: ClockTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t("09:15"));
    assert!(serde_json::from_str::<ClockTime>("\"9am\"").is_err());
}
