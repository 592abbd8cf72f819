use jiff::civil::date;
use sleepscale_core::keys;

#[test]
fn assessment_key_is_per_respondent_instrument_and_day() {
    let key = keys::assessment(" 张三 ", "psqi", date(2025, 3, 1));
    assert_eq!(key, "respondents/张三/assessments/psqi/2025-03-01.json");
    assert!(key.starts_with(&keys::assessments_prefix("张三")));
    assert!(key.starts_with(&keys::instrument_assessments_prefix("张三", "psqi")));
    assert_eq!(keys::json_record_date(&key), Some(date(2025, 3, 1)));
}

#[test]
fn diary_and_report_keys() {
    assert_eq!(
        keys::diary_entry("李四", date(2025, 1, 9)),
        "respondents/李四/diary/2025-01-09.json"
    );

    let report = keys::report_pdf("李四", date(2024, 12, 31));
    assert_eq!(report, "respondents/李四/reports/20241231.pdf");
    assert_eq!(keys::report_treat_date(&report), Some(date(2024, 12, 31)));
    assert_eq!(keys::report_treat_date("respondents/李四/reports/notes.txt"), None);
}

#[test]
fn every_key_shares_the_respondent_prefix() {
    let prefix = keys::respondent_prefix("王五");
    for key in [
        keys::assessment("王五", "isi", date(2025, 2, 2)),
        keys::diary_entry("王五", date(2025, 2, 2)),
        keys::report_pdf("王五", date(2025, 2, 2)),
    ] {
        assert!(key.starts_with(&prefix), "{key}");
    }
}
