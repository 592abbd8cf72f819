mod common;

use std::collections::HashSet;

use common::{submission, uniform};
use sleepscale_instruments::error::ScoringError;
use sleepscale_instruments::{all_instruments, get_instrument, score};

#[test]
fn registry_holds_the_six_questionnaires() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["psqi", "isi", "has", "fss", "sas", "sds"]);
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(get_instrument("ISI").unwrap().id(), "isi");
    assert_eq!(get_instrument("Psqi").unwrap().id(), "psqi");
    assert!(get_instrument("phq9").is_none());
}

#[test]
fn unknown_instrument_cannot_be_scored() {
    let sub = submission(Vec::new());
    assert!(matches!(
        score("phq9", &sub),
        Err(ScoringError::UnknownInstrument(id)) if id == "phq9"
    ));
}

#[test]
fn item_counts_match_the_published_forms() {
    let count = |id: &str| get_instrument(id).unwrap().items().len();
    assert_eq!(count("isi"), 7);
    assert_eq!(count("fss"), 9);
    assert_eq!(count("has"), 26);
    assert_eq!(count("sas"), 20);
    assert_eq!(count("sds"), 20);
    assert_eq!(count("psqi"), 18);
}

#[test]
fn item_ids_are_unique_within_each_instrument() {
    for instrument in all_instruments() {
        let ids: HashSet<&str> = instrument.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), instrument.items().len(), "{}", instrument.id());
    }
}

#[test]
fn bands_ascend_and_end_open() {
    for instrument in all_instruments() {
        let bands = instrument.bands();
        let (last, bounded) = bands.split_last().expect("at least one band");
        assert!(last.max.is_none(), "{}", instrument.id());

        let maxima: Vec<u32> = bounded.iter().map(|b| b.max.unwrap()).collect();
        assert!(
            maxima.windows(2).all(|w| w[0] < w[1]),
            "{} bands out of order",
            instrument.id()
        );
    }
}

#[test]
fn only_psqi_reports_components() {
    for instrument in all_instruments() {
        let expected = if instrument.id() == "psqi" { 7 } else { 0 };
        assert_eq!(instrument.components().len(), expected, "{}", instrument.id());
    }
}

#[test]
fn definitions_serialize_for_the_form_host() {
    let isi = get_instrument("isi").unwrap();
    let json = serde_json::to_value(isi.items()).unwrap();
    assert_eq!(json[0]["id"], "q1");
    assert_eq!(json[0]["kind"]["type"], "choice");
    assert_eq!(json[0]["kind"]["options"][1]["label"], "轻度");
    assert_eq!(json[0]["kind"]["options"][1]["value"], 1);

    let psqi = get_instrument("psqi").unwrap();
    let json = serde_json::to_value(psqi.items()).unwrap();
    assert_eq!(json[0]["kind"]["type"], "clock_time");
    assert_eq!(json[3]["kind"]["type"], "hours");
}

#[test]
fn free_function_scores_through_the_registry() {
    let fss = get_instrument("fss").unwrap();
    let result = score("FSS", &submission(uniform(fss.as_ref(), "7"))).unwrap();
    assert_eq!(result.instrument_id, "fss");
    assert_eq!(result.total, 63);
}

#[test]
fn banding_without_bands_is_an_error() {
    use sleepscale_instruments::scoring::{SeverityBand, band_for};

    assert!(matches!(
        band_for("empty", &[], 3),
        Err(ScoringError::NoSeverityBands { instrument_id }) if instrument_id == "empty"
    ));

    let bounded = [SeverityBand::up_to("low", "低", 5)];
    assert_eq!(band_for("bounded", &bounded, 9).unwrap().id, "low");
}
