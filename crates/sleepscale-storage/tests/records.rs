use jiff::civil::{Date, date};
use sleepscale_core::models::diary::{MorningFeeling, Rating, SleepDiaryEntry};
use sleepscale_core::models::record::AssessmentRecord;
use sleepscale_core::models::respondent::Respondent;
use sleepscale_core::models::score::{ScoreResult, Severity};
use sleepscale_core::models::submission::Submission;
use sleepscale_storage::error::StorageError;
use sleepscale_storage::records::{self, Saved};
use sleepscale_storage::store::{RecordStore, WriteCondition};

fn record(name: &str, instrument_id: &str, day: Date, total: u32) -> AssessmentRecord {
    let result = ScoreResult {
        instrument_id: instrument_id.to_string(),
        item_points: Vec::new(),
        components: Vec::new(),
        total,
        standardized: None,
        sleep_efficiency: None,
        severity: Severity {
            id: "none".to_string(),
            label: "无".to_string(),
        },
    };
    AssessmentRecord::new(
        Submission::new(Respondent::named(name), Vec::new()),
        result,
        day,
    )
}

fn diary(name: &str, day: Date) -> SleepDiaryEntry {
    SleepDiaryEntry {
        name: name.to_string(),
        record_date: day,
        nap_start: None,
        nap_end: None,
        caffeine: None,
        alcohol: None,
        medication: None,
        daytime_mood: Rating::Fair,
        interference: Vec::new(),
        bed_time: "23:00".parse().unwrap(),
        try_sleep_time: "23:10".parse().unwrap(),
        sleep_latency_min: 20,
        night_awake_count: 1,
        night_awake_total_min: 10,
        final_wake_time: "06:30".parse().unwrap(),
        get_up_time: "07:00".parse().unwrap(),
        total_sleep_hours: 7.0,
        sleep_quality: Rating::Good,
        morning_feeling: MorningFeeling::Good,
    }
}

#[tokio::test]
async fn same_day_resubmission_replaces_record() {
    let store = RecordStore::memory();
    let day = date(2025, 3, 1);

    let (first, saved) = records::save_assessment(&store, record("张三", "isi", day, 10))
        .await
        .unwrap();
    assert_eq!(saved, Saved::Inserted);

    let (second, saved) = records::save_assessment(&store, record("张三", "isi", day, 16))
        .await
        .unwrap();
    assert_eq!(saved, Saved::Updated);
    assert_eq!(second.id, first.id);

    let all = records::list_assessments(&store, "张三", None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].result.total, 16);
}

#[tokio::test]
async fn different_days_and_instruments_are_separate_records() {
    let store = RecordStore::memory();
    for (instrument, day, total) in [
        ("isi", date(2025, 3, 1), 10),
        ("isi", date(2025, 3, 8), 6),
        ("fss", date(2025, 3, 1), 40),
    ] {
        records::save_assessment(&store, record("张三", instrument, day, total))
            .await
            .unwrap();
    }
    records::save_assessment(&store, record("李四", "isi", date(2025, 3, 9), 20))
        .await
        .unwrap();

    let all = records::list_assessments(&store, "张三", None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date(2025, 3, 8));

    let isi = records::list_assessments(&store, "张三", Some("ISI"))
        .await
        .unwrap();
    assert_eq!(isi.len(), 2);
    assert!(isi.iter().all(|r| r.instrument_id == "isi"));

    let summary = records::latest_summaries(&store, "张三").await.unwrap();
    let scores: Vec<_> = summary
        .iter()
        .map(|s| (s.instrument_id.as_str(), s.score, s.date))
        .collect();
    assert_eq!(
        scores,
        [("fss", 40, date(2025, 3, 1)), ("isi", 6, date(2025, 3, 8))]
    );
}

#[tokio::test]
async fn unknown_respondent_has_no_records() {
    let store = RecordStore::memory();
    assert!(records::list_assessments(&store, "王五", None)
        .await
        .unwrap()
        .is_empty());
    assert!(records::latest_summaries(&store, "王五")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn invalid_names_are_rejected() {
    let store = RecordStore::memory();
    let err = records::save_assessment(&store, record("  ", "isi", date(2025, 3, 1), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord(_)));

    let err = records::list_assessments(&store, "../x", None)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord(_)));
}

#[tokio::test]
async fn diary_entries_upsert_and_lookup() {
    let store = RecordStore::memory();
    let day = date(2025, 3, 2);

    let saved = records::save_diary_entry(&store, &diary("张三", day)).await.unwrap();
    assert_eq!(saved, Saved::Inserted);

    let mut changed = diary("张三", day);
    changed.total_sleep_hours = 5.5;
    let saved = records::save_diary_entry(&store, &changed).await.unwrap();
    assert_eq!(saved, Saved::Updated);

    let loaded = records::get_diary_entry(&store, "张三", day).await.unwrap();
    assert_eq!(loaded.total_sleep_hours, 5.5);

    let missing = records::get_diary_entry(&store, "张三", date(2025, 3, 3)).await;
    assert!(matches!(missing, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn invalid_diary_entry_is_not_saved() {
    let store = RecordStore::memory();
    let mut entry = diary("张三", date(2025, 3, 2));
    entry.sleep_latency_min = 500;

    let err = records::save_diary_entry(&store, &entry).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord(_)));
    assert!(records::recent_diary_entries(&store, "张三", 7)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn recent_diary_entries_are_the_last_n_oldest_first() {
    let store = RecordStore::memory();
    for day in [5, 1, 3, 4, 2] {
        records::save_diary_entry(&store, &diary("张三", date(2025, 3, day)))
            .await
            .unwrap();
    }

    let recent = records::recent_diary_entries(&store, "张三", 3).await.unwrap();
    let dates: Vec<_> = recent.iter().map(|e| e.record_date).collect();
    assert_eq!(dates, [date(2025, 3, 3), date(2025, 3, 4), date(2025, 3, 5)]);

    let all = records::recent_diary_entries(&store, "张三", 30).await.unwrap();
    assert_eq!(all.len(), 5);
}

#[tokio::test]
async fn reports_are_listed_newest_first() {
    let store = RecordStore::memory();
    records::put_report(&store, "张三", date(2024, 12, 31), b"%PDF-old".to_vec())
        .await
        .unwrap();
    let doc = records::put_report(&store, "张三", date(2025, 2, 14), b"%PDF-new".to_vec())
        .await
        .unwrap();
    assert_eq!(doc.key, "respondents/张三/reports/20250214.pdf");
    assert_eq!(doc.size, 8);

    let listed = records::list_reports(&store, "张三").await.unwrap();
    let dates: Vec<_> = listed.iter().map(|r| r.treat_date).collect();
    assert_eq!(dates, [date(2025, 2, 14), date(2024, 12, 31)]);
    assert!(listed.iter().all(|r| r.uploaded_at.is_some()));
    assert_eq!(listed[0], doc);

    let pdf = records::get_report(&store, "张三", date(2024, 12, 31))
        .await
        .unwrap();
    assert_eq!(pdf, b"%PDF-old");

    let missing = records::get_report(&store, "张三", date(2025, 1, 1)).await;
    assert!(matches!(missing, Err(StorageError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_same_day_saves_insert_once() {
    for round in 0..100 {
        let store = RecordStore::memory();
        let day = date(2025, 3, 1);

        let tasks: Vec<_> = [10, 16]
            .into_iter()
            .map(|total| {
                let store = store.clone();
                tokio::spawn(async move {
                    records::save_assessment(&store, record("张三", "isi", day, total)).await
                })
            })
            .collect();

        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap().unwrap());
        }

        let mut saved: Vec<_> = outcomes.iter().map(|(_, s)| *s).collect();
        saved.sort_by_key(|s| *s == Saved::Updated);
        assert_eq!(saved, [Saved::Inserted, Saved::Updated], "round {round}");

        let stored = records::list_assessments(&store, "张三", None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(outcomes[0].0.id, outcomes[1].0.id, "round {round}");
        assert_eq!(stored[0].id, outcomes[0].0.id);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_diary_saves_insert_once() {
    for _ in 0..100 {
        let store = RecordStore::memory();
        let tasks: Vec<_> = (0..2)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    records::save_diary_entry(&store, &diary("张三", date(2025, 3, 2))).await
                })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap().unwrap() == Saved::Inserted {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
    }
}

#[tokio::test]
async fn conditional_writes_check_the_current_version() {
    let store = RecordStore::memory();
    let key = "respondents/张三/diary/2025-03-02.json";

    store
        .put_json_if(key, &1, &WriteCondition::Absent)
        .await
        .unwrap();
    let again = store.put_json_if(key, &2, &WriteCondition::Absent).await;
    assert!(matches!(again, Err(StorageError::PreconditionFailed { .. })));

    let current = store.find_json::<i32>(key).await.unwrap().unwrap();
    assert_eq!(current.value, 1);

    store
        .put_json_if(key, &3, &WriteCondition::Matches(current.etag.clone()))
        .await
        .unwrap();
    let stale = store
        .put_json_if(key, &4, &WriteCondition::Matches(current.etag))
        .await;
    assert!(matches!(stale, Err(StorageError::PreconditionFailed { .. })));
    assert_eq!(store.get_json::<i32>(key).await.unwrap(), 3);
}
