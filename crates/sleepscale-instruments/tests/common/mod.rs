#![allow(dead_code)]

use sleepscale_core::models::respondent::Respondent;
use sleepscale_core::models::submission::{Response, Submission};
use sleepscale_instruments::Instrument;

pub fn submission(responses: Vec<Response>) -> Submission {
    Submission {
        respondent: Respondent::named("张三"),
        responses,
        submitted_at: "2025-03-01T02:00:00Z".parse().unwrap(),
    }
}

/// Every choice item of `instrument` answered with the same option label.
pub fn uniform(instrument: &dyn Instrument, label: &str) -> Vec<Response> {
    instrument
        .items()
        .iter()
        .map(|item| Response::new(&item.id, label))
        .collect()
}

pub fn responses(pairs: &[(&str, &str)]) -> Vec<Response> {
    pairs
        .iter()
        .map(|(id, answer)| Response::new(*id, *answer))
        .collect()
}

/// A full PSQI answer sheet with every frequency item at "没有" and quality
/// "较好", overridden by `overrides`.
pub fn psqi(overrides: &[(&str, &str)]) -> Vec<Response> {
    let mut pairs: Vec<(String, String)> = [
        ("bed_time", "23:30"),
        ("rise_time", "07:00"),
        ("sleep_latency", "≤15分钟"),
        ("sleep_hours", "6.5"),
        ("q5a", "没有"),
        ("q5b", "没有"),
        ("q5c", "没有"),
        ("q5d", "没有"),
        ("q5e", "没有"),
        ("q5f", "没有"),
        ("q5g", "没有"),
        ("q5h", "没有"),
        ("q5i", "没有"),
        ("q5j", "没有"),
        ("q6", "较好"),
        ("q7", "没有"),
        ("q8", "没有"),
        ("q9", "没有"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (id, answer) in overrides {
        if let Some(slot) = pairs.iter_mut().find(|(k, _)| k.as_str() == *id) {
            slot.1 = answer.to_string();
        }
    }

    pairs
        .into_iter()
        .map(|(id, answer)| Response::new(id, answer))
        .collect()
}
