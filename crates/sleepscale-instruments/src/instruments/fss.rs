use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// FSS: Fatigue Severity Scale.
/// 9 statements rated 1 (disagree) to 7 (agree). Total 9–63.
pub struct Fss;

const AGREEMENT: [(&str, u32); 7] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
];

impl Instrument for Fss {
    fn id(&self) -> &str {
        "fss"
    }

    fn name(&self) -> &str {
        "疲劳严重程度量表（FSS）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            [
                "当我感到疲劳时，我就什么事都不想做了",
                "锻炼让我感到疲劳",
                "我很容易疲劳",
                "疲劳影响我的体能",
                "疲劳带来频繁的不适",
                "疲劳使我不能保持体能",
                "疲劳影响我从事某些工作",
                "疲劳是最影响我活动能力的症状之一",
                "疲劳影响了我的工作、家庭、社会活动",
            ]
            .iter()
            .enumerate()
            .map(|(i, prompt)| Item::choice(&format!("q{}", i + 1), prompt, &AGREEMENT))
            .collect()
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("normal", "正常", 35),
                SeverityBand::above("further_evaluation", "需进一步评估"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        scoring::score_by_sum(self, submission, false)
    }
}
