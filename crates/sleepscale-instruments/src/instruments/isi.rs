use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// ISI: Insomnia Severity Index.
/// 7 items rated 0–4 over the last month. Total 0–28.
pub struct Isi;

const SEVERITY: [(&str, u32); 5] = [("无", 0), ("轻度", 1), ("中度", 2), ("重度", 3), ("极重度", 4)];
const IMPACT: [(&str, u32); 5] = [("没有", 0), ("轻微", 1), ("有些", 2), ("较多", 3), ("很多", 4)];

impl Instrument for Isi {
    fn id(&self) -> &str {
        "isi"
    }

    fn name(&self) -> &str {
        "失眠严重指数量表（ISI）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::choice("q1", "入睡困难", &SEVERITY),
                Item::choice("q2", "睡眠维持困难", &SEVERITY),
                Item::choice("q3", "早醒", &SEVERITY),
                Item::choice(
                    "q4",
                    "对睡眠模式满意/不满意",
                    &[("很满意", 0), ("满意", 1), ("一般", 2), ("不满意", 3), ("很不满意", 4)],
                ),
                Item::choice(
                    "q5",
                    "失眠对日常功能的影响",
                    &[("没有干扰", 0), ("轻微", 1), ("有些", 2), ("较多", 3), ("很多", 4)],
                ),
                Item::choice("q6", "在别人眼中的影响程度", &IMPACT),
                Item::choice("q7", "对失眠的担心/痛苦程度", &IMPACT),
            ]
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("none", "无临床意义的失眠", 7),
                SeverityBand::up_to("subthreshold", "亚临床失眠", 14),
                SeverityBand::up_to("moderate", "临床失眠（中度）", 21),
                SeverityBand::above("severe", "临床失眠（重度）"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        scoring::score_by_sum(self, submission, false)
    }
}
