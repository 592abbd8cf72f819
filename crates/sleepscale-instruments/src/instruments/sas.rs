use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// SAS: Zung Self-Rating Anxiety Scale.
/// 20 items rated 1–4; items 5, 9, 13, 17 and 19 are worded positively and
/// reverse-scored. Raw 20–80, index score `floor(raw * 1.25 + 0.5)`.
pub struct Sas;

/// 1-based positions of the reverse-scored items.
pub const REVERSED: [usize; 5] = [5, 9, 13, 17, 19];

pub(crate) const ZUNG_FREQUENCY: [(&str, u32); 4] = [
    ("从无或偶尔", 1),
    ("有时", 2),
    ("经常", 3),
    ("总是如此", 4),
];

impl Instrument for Sas {
    fn id(&self) -> &str {
        "sas"
    }

    fn name(&self) -> &str {
        "焦虑自评量表（SAS）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            zung_items(
                &[
                    "我觉得比平常容易紧张和着急",
                    "我无缘无故地感到害怕",
                    "我容易心里烦乱或觉得惊恐",
                    "我觉得我可能将要发疯",
                    "我觉得一切都很好，也不会发生什么不幸",
                    "我手脚发抖打颤",
                    "我因为头痛、颈痛和背痛而苦恼",
                    "我感觉容易衰弱和疲乏",
                    "我觉得心平气和，并且容易安静地坐着",
                    "我觉得心跳得很快",
                    "我因为一阵阵头晕而苦恼",
                    "我有晕倒发作或觉得要晕倒似的",
                    "我吸气呼气都感到很容易",
                    "我的手脚麻木和刺痛",
                    "我因为胃痛和消化不良而苦恼",
                    "我常常要小便",
                    "我的手常常是干燥温暖的",
                    "我脸红发热",
                    "我容易入睡并且一夜睡得很好",
                    "我做噩梦",
                ],
                &REVERSED,
            )
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("none", "无焦虑", 49),
                SeverityBand::up_to("mild", "轻度焦虑", 59),
                SeverityBand::up_to("moderate", "中度焦虑", 69),
                SeverityBand::above("severe", "重度焦虑"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        scoring::score_by_sum(self, submission, true)
    }
}

/// Build the 20 items of a Zung scale, reversing the given 1-based positions.
pub(crate) fn zung_items(prompts: &[&str], reversed: &[usize]) -> Vec<Item> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            let item = Item::choice(&format!("q{}", i + 1), prompt, &ZUNG_FREQUENCY);
            if reversed.contains(&(i + 1)) {
                item.reversed()
            } else {
                item
            }
        })
        .collect()
}
