use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

use super::sas::zung_items;

/// SDS: Zung Self-Rating Depression Scale.
/// 20 items rated 1–4; ten positively worded items are reverse-scored.
/// Raw 20–80, index score `floor(raw * 1.25 + 0.5)`.
pub struct Sds;

/// 1-based positions of the reverse-scored items.
pub const REVERSED: [usize; 10] = [2, 5, 6, 11, 12, 14, 16, 17, 18, 20];

impl Instrument for Sds {
    fn id(&self) -> &str {
        "sds"
    }

    fn name(&self) -> &str {
        "抑郁自评量表（SDS）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            zung_items(
                &[
                    "我觉得闷闷不乐，情绪低沉",
                    "我觉得一天之中早晨最好",
                    "我一阵阵哭出来或觉得想哭",
                    "我晚上睡眠不好",
                    "我吃得跟平常一样多",
                    "我与异性密切接触时和以往一样感到愉快",
                    "我发觉我的体重在下降",
                    "我有便秘的苦恼",
                    "我心跳比平时快",
                    "我无缘无故地感到疲乏",
                    "我的头脑跟平常一样清楚",
                    "我觉得经常做的事情并没有困难",
                    "我觉得不安而平静不下来",
                    "我对将来抱有希望",
                    "我比平常容易生气激动",
                    "我觉得作出决定是容易的",
                    "我觉得自己是个有用的人，有人需要我",
                    "我的生活过得很有意思",
                    "我认为如果我死了别人会生活得好些",
                    "平常感兴趣的事我仍然照样感兴趣",
                ],
                &REVERSED,
            )
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("none", "无抑郁", 52),
                SeverityBand::up_to("mild", "轻度抑郁", 62),
                SeverityBand::up_to("moderate", "中度抑郁", 72),
                SeverityBand::above("severe", "重度抑郁"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        scoring::score_by_sum(self, submission, true)
    }
}
