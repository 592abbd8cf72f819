use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// HAS: Hyperarousal Scale.
/// 26 statements rated 0–3 by frequency. Total 0–78; above 32 indicates
/// hyperarousal.
pub struct Has;

const FREQUENCY: [(&str, u32); 4] = [
    ("从来不", 0),
    ("偶尔有", 1),
    ("经常有", 2),
    ("绝大部分时间有", 3),
];

impl Instrument for Has {
    fn id(&self) -> &str {
        "has"
    }

    fn name(&self) -> &str {
        "过度觉醒量表（HAS）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            [
                "我很有条理",
                "我早晨不容易醒来",
                "我工作非常细心",
                "我总是控制不住的胡思乱想",
                "对于自己的感情和感受，我总会在意很多",
                "明亮的灯光、拥挤的人群、嘈杂的噪音或拥挤的交通让我心烦意乱",
                "我在晚上状态最好",
                "我无法午睡，怎么想办法也睡不着",
                "我往往会预想有可能发生的麻烦",
                "我的卧室一团乱",
                "我总觉得处处被针对",
                "当很多事情一起发生的时候我会很紧张",
                "我善于处理细枝末节",
                "我入睡困难",
                "我处事小心谨慎",
                "晚上躺在床上时，我也一直在想各种各样的事",
                "突然的、巨大的噪音会让我久久不能平静",
                "我认真的有些过分",
                "咖啡因（茶叶）会对我产生严重的不良作用",
                "当事情不顺时，我往往会感到沮丧",
                "我的生活千篇一律，没有新意",
                "我的脑海里总是重复某些想法",
                "我要花很长时间才能下决心",
                "酒精让我昏昏欲睡",
                "我很容易流泪",
                "某些事情发生后很久之后，我还念念不忘",
            ]
            .iter()
            .enumerate()
            .map(|(i, prompt)| Item::choice(&format!("q{}", i + 1), prompt, &FREQUENCY))
            .collect()
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("normal", "正常", 32),
                SeverityBand::above("hyperarousal", "过度觉醒"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        scoring::score_by_sum(self, submission, false)
    }
}
