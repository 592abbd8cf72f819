use sleepscale_core::models::score::{ComponentScore, ScoreResult};
use sleepscale_core::models::submission::Submission;

use crate::error::ScoringError;
use crate::scoring::{step, Answers, Item, SeverityBand};
use crate::{Component, Instrument};

/// PSQI: Pittsburgh Sleep Quality Index.
///
/// Seven components A–G, each 0–3, summed to a global score of 0–21.
/// Higher is worse; above 5 indicates poor sleep.
pub struct Psqi;

pub const BED_TIME: &str = "bed_time";
pub const RISE_TIME: &str = "rise_time";
pub const SLEEP_LATENCY: &str = "sleep_latency";
pub const SLEEP_HOURS: &str = "sleep_hours";
pub const QUALITY: &str = "q6";
pub const MEDICATION: &str = "q7";
pub const DAYTIME_SLEEPINESS: &str = "q8";
pub const LOW_ENERGY: &str = "q9";

/// Sleep disturbance items 5a–5j.
pub const DISTURBANCES: [&str; 10] = [
    "q5a", "q5b", "q5c", "q5d", "q5e", "q5f", "q5g", "q5h", "q5i", "q5j",
];

const PER_WEEK: [(&str, u32); 4] = [("没有", 0), ("少于1次", 1), ("1-2次", 2), ("3次以上", 3)];

/// Hours of sleep assumed for each duration component score when computing
/// efficiency.
const ASSUMED_SLEEP_HOURS: [f64; 4] = [7.5, 6.5, 5.5, 4.5];

impl Instrument for Psqi {
    fn id(&self) -> &str {
        "psqi"
    }

    fn name(&self) -> &str {
        "匹兹堡睡眠质量指数（PSQI）"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let disturbances = [
                "入睡困难",
                "夜间易醒或早醒",
                "夜间去厕所",
                "呼吸不畅",
                "咳嗽或鼾声高",
                "感觉冷",
                "感觉热",
                "做恶梦",
                "疼痛不适",
                "其他影响",
            ];

            let mut items = vec![
                Item::clock_time(BED_TIME, "晚上上床时间"),
                Item::clock_time(RISE_TIME, "早上起床时间"),
                Item::choice(
                    SLEEP_LATENCY,
                    "入睡所需时间",
                    &[("≤15分钟", 0), ("16-30分钟", 1), ("31-60分钟", 2), ("≥60分钟", 3)],
                ),
                Item::hours(SLEEP_HOURS, "实际睡眠时长（小时）", 24.0),
            ];
            items.extend(
                DISTURBANCES
                    .iter()
                    .zip(disturbances)
                    .map(|(id, prompt)| Item::choice(id, prompt, &PER_WEEK)),
            );
            items.extend([
                Item::choice(
                    QUALITY,
                    "总体睡眠质量",
                    &[("很好", 0), ("较好", 1), ("较差", 2), ("很差", 3)],
                ),
                Item::choice(MEDICATION, "使用催眠药物（每周发生频率）", &PER_WEEK),
                Item::choice(DAYTIME_SLEEPINESS, "白天困倦（每周发生频率）", &PER_WEEK),
                Item::choice(LOW_ENERGY, "精力不足（每周发生频率）", &PER_WEEK),
            ]);
            items
        });
        &ITEMS
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            [
                ("A", "睡眠质量"),
                ("B", "入睡时间"),
                ("C", "睡眠时间"),
                ("D", "睡眠效率"),
                ("E", "睡眠障碍"),
                ("F", "催眠药物"),
                ("G", "日间功能"),
            ]
            .iter()
            .map(|(id, name)| Component {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect()
        });
        &COMPONENTS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::up_to("good", "尚可", 5),
                SeverityBand::up_to("fair", "一般", 10),
                SeverityBand::up_to("poor", "较差", 15),
                SeverityBand::above("very_poor", "很差"),
            ]
        });
        &BANDS
    }

    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        let answers = self.resolve(submission)?;

        let duration = duration_component(answers.hours(SLEEP_HOURS)?);
        let efficiency = sleep_efficiency(&answers, duration)?;

        let scores = [
            answers.points(QUALITY)?,
            step(answers.sum_points(&[SLEEP_LATENCY, DISTURBANCES[0]])?, &[0, 2, 4]),
            duration,
            efficiency_component(efficiency),
            step(answers.sum_points(&DISTURBANCES)?, &[0, 9, 18]),
            answers.points(MEDICATION)?,
            step(
                answers.sum_points(&[DAYTIME_SLEEPINESS, LOW_ENERGY])?,
                &[0, 2, 4],
            ),
        ];

        let components: Vec<ComponentScore> = self
            .components()
            .iter()
            .zip(scores)
            .map(|(c, score)| ComponentScore {
                id: c.id.clone(),
                name: c.name.clone(),
                score,
            })
            .collect();
        let total = scores.iter().sum();

        Ok(ScoreResult {
            instrument_id: self.id().to_string(),
            item_points: answers.item_points(),
            components,
            total,
            standardized: None,
            sleep_efficiency: Some(efficiency),
            severity: self.severity(total)?,
        })
    }
}

/// Component C from reported hours: >7 → 0, 6–7 → 1, 5–<6 → 2, <5 → 3.
pub fn duration_component(hours: f64) -> u32 {
    if hours > 7.0 {
        0
    } else if hours >= 6.0 {
        1
    } else if hours >= 5.0 {
        2
    } else {
        3
    }
}

/// Component D from efficiency in percent: ≥85 → 0, ≥75 → 1, ≥65 → 2, else 3.
pub fn efficiency_component(efficiency: f64) -> u32 {
    if efficiency >= 85.0 {
        0
    } else if efficiency >= 75.0 {
        1
    } else if efficiency >= 65.0 {
        2
    } else {
        3
    }
}

/// Efficiency in percent: the sleep assumed for the duration band over the
/// time between bed and rise time.
fn sleep_efficiency(answers: &Answers<'_>, duration: u32) -> Result<f64, ScoringError> {
    let bed = answers.time(BED_TIME)?;
    let rise = answers.time(RISE_TIME)?;

    let in_bed = bed.hours_until(rise);
    if in_bed == 0.0 {
        return Err(ScoringError::ZeroTimeInBed {
            bed_time: bed.to_string(),
            rise_time: rise.to_string(),
        });
    }

    Ok(ASSUMED_SLEEP_HOURS[duration as usize] / in_bed * 100.0)
}
