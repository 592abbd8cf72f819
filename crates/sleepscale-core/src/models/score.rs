use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Points an item contributed after any reverse scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemPoints {
    pub item_id: String,
    pub points: u32,
}

/// A named sub-score, e.g. PSQI component "B" (sleep latency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScore {
    pub id: String,
    pub name: String,
    pub score: u32,
}

/// The band a score falls in. `id` is stable; `label` is the clinic's wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Severity {
    pub id: String,
    pub label: String,
}

/// Deterministic output of scoring one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub item_points: Vec<ItemPoints>,
    pub components: Vec<ComponentScore>,
    pub total: u32,
    /// SAS/SDS index score, `floor(total * 1.25 + 0.5)`.
    pub standardized: Option<u32>,
    /// PSQI sleep efficiency in percent.
    pub sleep_efficiency: Option<f64>,
    pub severity: Severity,
}

impl ScoreResult {
    /// The score the severity band is read from.
    pub fn headline(&self) -> u32 {
        self.standardized.unwrap_or(self.total)
    }

    pub fn component(&self, id: &str) -> Option<u32> {
        self.components.iter().find(|c| c.id == id).map(|c| c.score)
    }

    /// Flatten into one row: item points, components, totals and severity.
    pub fn flat_scores(&self) -> Map<String, Value> {
        let mut row = Map::new();
        for item in &self.item_points {
            row.insert(item.item_id.clone(), Value::from(item.points));
        }
        for component in &self.components {
            row.insert(component.id.clone(), Value::from(component.score));
        }
        row.insert("total".to_string(), Value::from(self.total));
        if let Some(std) = self.standardized {
            row.insert("standardized".to_string(), Value::from(std));
        }
        if let Some(eff) = self.sleep_efficiency {
            row.insert("sleep_efficiency".to_string(), Value::from(eff));
        }
        row.insert("severity".to_string(), Value::from(self.severity.id.clone()));
        row.insert(
            "severity_label".to_string(),
            Value::from(self.severity.label.clone()),
        );
        row
    }
}
