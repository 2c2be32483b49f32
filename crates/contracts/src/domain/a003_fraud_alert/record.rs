use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::High => "High",
            AlertSeverity::Critical => "Critical",
        }
    }

    pub fn all() -> &'static [AlertSeverity] {
        &[
            AlertSeverity::Low,
            AlertSeverity::Medium,
            AlertSeverity::High,
            AlertSeverity::Critical,
        ]
    }

    /// Numeric weight so severity sorts by rank, not alphabetically.
    pub fn weight(&self) -> f64 {
        match self {
            AlertSeverity::Low => 1.0,
            AlertSeverity::Medium => 2.0,
            AlertSeverity::High => 3.0,
            AlertSeverity::Critical => 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Open,
    Investigating,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Open => "open",
            AlertStatus::Investigating => "investigating",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Open => "Open",
            AlertStatus::Investigating => "Investigating",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn all() -> &'static [AlertStatus] {
        &[
            AlertStatus::Open,
            AlertStatus::Investigating,
            AlertStatus::Resolved,
        ]
    }
}

/// A fraud-rule hit on a transaction. The live feed appends these while the
/// screen is mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAlert {
    pub id: String,
    pub merchant: String,
    /// Name of the rule that fired.
    pub rule: String,
    pub severity: AlertSeverity,
    /// Flagged amount, EUR.
    pub amount: f64,
    pub status: AlertStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ListRecord for FraudAlert {
    const SEARCH_FIELDS: &'static [&'static str] = &["merchant", "rule", "id"];

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "merchant" => Some(FieldValue::Text(self.merchant.clone())),
            "rule" => Some(FieldValue::Text(self.rule.clone())),
            "severity" => Some(FieldValue::Text(self.severity.as_str().to_string())),
            // rank for sorting; the `severity` slot keeps the filterable string
            "severity_rank" => Some(FieldValue::Number(self.severity.weight())),
            "amount" => Some(FieldValue::Number(self.amount)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl TableExport for FraudAlert {
    fn headers() -> Vec<&'static str> {
        vec![
            "id", "merchant", "rule", "severity", "amount", "status", "created_at",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.merchant.clone(),
            self.rule.clone(),
            self.severity.as_str().to_string(),
            format!("{:.2}", self.amount),
            self.status.as_str().to_string(),
            self.created_at.to_rfc3339(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{apply_sort, SortDirection, SortState};
    use chrono::TimeZone;

    fn alert(id: &str, severity: AlertSeverity) -> FraudAlert {
        FraudAlert {
            id: id.to_string(),
            merchant: "TechStore Italia".to_string(),
            rule: "velocity-check".to_string(),
            severity,
            amount: 250.0,
            status: AlertStatus::Open,
            created_at: Utc.with_ymd_and_hms(2026, 7, 15, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn severity_rank_sorts_by_weight() {
        let mut alerts = vec![
            alert("f1", AlertSeverity::Critical),
            alert("f2", AlertSeverity::Low),
            alert("f3", AlertSeverity::High),
        ];
        apply_sort(
            &mut alerts,
            &SortState::new("severity_rank", SortDirection::Descending),
        );
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f3", "f2"]);
    }
}
