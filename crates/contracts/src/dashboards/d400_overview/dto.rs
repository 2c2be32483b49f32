use serde::{Deserialize, Serialize};

use crate::shared::indicators::{IndicatorId, IndicatorMeta, ValueFormat};

/// Confidence bucket an insight was labelled with by the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightConfidence {
    Low,
    Medium,
    High,
}

impl InsightConfidence {
    pub fn label(&self) -> &'static str {
        match self {
            InsightConfidence::Low => "Low confidence",
            InsightConfidence::Medium => "Medium confidence",
            InsightConfidence::High => "High confidence",
        }
    }
}

/// One model-labelled observation shown in the overview's insights panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Tag such as "anomaly", "trend", "forecast".
    pub category: String,
    pub confidence: InsightConfidence,
}

/// Static catalogue of the overview KPI cards.
pub fn kpi_catalog() -> Vec<IndicatorMeta> {
    vec![
        IndicatorMeta {
            id: IndicatorId::new("volume"),
            label: "Processed volume".to_string(),
            icon: "payments".to_string(),
            format: ValueFormat::Money {
                currency: "EUR".to_string(),
            },
            description: Some("Gross volume processed today".to_string()),
        },
        IndicatorMeta {
            id: IndicatorId::new("success_rate"),
            label: "Authorization success".to_string(),
            icon: "check".to_string(),
            format: ValueFormat::Percent { decimals: 1 },
            description: None,
        },
        IndicatorMeta {
            id: IndicatorId::new("fraud_rate"),
            label: "Fraud rate".to_string(),
            icon: "shield".to_string(),
            format: ValueFormat::Percent { decimals: 2 },
            description: None,
        },
        IndicatorMeta {
            id: IndicatorId::new("active_merchants"),
            label: "Active merchants".to_string(),
            icon: "merchants".to_string(),
            format: ValueFormat::Integer,
            description: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_catalog_ids_are_unique() {
        let catalog = kpi_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|m| m.id.0.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
