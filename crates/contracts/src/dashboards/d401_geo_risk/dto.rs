use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

/// Per-country risk line in the geographic risk table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRisk {
    /// ISO 3166-1 alpha-2 code, doubles as the row id.
    pub country: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    pub transactions: f64,
    /// Share of flagged transactions, percent.
    #[serde(rename = "fraudRate")]
    pub fraud_rate: f64,
    /// Composite score 0-100 from the risk model.
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
}

impl ListRecord for CountryRisk {
    const SEARCH_FIELDS: &'static [&'static str] = &["country_name", "country"];

    fn record_id(&self) -> &str {
        &self.country
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "country" => Some(FieldValue::Text(self.country.clone())),
            "country_name" => Some(FieldValue::Text(self.country_name.clone())),
            "transactions" => Some(FieldValue::Number(self.transactions)),
            "fraud_rate" => Some(FieldValue::Number(self.fraud_rate)),
            "risk_score" => Some(FieldValue::Number(self.risk_score)),
            _ => None,
        }
    }
}

impl TableExport for CountryRisk {
    fn headers() -> Vec<&'static str> {
        vec![
            "country",
            "country_name",
            "transactions",
            "fraud_rate",
            "risk_score",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            self.country_name.clone(),
            format!("{:.0}", self.transactions),
            format!("{:.2}", self.fraud_rate),
            format!("{:.0}", self.risk_score),
        ]
    }
}
