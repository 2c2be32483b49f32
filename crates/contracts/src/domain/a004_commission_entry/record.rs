use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionScheme {
    Interchange,
    Markup,
    Flat,
}

impl CommissionScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionScheme::Interchange => "interchange",
            CommissionScheme::Markup => "markup",
            CommissionScheme::Flat => "flat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommissionScheme::Interchange => "Interchange++",
            CommissionScheme::Markup => "Markup",
            CommissionScheme::Flat => "Flat fee",
        }
    }

    pub fn all() -> &'static [CommissionScheme] {
        &[
            CommissionScheme::Interchange,
            CommissionScheme::Markup,
            CommissionScheme::Flat,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Settled,
    Pending,
}

impl SettlementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementStatus::Settled => "settled",
            SettlementStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettlementStatus::Settled => "Settled",
            SettlementStatus::Pending => "Pending",
        }
    }

    pub fn all() -> &'static [SettlementStatus] {
        &[SettlementStatus::Settled, SettlementStatus::Pending]
    }
}

/// One merchant-month commission line in the commission report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionEntry {
    pub id: String,
    pub merchant: String,
    pub scheme: CommissionScheme,
    /// Settlement month, `YYYY-MM`.
    pub month: String,
    /// Processed volume in the month, EUR.
    pub volume: f64,
    /// Applied rate, percent.
    pub rate: f64,
    /// Commission earned, EUR.
    pub commission: f64,
    pub status: SettlementStatus,
}

impl ListRecord for CommissionEntry {
    const SEARCH_FIELDS: &'static [&'static str] = &["merchant", "id"];

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "merchant" => Some(FieldValue::Text(self.merchant.clone())),
            "scheme" => Some(FieldValue::Text(self.scheme.as_str().to_string())),
            "month" => Some(FieldValue::Text(self.month.clone())),
            "volume" => Some(FieldValue::Number(self.volume)),
            "rate" => Some(FieldValue::Number(self.rate)),
            "commission" => Some(FieldValue::Number(self.commission)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            _ => None,
        }
    }
}

impl TableExport for CommissionEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "id", "merchant", "scheme", "month", "volume", "rate", "commission", "status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.merchant.clone(),
            self.scheme.as_str().to_string(),
            self.month.clone(),
            format!("{:.2}", self.volume),
            format!("{:.3}", self.rate),
            format!("{:.2}", self.commission),
            self.status.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::aggregate::sum_by;

    fn entry(id: &str, scheme: CommissionScheme, commission: f64) -> CommissionEntry {
        CommissionEntry {
            id: id.to_string(),
            merchant: "Fashion Boutique".to_string(),
            scheme,
            month: "2026-07".to_string(),
            volume: 10_000.0,
            rate: 1.2,
            commission,
            status: SettlementStatus::Pending,
        }
    }

    #[test]
    fn commission_breaks_down_by_scheme() {
        let entries = vec![
            entry("c1", CommissionScheme::Flat, 40.0),
            entry("c2", CommissionScheme::Interchange, 120.0),
            entry("c3", CommissionScheme::Flat, 60.0),
        ];
        let by_scheme = sum_by(&entries, "scheme", "commission");
        assert_eq!(by_scheme.get("flat"), Some(&100.0));
        assert_eq!(by_scheme.get("interchange"), Some(&120.0));
        assert_eq!(by_scheme.get("markup"), None);
    }

    #[test]
    fn month_field_sorts_lexicographically_as_chronology() {
        // YYYY-MM was chosen so plain text ordering is chronological
        let a = entry("c1", CommissionScheme::Flat, 1.0);
        let mut b = entry("c2", CommissionScheme::Flat, 1.0);
        b.month = "2026-11".to_string();
        let (va, vb) = (a.field("month").unwrap(), b.field("month").unwrap());
        assert_eq!(va.compare(&vb), std::cmp::Ordering::Less);
    }
}
