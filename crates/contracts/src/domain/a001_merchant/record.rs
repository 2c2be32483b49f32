use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

/// Onboarding/processing state of a merchant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantStatus {
    Active,
    Pending,
    Suspended,
}

impl MerchantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantStatus::Active => "active",
            MerchantStatus::Pending => "pending",
            MerchantStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MerchantStatus::Active => "Active",
            MerchantStatus::Pending => "Pending",
            MerchantStatus::Suspended => "Suspended",
        }
    }

    pub fn all() -> &'static [MerchantStatus] {
        &[
            MerchantStatus::Active,
            MerchantStatus::Pending,
            MerchantStatus::Suspended,
        ]
    }
}

/// A merchant account as shown in the management list. Flat record; all
/// relationships live behind the gateway API this console will eventually
/// talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub country: String,
    pub status: MerchantStatus,
    /// Gross processed volume, EUR.
    pub revenue: f64,
    /// Commission percentage applied to this merchant.
    #[serde(rename = "commissionRate")]
    pub commission_rate: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ListRecord for Merchant {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "id"];

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "country" => Some(FieldValue::Text(self.country.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "revenue" => Some(FieldValue::Number(self.revenue)),
            "commission_rate" => Some(FieldValue::Number(self.commission_rate)),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl TableExport for Merchant {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "name",
            "email",
            "country",
            "status",
            "revenue",
            "commission_rate",
            "created_at",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.country.clone(),
            self.status.as_str().to_string(),
            format!("{:.2}", self.revenue),
            format!("{:.2}", self.commission_rate),
            self.created_at.to_rfc3339(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{apply_filters, FilterState};
    use chrono::TimeZone;

    fn merchant(id: &str, name: &str, status: MerchantStatus) -> Merchant {
        Merchant {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.it", id),
            country: "IT".to_string(),
            status,
            revenue: 1000.0,
            commission_rate: 1.5,
            created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn status_filter_keeps_actives_in_source_order() {
        let merchants = vec![
            merchant("m1", "TechStore Italia", MerchantStatus::Active),
            merchant("m2", "Fashion Boutique", MerchantStatus::Active),
            merchant("m3", "Pizzeria Roma", MerchantStatus::Pending),
            merchant("m4", "Libreria Dante", MerchantStatus::Suspended),
            merchant("m5", "Gelato Milano", MerchantStatus::Active),
        ];
        let mut filters = FilterState::new();
        filters.set_from_input("status", "active");
        let out = apply_filters(merchants, &filters);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|m| m.status == MerchantStatus::Active));
        let ids: Vec<&str> = out.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m5"]);
    }

    #[test]
    fn search_fields_cover_name_email_id() {
        assert_eq!(Merchant::SEARCH_FIELDS, &["name", "email", "id"]);
    }

    #[test]
    fn status_round_trips_through_serde() {
        let json = serde_json::to_string(&MerchantStatus::Suspended).unwrap();
        assert_eq!(json, "\"suspended\"");
        let back: MerchantStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MerchantStatus::Suspended);
    }
}
