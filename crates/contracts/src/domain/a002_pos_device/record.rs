use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Maintenance,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "Online",
            DeviceStatus::Offline => "Offline",
            DeviceStatus::Maintenance => "Maintenance",
        }
    }

    pub fn all() -> &'static [DeviceStatus] {
        &[
            DeviceStatus::Online,
            DeviceStatus::Offline,
            DeviceStatus::Maintenance,
        ]
    }
}

/// A payment terminal registered with the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosDevice {
    pub id: String,
    pub serial: String,
    pub merchant: String,
    pub model: String,
    pub status: DeviceStatus,
    /// Battery charge percentage.
    pub battery: f64,
    pub firmware: String,
    #[serde(rename = "lastSeen")]
    pub last_seen: DateTime<Utc>,
}

impl ListRecord for PosDevice {
    const SEARCH_FIELDS: &'static [&'static str] = &["serial", "merchant"];

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "serial" => Some(FieldValue::Text(self.serial.clone())),
            "merchant" => Some(FieldValue::Text(self.merchant.clone())),
            "model" => Some(FieldValue::Text(self.model.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "battery" => Some(FieldValue::Number(self.battery)),
            "firmware" => Some(FieldValue::Text(self.firmware.clone())),
            "last_seen" => Some(FieldValue::Timestamp(self.last_seen)),
            _ => None,
        }
    }
}

impl TableExport for PosDevice {
    fn headers() -> Vec<&'static str> {
        vec![
            "id", "serial", "merchant", "model", "status", "battery", "firmware", "last_seen",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.serial.clone(),
            self.merchant.clone(),
            self.model.clone(),
            self.status.as_str().to_string(),
            format!("{:.0}", self.battery),
            self.firmware.clone(),
            self.last_seen.to_rfc3339(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{apply_sort, SortDirection, SortState};
    use chrono::TimeZone;

    fn device(id: &str, battery: f64, status: DeviceStatus) -> PosDevice {
        PosDevice {
            id: id.to_string(),
            serial: format!("SN-{}", id),
            merchant: "TechStore Italia".to_string(),
            model: "PAX A920".to_string(),
            status,
            battery,
            firmware: "2.4.1".to_string(),
            last_seen: Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn battery_sort_is_numeric_not_lexicographic() {
        let mut devices = vec![
            device("d1", 9.0, DeviceStatus::Online),
            device("d2", 80.0, DeviceStatus::Online),
            device("d3", 100.0, DeviceStatus::Online),
        ];
        apply_sort(
            &mut devices,
            &SortState::new("battery", SortDirection::Ascending),
        );
        let ids: Vec<&str> = devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }
}
