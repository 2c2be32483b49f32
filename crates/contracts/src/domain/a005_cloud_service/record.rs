use serde::{Deserialize, Serialize};

use crate::shared::export::TableExport;
use crate::shared::list_view::{FieldValue, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
            CloudProvider::Azure => "azure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Gcp => "Google Cloud",
            CloudProvider::Azure => "Azure",
        }
    }

    pub fn all() -> &'static [CloudProvider] {
        &[CloudProvider::Aws, CloudProvider::Gcp, CloudProvider::Azure]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Down => "down",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "Healthy",
            ServiceStatus::Degraded => "Degraded",
            ServiceStatus::Down => "Down",
        }
    }

    pub fn all() -> &'static [ServiceStatus] {
        &[
            ServiceStatus::Healthy,
            ServiceStatus::Degraded,
            ServiceStatus::Down,
        ]
    }
}

/// One infrastructure service in the cloud-cost view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudService {
    pub id: String,
    pub service: String,
    pub provider: CloudProvider,
    pub region: String,
    pub status: ServiceStatus,
    /// Projected cost for the current month, EUR.
    #[serde(rename = "monthlyCost")]
    pub monthly_cost: f64,
    /// CPU utilisation percentage.
    pub cpu: f64,
    /// Memory utilisation percentage.
    pub memory: f64,
}

impl ListRecord for CloudService {
    const SEARCH_FIELDS: &'static [&'static str] = &["service", "region"];

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "service" => Some(FieldValue::Text(self.service.clone())),
            "provider" => Some(FieldValue::Text(self.provider.as_str().to_string())),
            "region" => Some(FieldValue::Text(self.region.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "monthly_cost" => Some(FieldValue::Number(self.monthly_cost)),
            "cpu" => Some(FieldValue::Number(self.cpu)),
            "memory" => Some(FieldValue::Number(self.memory)),
            _ => None,
        }
    }
}

impl TableExport for CloudService {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "service",
            "provider",
            "region",
            "status",
            "monthly_cost",
            "cpu",
            "memory",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.service.clone(),
            self.provider.as_str().to_string(),
            self.region.clone(),
            self.status.as_str().to_string(),
            format!("{:.2}", self.monthly_cost),
            format!("{:.1}", self.cpu),
            format!("{:.1}", self.memory),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::aggregate::summarize;

    fn service(id: &str, cost: f64, status: ServiceStatus) -> CloudService {
        CloudService {
            id: id.to_string(),
            service: "api-gateway".to_string(),
            provider: CloudProvider::Aws,
            region: "eu-south-1".to_string(),
            status,
            monthly_cost: cost,
            cpu: 40.0,
            memory: 55.0,
        }
    }

    #[test]
    fn monthly_spend_sums_over_collection() {
        let services = vec![
            service("s1", 120.0, ServiceStatus::Healthy),
            service("s2", 80.0, ServiceStatus::Degraded),
        ];
        let summary = summarize(&services, "monthly_cost");
        assert_eq!(summary.sum, 200.0);
        assert_eq!(summary.max, Some(120.0));
    }
}
