//! Mock data layer.
//!
//! Stands in for the gateway API that does not exist yet: every source
//! generates records with `Math.random` behind a short simulated latency.
//! Screens only see the `DataSource` trait, so replacing this module with
//! real fetches later does not touch any list logic.

use chrono::{Duration, Utc};
use contracts::dashboards::d400_overview::{AiInsight, InsightConfidence};
use contracts::dashboards::d401_geo_risk::CountryRisk;
use contracts::domain::a001_merchant::{Merchant, MerchantStatus};
use contracts::domain::a002_pos_device::{DeviceStatus, PosDevice};
use contracts::domain::a003_fraud_alert::{AlertSeverity, AlertStatus, FraudAlert};
use contracts::domain::a004_commission_entry::{CommissionEntry, CommissionScheme, SettlementStatus};
use contracts::domain::a005_cloud_service::{CloudProvider, CloudService, ServiceStatus};
use gloo_timers::future::TimeoutFuture;

use crate::shared::data::DataSource;

// ---------------------------------------------------------------------------
// Random helpers
// ---------------------------------------------------------------------------

fn rand() -> f64 {
    js_sys::Math::random()
}

fn range(min: f64, max: f64) -> f64 {
    min + rand() * (max - min)
}

fn pick<T: Copy>(items: &[T]) -> T {
    items[(rand() * items.len() as f64) as usize % items.len()]
}

fn pick_str(items: &[&'static str]) -> &'static str {
    items[(rand() * items.len() as f64) as usize % items.len()]
}

fn chance(p: f64) -> bool {
    rand() < p
}

/// Simulated network latency before a source resolves.
async fn simulate_latency() {
    TimeoutFuture::new(range(150.0, 450.0) as u32).await;
}

const MERCHANT_NAMES: &[&str] = &[
    "TechStore Italia",
    "Fashion Boutique",
    "Pizzeria Roma",
    "Libreria Dante",
    "Gelato Milano",
    "Enoteca Verdi",
    "Farmacia Centrale",
    "Caffè Torino",
    "Ottica Vista",
    "Sport Arena",
    "Panificio Russo",
    "Fiori di Campo",
    "Mercato Verde",
    "Casa del Gusto",
    "Moda Napoli",
    "Elettronica Sud",
];

const COUNTRIES: &[&str] = &["IT", "FR", "DE", "ES", "PT", "AT", "NL"];

const FRAUD_RULES: &[&str] = &[
    "velocity-check",
    "card-testing",
    "geo-mismatch",
    "amount-spike",
    "stolen-card-list",
    "device-fingerprint",
];

// ---------------------------------------------------------------------------
// Merchants
// ---------------------------------------------------------------------------

pub fn merchants(count: usize) -> Vec<Merchant> {
    (0..count)
        .map(|i| {
            let name = MERCHANT_NAMES[i % MERCHANT_NAMES.len()];
            let status = if chance(0.7) {
                MerchantStatus::Active
            } else if chance(0.5) {
                MerchantStatus::Pending
            } else {
                MerchantStatus::Suspended
            };
            Merchant {
                id: format!("MRC-{:04}", 1000 + i),
                name: name.to_string(),
                email: format!(
                    "{}@example.it",
                    name.to_lowercase().replace(' ', ".")
                ),
                country: pick_str(COUNTRIES).to_string(),
                status,
                revenue: range(1_000.0, 250_000.0).round(),
                commission_rate: (range(0.8, 3.2) * 100.0).round() / 100.0,
                created_at: Utc::now() - Duration::days(range(1.0, 720.0) as i64),
            }
        })
        .collect()
}

#[derive(Default)]
pub struct MerchantApi;

impl DataSource for MerchantApi {
    type Item = Merchant;

    async fn list(&self) -> Result<Vec<Merchant>, String> {
        simulate_latency().await;
        Ok(merchants(16))
    }
}

// ---------------------------------------------------------------------------
// POS devices
// ---------------------------------------------------------------------------

pub fn pos_devices(count: usize) -> Vec<PosDevice> {
    let models = ["PAX A920", "Ingenico Move/5000", "Verifone P400", "SumUp Solo"];
    let firmwares = ["2.4.1", "2.4.0", "2.3.7", "3.0.0-rc1"];
    (0..count)
        .map(|i| {
            let status = if chance(0.75) {
                DeviceStatus::Online
            } else if chance(0.6) {
                DeviceStatus::Offline
            } else {
                DeviceStatus::Maintenance
            };
            PosDevice {
                id: format!("POS-{:04}", 2000 + i),
                serial: format!("SN{:08}", (rand() * 99_999_999.0) as u64),
                merchant: pick_str(MERCHANT_NAMES).to_string(),
                model: pick_str(&models).to_string(),
                status,
                battery: range(5.0, 100.0).round(),
                firmware: pick_str(&firmwares).to_string(),
                last_seen: Utc::now() - Duration::minutes(range(1.0, 4_000.0) as i64),
            }
        })
        .collect()
}

#[derive(Default)]
pub struct PosDeviceApi;

impl DataSource for PosDeviceApi {
    type Item = PosDevice;

    async fn list(&self) -> Result<Vec<PosDevice>, String> {
        simulate_latency().await;
        Ok(pos_devices(14))
    }
}

// ---------------------------------------------------------------------------
// Fraud alerts
// ---------------------------------------------------------------------------

pub fn fraud_alerts(count: usize) -> Vec<FraudAlert> {
    (0..count).map(|i| fraud_alert(format!("FRA-{:04}", 3000 + i))).collect()
}

/// A single alert; the live feed mints these with uuid ids.
pub fn fraud_alert(id: String) -> FraudAlert {
    let severity = pick(&[
        AlertSeverity::Low,
        AlertSeverity::Low,
        AlertSeverity::Medium,
        AlertSeverity::Medium,
        AlertSeverity::High,
        AlertSeverity::Critical,
    ]);
    let status = pick(&[
        AlertStatus::Open,
        AlertStatus::Open,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
    ]);
    FraudAlert {
        id,
        merchant: pick_str(MERCHANT_NAMES).to_string(),
        rule: pick_str(FRAUD_RULES).to_string(),
        severity,
        amount: range(10.0, 5_000.0).round(),
        status,
        created_at: Utc::now() - Duration::minutes(range(0.0, 2_880.0) as i64),
    }
}

/// Alert appended by the live feed: always open, timestamped now.
pub fn incoming_fraud_alert() -> FraudAlert {
    let mut alert = fraud_alert(format!("FRA-{}", uuid::Uuid::new_v4().simple()));
    alert.status = AlertStatus::Open;
    alert.created_at = Utc::now();
    alert
}

#[derive(Default)]
pub struct FraudAlertApi;

impl DataSource for FraudAlertApi {
    type Item = FraudAlert;

    async fn list(&self) -> Result<Vec<FraudAlert>, String> {
        simulate_latency().await;
        Ok(fraud_alerts(18))
    }
}

// ---------------------------------------------------------------------------
// Commissions
// ---------------------------------------------------------------------------

pub fn commission_entries(count: usize) -> Vec<CommissionEntry> {
    let months = ["2026-05", "2026-06", "2026-07"];
    (0..count)
        .map(|i| {
            let volume = range(5_000.0, 400_000.0).round();
            let rate = (range(0.6, 2.8) * 1000.0).round() / 1000.0;
            CommissionEntry {
                id: format!("COM-{:04}", 4000 + i),
                merchant: pick_str(MERCHANT_NAMES).to_string(),
                scheme: pick(&[
                    CommissionScheme::Interchange,
                    CommissionScheme::Markup,
                    CommissionScheme::Flat,
                ]),
                month: pick_str(&months).to_string(),
                volume,
                rate,
                commission: (volume * rate / 100.0).round(),
                status: if chance(0.6) {
                    SettlementStatus::Settled
                } else {
                    SettlementStatus::Pending
                },
            }
        })
        .collect()
}

#[derive(Default)]
pub struct CommissionApi;

impl DataSource for CommissionApi {
    type Item = CommissionEntry;

    async fn list(&self) -> Result<Vec<CommissionEntry>, String> {
        simulate_latency().await;
        Ok(commission_entries(20))
    }
}

// ---------------------------------------------------------------------------
// Cloud services
// ---------------------------------------------------------------------------

pub fn cloud_services() -> Vec<CloudService> {
    let services = [
        ("api-gateway", CloudProvider::Aws, "eu-south-1"),
        ("auth-service", CloudProvider::Aws, "eu-south-1"),
        ("tx-processor", CloudProvider::Aws, "eu-central-1"),
        ("fraud-scoring", CloudProvider::Gcp, "europe-west8"),
        ("ledger-db", CloudProvider::Aws, "eu-south-1"),
        ("reporting-batch", CloudProvider::Gcp, "europe-west1"),
        ("merchant-portal", CloudProvider::Azure, "italynorth"),
        ("webhook-dispatch", CloudProvider::Azure, "westeurope"),
        ("settlement-queue", CloudProvider::Aws, "eu-central-1"),
        ("analytics-lake", CloudProvider::Gcp, "europe-west8"),
    ];
    services
        .iter()
        .enumerate()
        .map(|(i, (service, provider, region))| {
            let status = if chance(0.8) {
                ServiceStatus::Healthy
            } else if chance(0.7) {
                ServiceStatus::Degraded
            } else {
                ServiceStatus::Down
            };
            CloudService {
                id: format!("SVC-{:03}", 100 + i),
                service: service.to_string(),
                provider: *provider,
                region: region.to_string(),
                status,
                monthly_cost: range(150.0, 9_500.0).round(),
                cpu: range(5.0, 95.0).round(),
                memory: range(10.0, 90.0).round(),
            }
        })
        .collect()
}

#[derive(Default)]
pub struct CloudServiceApi;

impl DataSource for CloudServiceApi {
    type Item = CloudService;

    async fn list(&self) -> Result<Vec<CloudService>, String> {
        simulate_latency().await;
        Ok(cloud_services())
    }
}

// ---------------------------------------------------------------------------
// Geographic risk
// ---------------------------------------------------------------------------

pub fn country_risks() -> Vec<CountryRisk> {
    let countries = [
        ("IT", "Italy"),
        ("FR", "France"),
        ("DE", "Germany"),
        ("ES", "Spain"),
        ("PT", "Portugal"),
        ("AT", "Austria"),
        ("NL", "Netherlands"),
        ("GR", "Greece"),
        ("PL", "Poland"),
        ("RO", "Romania"),
    ];
    countries
        .iter()
        .map(|(code, name)| {
            let fraud_rate = (range(0.05, 2.4) * 100.0).round() / 100.0;
            CountryRisk {
                country: code.to_string(),
                country_name: name.to_string(),
                transactions: range(500.0, 90_000.0).round(),
                fraud_rate,
                risk_score: (fraud_rate * 30.0 + range(0.0, 30.0)).min(100.0).round(),
            }
        })
        .collect()
}

#[derive(Default)]
pub struct GeoRiskApi;

impl DataSource for GeoRiskApi {
    type Item = CountryRisk;

    async fn list(&self) -> Result<Vec<CountryRisk>, String> {
        simulate_latency().await;
        Ok(country_risks())
    }
}

// ---------------------------------------------------------------------------
// Overview KPIs
// ---------------------------------------------------------------------------

/// One refresh tick of the overview KPIs.
pub struct KpiSample {
    pub volume: f64,
    pub success_rate: f64,
    pub fraud_rate: f64,
    pub active_merchants: f64,
}

pub fn kpi_tick() -> KpiSample {
    KpiSample {
        volume: range(180_000.0, 420_000.0).round(),
        success_rate: (range(95.5, 99.8) * 10.0).round() / 10.0,
        fraud_rate: (range(0.05, 0.9) * 100.0).round() / 100.0,
        active_merchants: range(38.0, 60.0).round(),
    }
}

// ---------------------------------------------------------------------------
// Overview insights
// ---------------------------------------------------------------------------

pub fn ai_insights() -> Vec<AiInsight> {
    let templates = [
        (
            "Volume trending up",
            "Processed volume is 14% above the 7-day average; the lift is concentrated in card-present transactions.",
            "trend",
            InsightConfidence::High,
        ),
        (
            "Card-testing pattern detected",
            "A burst of sub-EUR authorizations from two merchants matches a known card-testing signature.",
            "anomaly",
            InsightConfidence::Medium,
        ),
        (
            "Settlement delay forecast",
            "Pending settlements for the markup scheme are projected to clear one day later than usual.",
            "forecast",
            InsightConfidence::Low,
        ),
        (
            "Cross-border share rising",
            "Non-domestic transactions grew to 23% of volume this week, led by FR and DE issuers.",
            "trend",
            InsightConfidence::Medium,
        ),
        (
            "Decline-rate anomaly",
            "Authorization declines for one acquirer doubled in the last 6 hours; re-routing may be warranted.",
            "anomaly",
            InsightConfidence::High,
        ),
    ];
    templates
        .iter()
        .enumerate()
        .filter(|_| chance(0.8))
        .map(|(i, (title, body, category, confidence))| AiInsight {
            id: format!("INS-{:03}", i),
            title: title.to_string(),
            body: body.to_string(),
            category: category.to_string(),
            confidence: *confidence,
        })
        .collect()
}

#[derive(Default)]
pub struct InsightApi;

impl DataSource for InsightApi {
    type Item = AiInsight;

    async fn list(&self) -> Result<Vec<AiInsight>, String> {
        // The "model" takes noticeably longer than plain lists.
        TimeoutFuture::new(range(600.0, 1_200.0) as u32).await;
        Ok(ai_insights())
    }
}
