pub mod record;

pub use record::{AlertSeverity, AlertStatus, FraudAlert};
