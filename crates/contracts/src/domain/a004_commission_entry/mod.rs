pub mod record;

pub use record::{CommissionEntry, CommissionScheme, SettlementStatus};
