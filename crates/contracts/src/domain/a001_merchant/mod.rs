pub mod record;

pub use record::{Merchant, MerchantStatus};
