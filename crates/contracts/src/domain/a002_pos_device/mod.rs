pub mod record;

pub use record::{DeviceStatus, PosDevice};
