pub mod record;

pub use record::{CloudProvider, CloudService, ServiceStatus};
