pub mod dto;

pub use dto::{kpi_catalog, AiInsight, InsightConfidence};
