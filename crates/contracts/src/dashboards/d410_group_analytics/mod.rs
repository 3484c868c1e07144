//! Savings-group analytics dashboard: wire payload, validated snapshot,
//! filter and report configuration.

pub mod dto;
pub mod filters;
pub mod metric;
pub mod report;
pub mod risk;

pub use dto::*;
pub use filters::*;
pub use metric::MetricKind;
pub use report::*;
pub use risk::{RiskLevel, RiskSummary};
