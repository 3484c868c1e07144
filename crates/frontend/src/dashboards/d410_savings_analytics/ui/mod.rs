pub mod charts;
pub mod dashboard;
pub mod filter_panel;
pub mod kpi_grid;
pub mod report_generator;

pub use dashboard::SavingsAnalyticsDashboard;
