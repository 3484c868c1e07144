pub mod chart_container;
pub mod kpi_card;
pub mod page_header;

pub use chart_container::ChartContainer;
pub use kpi_card::KpiCard;
pub use page_header::PageHeader;
