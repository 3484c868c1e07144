//! Overview charts of the savings analytics dashboard. All are inline SVG
//! scaled through `viewBox`.

mod loan_distribution;
mod member_engagement;
mod risk_heatmap;
mod savings_growth;

pub use loan_distribution::LoanDistributionChart;
pub use member_engagement::MemberEngagementChart;
pub use risk_heatmap::RiskHeatmap;
pub use savings_growth::SavingsGrowthChart;
