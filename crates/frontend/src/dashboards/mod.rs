pub mod d410_savings_analytics;

pub use d410_savings_analytics::ui::SavingsAnalyticsDashboard;
