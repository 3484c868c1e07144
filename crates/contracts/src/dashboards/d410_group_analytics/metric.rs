use serde::{Deserialize, Serialize};

/// Metric shown by the member engagement chart; drives the bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Contributions,
    Loans,
    Repayments,
    Other,
}

impl MetricKind {
    /// Unknown or empty metric names map to [`MetricKind::Other`].
    pub fn parse(metric: &str) -> Self {
        match metric.trim().to_ascii_lowercase().as_str() {
            "contributions" => MetricKind::Contributions,
            "loans" => MetricKind::Loans,
            "repayments" => MetricKind::Repayments,
            _ => MetricKind::Other,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MetricKind::Contributions => "#10b981",
            MetricKind::Loans => "#3b82f6",
            MetricKind::Repayments => "#f59e0b",
            MetricKind::Other => "#8b5cf6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Contributions => "Contributions",
            MetricKind::Loans => "Loans",
            MetricKind::Repayments => "Repayments",
            MetricKind::Other => "Activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_metric() {
        assert_eq!(MetricKind::parse("contributions").color(), "#10b981");
        assert_eq!(MetricKind::parse("loans").color(), "#3b82f6");
        assert_eq!(MetricKind::parse("Repayments").color(), "#f59e0b");
    }

    #[test]
    fn unknown_metric_uses_default_color() {
        assert_eq!(MetricKind::parse("attendance"), MetricKind::Other);
        assert_eq!(MetricKind::parse(""), MetricKind::Other);
        assert_eq!(MetricKind::parse("attendance").color(), MetricKind::Other.color());
    }
}
