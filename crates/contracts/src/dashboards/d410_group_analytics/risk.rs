use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dto::RiskMember;

/// Discrete loan-risk bucket of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
        }
    }

    /// Heatmap cell color.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#ef4444",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(anyhow!("unknown risk level: {other:?}")),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member counts per risk bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskSummary {
    pub fn from_members(members: &[RiskMember]) -> Self {
        members
            .iter()
            .fold(Self::default(), |mut summary, member| {
                match member.risk_level {
                    RiskLevel::Low => summary.low += 1,
                    RiskLevel::Medium => summary.medium += 1,
                    RiskLevel::High => summary.high += 1,
                }
                summary
            })
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: usize, level: RiskLevel) -> RiskMember {
        RiskMember {
            member_id: format!("m{id}"),
            name: format!("Member {id}"),
            risk_level: level,
            outstanding_loans: 0.0,
            repayment_rate: 100.0,
            days_overdue: 0,
            credit_score: 700.0,
            last_payment: None,
        }
    }

    #[test]
    fn counts_members_per_bucket() {
        use RiskLevel::*;
        let members: Vec<_> = [Low, High, Medium, High, Low, High]
            .into_iter()
            .enumerate()
            .map(|(i, level)| member(i, level))
            .collect();

        let summary = RiskSummary::from_members(&members);
        assert_eq!(
            summary,
            RiskSummary {
                low: 2,
                medium: 1,
                high: 3
            }
        );
        assert_eq!(summary.total(), members.len());
        assert_eq!(summary.count(High), 3);
    }

    #[test]
    fn counts_always_sum_to_input_length() {
        for n in 0..20 {
            let members: Vec<_> = (0..n)
                .map(|i| member(i, RiskLevel::ALL[(i * 7 + n) % 3]))
                .collect();
            assert_eq!(RiskSummary::from_members(&members).total(), n);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!(" high ".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("severe".parse::<RiskLevel>().is_err());
    }
}
