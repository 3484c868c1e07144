use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::risk::RiskLevel;

// ---------------------------------------------------------------------------
// Wire payload (as sent by the analytics service)
// ---------------------------------------------------------------------------

/// Raw analytics payload. Every field may be absent, `null` or of the wrong
/// type; nothing here is trusted until it passes through
/// [`AnalyticsData::from_payload`]. A malformed list entry becomes `None`
/// instead of failing the whole payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    #[serde(default, deserialize_with = "lenient::entry")]
    pub kpis: Option<KpisPayload>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub savings_growth: Option<Vec<Option<SavingsGrowthPayload>>>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub loan_distribution: Option<Vec<Option<LoanDistributionPayload>>>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub member_engagement: Option<Vec<Option<MemberEngagementPayload>>>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub risk_members: Option<Vec<Option<RiskMemberPayload>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KpisPayload {
    #[serde(deserialize_with = "lenient::number")]
    pub total_savings: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub savings_growth: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub active_loans: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub loan_growth: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_members: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub member_growth: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub repayment_rate: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub repayment_trend: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsGrowthPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_savings: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub active_loans: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanDistributionPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberEngagementPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub participation_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskMemberPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub member_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub risk_level: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub outstanding_loans: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub repayment_rate: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub days_overdue: Option<u32>,
    #[serde(deserialize_with = "lenient::number")]
    pub credit_score: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub last_payment: Option<String>,
}

/// Field deserializers that map malformed values to `None` instead of
/// failing.
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Valid(T),
        Invalid(IgnoredAny),
    }

    impl<T> Loose<T> {
        fn ok(self) -> Option<T> {
            match self {
                Loose::Valid(v) => Some(v),
                Loose::Invalid(_) => None,
            }
        }
    }

    /// A number or a numeric string; anything else, including NaN, is `None`.
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = match Scalar::deserialize(d)? {
            Scalar::Number(n) => Some(n),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
            Scalar::Other(_) => None,
        };
        Ok(value.filter(|n| n.is_finite()))
    }

    /// A non-negative whole number; `3.0` and `"3"` are accepted.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        Ok(number(d)?
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
            .map(|n| n as u32))
    }

    /// A string, or a number rendered as one (numeric ids).
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Scalar::deserialize(d)? {
            Scalar::Text(s) => Some(s),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Other(_) => None,
        })
    }

    pub fn entry<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Loose::<T>::deserialize(d)?.ok())
    }

    /// A list whose malformed entries are kept as `None` so they can be
    /// counted; a non-list is treated as absent.
    pub fn entries<'de, D, T>(d: D) -> Result<Option<Vec<Option<T>>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let list = Loose::<Vec<Loose<T>>>::deserialize(d)?.ok();
        Ok(list.map(|items| items.into_iter().map(Loose::ok).collect()))
    }
}

// ---------------------------------------------------------------------------
// Validated snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_savings: f64,
    /// Change vs the previous period, percent.
    pub savings_growth: f64,
    pub active_loans: f64,
    pub loan_growth: f64,
    pub total_members: f64,
    pub member_growth: f64,
    /// Share of scheduled repayments made on time, percent.
    pub repayment_rate: f64,
    pub repayment_trend: f64,
}

impl From<KpisPayload> for Kpis {
    fn from(raw: KpisPayload) -> Self {
        Self {
            total_savings: raw.total_savings.unwrap_or_default(),
            savings_growth: raw.savings_growth.unwrap_or_default(),
            active_loans: raw.active_loans.unwrap_or_default(),
            loan_growth: raw.loan_growth.unwrap_or_default(),
            total_members: raw.total_members.unwrap_or_default(),
            member_growth: raw.member_growth.unwrap_or_default(),
            repayment_rate: raw.repayment_rate.unwrap_or_default(),
            repayment_trend: raw.repayment_trend.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGrowthPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub total_savings: f64,
    pub active_loans: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDistributionSlice {
    pub category: String,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEngagement {
    pub name: String,
    pub value: f64,
    pub participation_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMember {
    pub member_id: String,
    pub name: String,
    pub risk_level: RiskLevel,
    pub outstanding_loans: f64,
    pub repayment_rate: f64,
    pub days_overdue: u32,
    pub credit_score: f64,
    pub last_payment: Option<String>,
}

/// Analytics snapshot for one savings group, validated at ingestion.
///
/// Downstream code can rely on every list being present; absence on the wire
/// has already been turned into an empty list and missing numbers into zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub kpis: Kpis,
    pub savings_growth: Vec<SavingsGrowthPoint>,
    pub loan_distribution: Vec<LoanDistributionSlice>,
    pub member_engagement: Vec<MemberEngagement>,
    pub risk_members: Vec<RiskMember>,
    /// List entries dropped because an identifying field was missing or the
    /// risk level was not recognised.
    pub skipped_records: usize,
}

impl AnalyticsData {
    /// Validates a raw payload. Returns `None` when there is nothing to show.
    pub fn from_payload(payload: AnalyticsPayload) -> Option<Self> {
        let has_kpis = payload.kpis.is_some();
        let mut skipped = 0usize;

        let savings_growth = collect_valid(payload.savings_growth, &mut skipped, |p| {
            Some(SavingsGrowthPoint {
                date: non_blank(p.date)?,
                total_savings: p.total_savings.unwrap_or_default(),
                active_loans: p.active_loans.unwrap_or_default(),
            })
        });

        let loan_distribution = collect_valid(payload.loan_distribution, &mut skipped, |s| {
            Some(LoanDistributionSlice {
                category: non_blank(s.category)?,
                value: s.value.unwrap_or_default(),
                percentage: s.percentage.unwrap_or_default(),
            })
        });

        let member_engagement = collect_valid(payload.member_engagement, &mut skipped, |m| {
            Some(MemberEngagement {
                name: non_blank(m.name)?,
                value: m.value.unwrap_or_default(),
                participation_rate: m.participation_rate,
            })
        });

        let risk_members = collect_valid(payload.risk_members, &mut skipped, |r| {
            let risk_level = RiskLevel::from_str(r.risk_level.as_deref()?).ok()?;
            Some(RiskMember {
                member_id: non_blank(r.member_id)?,
                name: non_blank(r.name)?,
                risk_level,
                outstanding_loans: r.outstanding_loans.unwrap_or_default(),
                repayment_rate: r.repayment_rate.unwrap_or_default(),
                days_overdue: r.days_overdue.unwrap_or_default(),
                credit_score: r.credit_score.unwrap_or_default(),
                last_payment: non_blank(r.last_payment),
            })
        });

        let data = Self {
            kpis: payload.kpis.map(Kpis::from).unwrap_or_default(),
            savings_growth,
            loan_distribution,
            member_engagement,
            risk_members,
            skipped_records: skipped,
        };

        if !has_kpis && data.has_no_series() {
            return None;
        }
        Some(data)
    }

    pub fn has_no_series(&self) -> bool {
        self.savings_growth.is_empty()
            && self.loan_distribution.is_empty()
            && self.member_engagement.is_empty()
            && self.risk_members.is_empty()
    }
}

fn collect_valid<R, T>(
    raw: Option<Vec<Option<R>>>,
    skipped: &mut usize,
    validate: impl Fn(R) -> Option<T>,
) -> Vec<T> {
    let raw = raw.unwrap_or_default();
    let total = raw.len();
    let valid: Vec<T> = raw.into_iter().flatten().filter_map(validate).collect();
    *skipped += total - valid.len();
    valid
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
