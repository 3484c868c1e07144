use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Comprehensive,
    Financial,
    Member,
    Loan,
    Risk,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Comprehensive,
        ReportType::Financial,
        ReportType::Member,
        ReportType::Loan,
        ReportType::Risk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ReportType::Comprehensive => "comprehensive",
            ReportType::Financial => "financial",
            ReportType::Member => "member",
            ReportType::Loan => "loan",
            ReportType::Risk => "risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Comprehensive => "Comprehensive Report",
            ReportType::Financial => "Financial Summary",
            ReportType::Member => "Member Activity",
            ReportType::Loan => "Loan Portfolio",
            ReportType::Risk => "Risk Assessment",
        }
    }

    /// Help text shown under the report type selector.
    pub fn description(&self) -> &'static str {
        match self {
            ReportType::Comprehensive => {
                "Complete overview including savings, loans, member activity and risk analysis"
            }
            ReportType::Financial => {
                "Savings balances, contributions, loan disbursements and repayments"
            }
            ReportType::Member => "Member participation, contribution history and engagement trends",
            ReportType::Loan => "Outstanding loans, repayment schedules and loan distribution",
            ReportType::Risk => "Members at risk, overdue repayments and credit score breakdown",
        }
    }
}

impl FromStr for ReportType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| anyhow!("unknown report type: {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Pdf, ReportFormat::Excel, ReportFormat::Csv];

    pub fn code(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Csv => "CSV",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportFormat::ALL
            .into_iter()
            .find(|f| f.code() == s)
            .ok_or_else(|| anyhow!("unknown report format: {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportTimeRange {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl ReportTimeRange {
    pub const ALL: [ReportTimeRange; 5] = [
        ReportTimeRange::OneMonth,
        ReportTimeRange::ThreeMonths,
        ReportTimeRange::SixMonths,
        ReportTimeRange::OneYear,
        ReportTimeRange::All,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ReportTimeRange::OneMonth => "1M",
            ReportTimeRange::ThreeMonths => "3M",
            ReportTimeRange::SixMonths => "6M",
            ReportTimeRange::OneYear => "1Y",
            ReportTimeRange::All => "ALL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportTimeRange::OneMonth => "Last month",
            ReportTimeRange::ThreeMonths => "Last 3 months",
            ReportTimeRange::SixMonths => "Last 6 months",
            ReportTimeRange::OneYear => "Last year",
            ReportTimeRange::All => "All time",
        }
    }
}

impl FromStr for ReportTimeRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportTimeRange::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| anyhow!("unknown report time range: {s:?}"))
    }
}

/// Full set of options for a generated report. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfiguration {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub include_charts: bool,
    pub include_member_details: bool,
    pub include_financial_summary: bool,
    pub include_risk_analysis: bool,
    pub time_range: ReportTimeRange,
    pub custom_title: String,
    pub recipient_email: String,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self {
            report_type: ReportType::Comprehensive,
            format: ReportFormat::Pdf,
            include_charts: true,
            include_member_details: true,
            include_financial_summary: true,
            include_risk_analysis: true,
            time_range: ReportTimeRange::OneMonth,
            custom_title: String::new(),
            recipient_email: String::new(),
        }
    }
}

/// A single-field update of a [`ReportConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportField {
    Type(ReportType),
    Format(ReportFormat),
    IncludeCharts(bool),
    IncludeMemberDetails(bool),
    IncludeFinancialSummary(bool),
    IncludeRiskAnalysis(bool),
    TimeRange(ReportTimeRange),
    CustomTitle(String),
    RecipientEmail(String),
}

/// The four optional report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Charts,
    MemberDetails,
    FinancialSummary,
    RiskAnalysis,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Charts,
        ReportSection::MemberDetails,
        ReportSection::FinancialSummary,
        ReportSection::RiskAnalysis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportSection::Charts => "Include charts",
            ReportSection::MemberDetails => "Include member details",
            ReportSection::FinancialSummary => "Include financial summary",
            ReportSection::RiskAnalysis => "Include risk analysis",
        }
    }

    pub fn field(&self, enabled: bool) -> ReportField {
        match self {
            ReportSection::Charts => ReportField::IncludeCharts(enabled),
            ReportSection::MemberDetails => ReportField::IncludeMemberDetails(enabled),
            ReportSection::FinancialSummary => ReportField::IncludeFinancialSummary(enabled),
            ReportSection::RiskAnalysis => ReportField::IncludeRiskAnalysis(enabled),
        }
    }
}

impl ReportConfiguration {
    /// New snapshot with exactly one field replaced.
    pub fn with(&self, field: ReportField) -> Self {
        let mut next = self.clone();
        match field {
            ReportField::Type(v) => next.report_type = v,
            ReportField::Format(v) => next.format = v,
            ReportField::IncludeCharts(v) => next.include_charts = v,
            ReportField::IncludeMemberDetails(v) => next.include_member_details = v,
            ReportField::IncludeFinancialSummary(v) => next.include_financial_summary = v,
            ReportField::IncludeRiskAnalysis(v) => next.include_risk_analysis = v,
            ReportField::TimeRange(v) => next.time_range = v,
            ReportField::CustomTitle(v) => next.custom_title = v,
            ReportField::RecipientEmail(v) => next.recipient_email = v,
        }
        next
    }

    pub fn includes(&self, section: ReportSection) -> bool {
        match section {
            ReportSection::Charts => self.include_charts,
            ReportSection::MemberDetails => self.include_member_details,
            ReportSection::FinancialSummary => self.include_financial_summary,
            ReportSection::RiskAnalysis => self.include_risk_analysis,
        }
    }
}

/// Body of the report generation request sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub request_id: Uuid,
    pub group_id: String,
    pub config: ReportConfiguration,
}

impl ReportRequest {
    pub fn new(group_id: impl Into<String>, config: ReportConfiguration) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            group_id: group_id.into(),
            config,
        }
    }
}

/// Backend acknowledgement of a queued report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTicket {
    pub request_id: Uuid,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReportConfiguration::default();
        assert_eq!(config.report_type, ReportType::Comprehensive);
        assert_eq!(config.format, ReportFormat::Pdf);
        assert!(ReportSection::ALL.iter().all(|s| config.includes(*s)));
        assert_eq!(config.time_range, ReportTimeRange::OneMonth);
        assert!(config.custom_title.is_empty());
        assert!(config.recipient_email.is_empty());
    }

    #[test]
    fn section_flags_are_independent() {
        // Walk through every on/off combination, toggling one flag at a time.
        let mut config = ReportConfiguration::default();
        for mask in 0u8..16 {
            for (bit, section) in ReportSection::ALL.iter().enumerate() {
                let wanted = mask & (1 << bit) != 0;
                let before = config.clone();
                config = config.with(section.field(wanted));
                assert_eq!(config.includes(*section), wanted);
                for other in ReportSection::ALL.iter().filter(|s| *s != section) {
                    assert_eq!(config.includes(*other), before.includes(*other));
                }
            }
        }
    }

    #[test]
    fn with_replaces_one_field_only() {
        let base = ReportConfiguration::default()
            .with(ReportField::CustomTitle("Q1 review".into()))
            .with(ReportField::IncludeCharts(false));

        let updated = base.with(ReportField::Format(ReportFormat::Csv));
        assert_eq!(updated.format, ReportFormat::Csv);
        assert_eq!(
            ReportConfiguration {
                format: base.format,
                ..updated.clone()
            },
            base
        );

        let emailed = updated.with(ReportField::RecipientEmail("treasurer@umoja.org".into()));
        assert_eq!(emailed.custom_title, "Q1 review");
        assert!(!emailed.include_charts);
        assert_eq!(emailed.format, ReportFormat::Csv);
    }

    #[test]
    fn every_report_type_has_a_description() {
        assert!(ReportType::Risk.description().contains("overdue"));
        assert!("unknown".parse::<ReportType>().is_err());
        for t in ReportType::ALL {
            assert!(!t.description().is_empty());
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(ReportConfiguration::default()).unwrap();
        assert_eq!(json["type"], "comprehensive");
        assert_eq!(json["format"], "pdf");
        assert_eq!(json["timeRange"], "1M");
        assert_eq!(json["includeRiskAnalysis"], true);
        assert_eq!(json["recipientEmail"], "");
    }

    #[test]
    fn parses_wire_codes() {
        assert_eq!("3M".parse::<ReportTimeRange>().unwrap(), ReportTimeRange::ThreeMonths);
        assert_eq!("excel".parse::<ReportFormat>().unwrap(), ReportFormat::Excel);
        assert!("docx".parse::<ReportFormat>().is_err());
    }
}
