use contracts::dashboards::d410_group_analytics::{RiskMember, SavingsGrowthPoint};

use crate::shared::export::CsvExportable;

impl CsvExportable for SavingsGrowthPoint {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Total Savings", "Active Loans"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            format!("{:.2}", self.total_savings),
            format!("{:.2}", self.active_loans),
        ]
    }
}

impl CsvExportable for RiskMember {
    fn headers() -> Vec<&'static str> {
        vec![
            "Member ID",
            "Name",
            "Risk Level",
            "Outstanding Loans",
            "Repayment Rate",
            "Days Overdue",
            "Credit Score",
            "Last Payment",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.member_id.clone(),
            self.name.clone(),
            self.risk_level.to_string(),
            format!("{:.2}", self.outstanding_loans),
            format!("{:.1}", self.repayment_rate),
            self.days_overdue.to_string(),
            format!("{:.0}", self.credit_score),
            self.last_payment.clone().unwrap_or_default(),
        ]
    }
}

/// File name like `umoja-savings-growth.csv`.
pub fn export_filename(group_name: Option<&str>, dataset: &str) -> String {
    let slug: String = group_name
        .unwrap_or("group")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug = if slug.is_empty() { "group".to_string() } else { slug };
    format!("{}-{}.csv", slug, dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::dashboards::d410_group_analytics::RiskLevel;

    #[test]
    fn risk_members_export_all_columns() {
        let member = RiskMember {
            member_id: "m1".into(),
            name: "Kamau, John".into(),
            risk_level: RiskLevel::High,
            outstanding_loans: 1500.0,
            repayment_rate: 62.5,
            days_overdue: 30,
            credit_score: 540.0,
            last_payment: None,
        };
        let csv = build_csv(&[member]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0].split(',').count(), 8);
        assert_eq!(lines[1], "m1,\"Kamau, John\",high,1500.00,62.5,30,540,");
    }

    #[test]
    fn savings_growth_row() {
        let point = SavingsGrowthPoint {
            date: "2024-03-01".into(),
            total_savings: 12000.0,
            active_loans: 4500.5,
        };
        assert_eq!(point.to_csv_row(), vec!["2024-03-01", "12000.00", "4500.50"]);
    }

    #[test]
    fn filename_is_slugified() {
        assert_eq!(
            export_filename(Some("Umoja Women's Group"), "risk-members"),
            "umoja-women-s-group-risk-members.csv"
        );
        assert_eq!(export_filename(None, "savings-growth"), "group-savings-growth.csv");
        assert_eq!(export_filename(Some("***"), "x"), "group-x.csv");
    }
}
