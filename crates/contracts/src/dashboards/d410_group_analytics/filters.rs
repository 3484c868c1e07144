use serde::{Deserialize, Serialize};

/// Named filter keys. Wire names are camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    TimeRange,
    MemberSegment,
    StartDate,
    EndDate,
    MetricType,
    RiskLevel,
    MinAmount,
    MaxAmount,
    QuickFilter,
}

impl FilterKey {
    pub const ALL: [FilterKey; 9] = [
        FilterKey::TimeRange,
        FilterKey::MemberSegment,
        FilterKey::StartDate,
        FilterKey::EndDate,
        FilterKey::MetricType,
        FilterKey::RiskLevel,
        FilterKey::MinAmount,
        FilterKey::MaxAmount,
        FilterKey::QuickFilter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::TimeRange => "timeRange",
            FilterKey::MemberSegment => "memberSegment",
            FilterKey::StartDate => "startDate",
            FilterKey::EndDate => "endDate",
            FilterKey::MetricType => "metricType",
            FilterKey::RiskLevel => "riskLevel",
            FilterKey::MinAmount => "minAmount",
            FilterKey::MaxAmount => "maxAmount",
            FilterKey::QuickFilter => "quickFilter",
        }
    }
}

/// Current filter values, one per [`FilterKey`].
///
/// Owned by the dashboard page; the filter panel only reads it and reports
/// changes back through callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfiguration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_range: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub member_segment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub metric_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub risk_level: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub min_amount: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_amount: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quick_filter: String,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            time_range: TimeRange::Days30.value().to_string(),
            member_segment: MemberSegment::All.value().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            metric_type: MetricType::All.value().to_string(),
            risk_level: RiskFilter::All.value().to_string(),
            min_amount: String::new(),
            max_amount: String::new(),
            quick_filter: String::new(),
        }
    }
}

impl FilterConfiguration {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::TimeRange => &self.time_range,
            FilterKey::MemberSegment => &self.member_segment,
            FilterKey::StartDate => &self.start_date,
            FilterKey::EndDate => &self.end_date,
            FilterKey::MetricType => &self.metric_type,
            FilterKey::RiskLevel => &self.risk_level,
            FilterKey::MinAmount => &self.min_amount,
            FilterKey::MaxAmount => &self.max_amount,
            FilterKey::QuickFilter => &self.quick_filter,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::TimeRange => &mut self.time_range,
            FilterKey::MemberSegment => &mut self.member_segment,
            FilterKey::StartDate => &mut self.start_date,
            FilterKey::EndDate => &mut self.end_date,
            FilterKey::MetricType => &mut self.metric_type,
            FilterKey::RiskLevel => &mut self.risk_level,
            FilterKey::MinAmount => &mut self.min_amount,
            FilterKey::MaxAmount => &mut self.max_amount,
            FilterKey::QuickFilter => &mut self.quick_filter,
        }
    }

    /// Replaces the value of `key`; all other keys are left as they are.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    pub fn with(&self, key: FilterKey, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

    /// Custom start/end inputs are only relevant for the `custom` range.
    pub fn shows_custom_range(&self) -> bool {
        self.time_range == TimeRange::Custom.value()
    }

    /// Number of keys that differ from their defaults.
    pub fn active_count(&self) -> usize {
        let defaults = Self::default();
        FilterKey::ALL
            .iter()
            .filter(|key| self.get(**key) != defaults.get(**key))
            .count()
    }

    /// Query string for the analytics endpoint; empty keys are omitted.
    pub fn to_query(&self) -> anyhow::Result<String> {
        Ok(serde_qs::to_string(self)?)
    }
}

macro_rules! filter_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// `(value, label)` pairs for select controls.
            pub fn options() -> Vec<(&'static str, &'static str)> {
                Self::ALL.iter().map(|o| (o.value(), o.label())).collect()
            }
        }
    };
}

filter_options!(
    /// Reporting window for the analytics query.
    TimeRange {
        Days7 => ("7d", "Last 7 days"),
        Days30 => ("30d", "Last 30 days"),
        Days90 => ("90d", "Last 90 days"),
        Year => ("1y", "Last 12 months"),
        Custom => ("custom", "Custom range"),
    }
);

filter_options!(
    MemberSegment {
        All => ("all", "All members"),
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        New => ("new", "New members"),
        TopSavers => ("top_savers", "Top savers"),
        Borrowers => ("borrowers", "Borrowers"),
    }
);

filter_options!(
    MetricType {
        All => ("all", "All metrics"),
        Contributions => ("contributions", "Contributions"),
        Loans => ("loans", "Loans"),
        Repayments => ("repayments", "Repayments"),
    }
);

filter_options!(
    RiskFilter {
        All => ("all", "All risk levels"),
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
);

filter_options!(
    /// One-click shortcuts; each sets `quickFilter` to its value.
    QuickFilter {
        HighRisk => ("high_risk", "High risk"),
        TopSavers => ("top_savers", "Top savers"),
        Overdue => ("overdue", "Overdue loans"),
        NewMembers => ("new_members", "New members"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_changes_only_the_given_key() {
        let base = FilterConfiguration::default()
            .with(FilterKey::MinAmount, "100")
            .with(FilterKey::QuickFilter, "overdue");

        for key in FilterKey::ALL {
            let updated = base.with(key, "changed");
            assert_eq!(updated.get(key), "changed");
            for other in FilterKey::ALL.iter().filter(|k| **k != key) {
                assert_eq!(updated.get(*other), base.get(*other), "{:?} leaked into {:?}", key, other);
            }
        }
    }

    #[test]
    fn sequence_of_updates_keeps_earlier_values() {
        let mut filters = FilterConfiguration::default();
        filters.set(FilterKey::TimeRange, "custom");
        filters.set(FilterKey::StartDate, "2024-01-01");
        filters.set(FilterKey::EndDate, "2024-03-31");
        filters.set(FilterKey::RiskLevel, "high");

        assert_eq!(filters.time_range, "custom");
        assert_eq!(filters.start_date, "2024-01-01");
        assert_eq!(filters.end_date, "2024-03-31");
        assert_eq!(filters.risk_level, "high");
        assert_eq!(filters.member_segment, "all");
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn custom_range_only_for_custom_time_range() {
        for range in TimeRange::ALL {
            let filters = FilterConfiguration::default().with(FilterKey::TimeRange, range.value());
            assert_eq!(filters.shows_custom_range(), *range == TimeRange::Custom);
        }
    }

    #[test]
    fn defaults_have_no_active_filters() {
        assert_eq!(FilterConfiguration::default().active_count(), 0);
    }

    #[test]
    fn query_omits_empty_keys() {
        let query = FilterConfiguration::default()
            .with(FilterKey::MinAmount, "500")
            .to_query()
            .unwrap();
        assert!(query.contains("timeRange=30d"));
        assert!(query.contains("minAmount=500"));
        assert!(!query.contains("maxAmount"));
        assert!(!query.contains("startDate"));
    }

    #[test]
    fn options_expose_wire_values() {
        assert_eq!(TimeRange::options()[0], ("7d", "Last 7 days"));
        assert_eq!(QuickFilter::HighRisk.value(), "high_risk");
        assert_eq!(FilterKey::QuickFilter.as_str(), "quickFilter");
    }
}
