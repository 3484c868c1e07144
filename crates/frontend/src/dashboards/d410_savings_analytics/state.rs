//! Page state of the savings analytics dashboard.
//!
//! Kept free of reactive types so the fetch sequencing can be tested
//! without a browser; the page wraps it in an `RwSignal`.

use contracts::dashboards::d410_group_analytics::{AnalyticsData, FilterConfiguration};
use contracts::domain::a001_savings_group::SavingsGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPhase {
    #[default]
    Idle,
    LoadingGroups,
    GroupsLoaded,
    LoadingAnalytics,
    AnalyticsLoaded,
}

/// Identifies one analytics request. Only the newest token may apply its
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic source of [`RequestToken`]s.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn next(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}

/// An analytics fetch the page should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsRequest {
    pub group_id: String,
    /// Filters last applied by the user, not the panel's draft.
    pub filters: FilterConfiguration,
    pub token: RequestToken,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub phase: DashboardPhase,
    pub groups: Vec<SavingsGroup>,
    pub selected_group: Option<String>,
    pub analytics: Option<AnalyticsData>,
    pub applied_filters: FilterConfiguration,
    generation: RequestGeneration,
}

impl DashboardModel {
    pub fn begin_groups_fetch(&mut self) {
        self.phase = DashboardPhase::LoadingGroups;
    }

    /// Stores the groups and selects the first one when nothing is selected
    /// yet. Returns the analytics fetch to start, if any.
    pub fn groups_loaded(&mut self, groups: Vec<SavingsGroup>) -> Option<AnalyticsRequest> {
        self.groups = groups;

        let still_listed = self
            .selected_group
            .as_ref()
            .is_some_and(|id| self.groups.iter().any(|g| &g.id == id));
        if still_listed {
            if self.phase == DashboardPhase::LoadingGroups {
                self.phase = DashboardPhase::GroupsLoaded;
            }
            return None;
        }

        self.selected_group = None;
        self.analytics = None;
        self.phase = DashboardPhase::GroupsLoaded;
        let first = self.groups.first()?.id.clone();
        Some(self.select_group(first))
    }

    /// A failed group fetch leaves the page with nothing to select.
    pub fn groups_failed(&mut self) {
        self.groups.clear();
        self.selected_group = None;
        self.phase = DashboardPhase::GroupsLoaded;
    }

    /// Switches to `group_id`; data of the previous group is dropped.
    pub fn select_group(&mut self, group_id: impl Into<String>) -> AnalyticsRequest {
        let group_id = group_id.into();
        self.selected_group = Some(group_id.clone());
        self.analytics = None;
        self.phase = DashboardPhase::LoadingAnalytics;
        self.request(group_id)
    }

    /// Re-fetches the selected group (refresh, applied filters). Current data
    /// stays visible until the new response arrives.
    pub fn reload(&mut self) -> Option<AnalyticsRequest> {
        let group_id = self.selected_group.clone()?;
        self.phase = DashboardPhase::LoadingAnalytics;
        Some(self.request(group_id))
    }

    /// Makes `filters` the ones used by every later fetch and re-fetches the
    /// selected group with them.
    pub fn apply_filters(&mut self, filters: FilterConfiguration) -> Option<AnalyticsRequest> {
        self.applied_filters = filters;
        self.reload()
    }

    fn request(&mut self, group_id: String) -> AnalyticsRequest {
        AnalyticsRequest {
            group_id,
            filters: self.applied_filters.clone(),
            token: self.generation.next(),
        }
    }

    /// Applies a response unless a newer request superseded it.
    /// Returns whether the response was applied.
    pub fn analytics_loaded(&mut self, token: RequestToken, data: Option<AnalyticsData>) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }
        self.analytics = data;
        self.phase = DashboardPhase::AnalyticsLoaded;
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            DashboardPhase::LoadingGroups | DashboardPhase::LoadingAnalytics
        )
    }

    /// Nothing to chart: no groups at all, or the last fetch failed or
    /// came back empty.
    pub fn shows_empty_state(&self) -> bool {
        match self.phase {
            DashboardPhase::GroupsLoaded => self.groups.is_empty(),
            DashboardPhase::AnalyticsLoaded => self.analytics.is_none(),
            _ => false,
        }
    }

    pub fn selected_group_name(&self) -> Option<&str> {
        let id = self.selected_group.as_deref()?;
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }
}

/// Dashboard tabs. Only the overview has content so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Savings,
    Loans,
    Members,
    Risk,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Savings,
        DashboardTab::Loans,
        DashboardTab::Members,
        DashboardTab::Risk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Savings => "Savings",
            DashboardTab::Loans => "Loans",
            DashboardTab::Members => "Members",
            DashboardTab::Risk => "Risk",
        }
    }

    pub fn renders_charts(&self) -> bool {
        matches!(self, DashboardTab::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_group_analytics::{FilterKey, Kpis};

    fn group(id: &str) -> SavingsGroup {
        SavingsGroup {
            id: id.to_string(),
            name: format!("Group {id}"),
            member_count: None,
        }
    }

    fn data(total_savings: f64) -> AnalyticsData {
        AnalyticsData {
            kpis: Kpis {
                total_savings,
                ..Kpis::default()
            },
            ..AnalyticsData::default()
        }
    }

    #[test]
    fn phases_follow_the_fetch_sequence() {
        let mut model = DashboardModel::default();
        assert_eq!(model.phase, DashboardPhase::Idle);

        model.begin_groups_fetch();
        assert_eq!(model.phase, DashboardPhase::LoadingGroups);
        assert!(model.is_loading());

        let request = model.groups_loaded(vec![group("a"), group("b")]).unwrap();
        assert_eq!(request.group_id, "a");
        assert_eq!(model.selected_group.as_deref(), Some("a"));
        assert_eq!(model.phase, DashboardPhase::LoadingAnalytics);

        assert!(model.analytics_loaded(request.token, Some(data(100.0))));
        assert_eq!(model.phase, DashboardPhase::AnalyticsLoaded);
        assert!(!model.shows_empty_state());
        assert_eq!(model.selected_group_name(), Some("Group a"));
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_selection() {
        let mut model = DashboardModel::default();
        let first = model.groups_loaded(vec![group("a"), group("b")]).unwrap();
        let second = model.select_group("b");

        // Response for "b" arrives first, then the slow one for "a".
        assert!(model.analytics_loaded(second.token, Some(data(2.0))));
        assert!(!model.analytics_loaded(first.token, Some(data(1.0))));

        assert_eq!(model.selected_group.as_deref(), Some("b"));
        assert_eq!(model.analytics.as_ref().unwrap().kpis.total_savings, 2.0);
    }

    #[test]
    fn stale_response_is_ignored_while_newer_request_is_pending() {
        let mut model = DashboardModel::default();
        let first = model.select_group("a");
        let _second = model.select_group("b");

        assert!(!model.analytics_loaded(first.token, Some(data(1.0))));
        assert!(model.analytics.is_none());
        assert_eq!(model.phase, DashboardPhase::LoadingAnalytics);
    }

    #[test]
    fn reload_supersedes_earlier_request_and_keeps_data() {
        let mut model = DashboardModel::default();
        let first = model.select_group("a");
        assert!(model.analytics_loaded(first.token, Some(data(1.0))));

        let reload = model.reload().unwrap();
        assert_eq!(reload.group_id, "a");
        assert!(model.analytics.is_some());
        assert!(!model.analytics_loaded(first.token, Some(data(9.0))));
        assert!(model.analytics_loaded(reload.token, Some(data(3.0))));
        assert_eq!(model.analytics.unwrap().kpis.total_savings, 3.0);
    }

    #[test]
    fn reload_without_selection_does_nothing() {
        let mut model = DashboardModel::default();
        assert!(model.reload().is_none());
        assert_eq!(model.phase, DashboardPhase::Idle);
    }

    #[test]
    fn failed_or_empty_analytics_show_empty_state() {
        let mut model = DashboardModel::default();
        let request = model.groups_loaded(vec![group("a")]).unwrap();
        assert!(model.analytics_loaded(request.token, None));
        assert!(model.shows_empty_state());
    }

    #[test]
    fn no_groups_show_empty_state() {
        let mut model = DashboardModel::default();
        model.begin_groups_fetch();
        assert!(model.groups_loaded(Vec::new()).is_none());
        assert!(model.shows_empty_state());

        model.begin_groups_fetch();
        model.groups_failed();
        assert!(model.shows_empty_state());
    }

    #[test]
    fn reloading_groups_keeps_a_still_listed_selection() {
        let mut model = DashboardModel::default();
        model.groups_loaded(vec![group("a"), group("b")]);
        model.select_group("b");
        assert!(model.groups_loaded(vec![group("a"), group("b")]).is_none());
        assert_eq!(model.selected_group.as_deref(), Some("b"));

        let request = model.groups_loaded(vec![group("c")]).unwrap();
        assert_eq!(request.group_id, "c");
    }

    #[test]
    fn only_overview_renders_charts() {
        for tab in DashboardTab::ALL {
            assert_eq!(tab.renders_charts(), tab == DashboardTab::Overview);
        }
    }

    #[test]
    fn draft_filters_are_not_used_until_applied() {
        let mut model = DashboardModel::default();
        model.select_group("a");

        // The panel edits its own copy; the model only sees it on apply.
        let draft = FilterConfiguration::default().with(FilterKey::MinAmount, "500");

        let switched = model.select_group("b");
        assert_eq!(switched.filters, FilterConfiguration::default());
        let refreshed = model.reload().unwrap();
        assert_eq!(refreshed.filters, FilterConfiguration::default());

        let applied = model.apply_filters(draft.clone()).unwrap();
        assert_eq!(applied.group_id, "b");
        assert_eq!(applied.filters, draft);
        assert_eq!(model.select_group("a").filters, draft);
    }

    #[test]
    fn applying_filters_supersedes_pending_requests() {
        let mut model = DashboardModel::default();
        let first = model.select_group("a");
        let applied = model
            .apply_filters(FilterConfiguration::default().with(FilterKey::RiskLevel, "high"))
            .unwrap();
        assert!(!model.analytics_loaded(first.token, Some(data(1.0))));
        assert!(model.analytics_loaded(applied.token, Some(data(2.0))));
    }

    #[test]
    fn applying_filters_without_selection_only_stores_them() {
        let mut model = DashboardModel::default();
        let filters = FilterConfiguration::default().with(FilterKey::TimeRange, "7d");
        assert!(model.apply_filters(filters.clone()).is_none());
        assert_eq!(model.applied_filters, filters);
    }
}
