use contracts::dashboards::d410_group_analytics::{
    AnalyticsPayload, FilterConfiguration, ReportRequest, ReportTicket,
};
use contracts::domain::a001_savings_group::SavingsGroup;

use crate::shared::api_utils::with_query;
use crate::system::auth::api::{fetch_with_auth, post_with_auth};

const API_BASE: &str = "/api/savings-groups";

fn group_path(group_id: &str, suffix: &str) -> String {
    format!("{}/{}/{}", API_BASE, urlencoding::encode(group_id), suffix)
}

/// Groups the signed-in user belongs to.
pub async fn get_groups(access_token: &str) -> Result<Vec<SavingsGroup>, String> {
    fetch_with_auth(API_BASE, access_token).await
}

/// Analytics payload for one group, narrowed by the applied filters.
pub async fn get_analytics(
    access_token: &str,
    group_id: &str,
    filters: &FilterConfiguration,
) -> Result<AnalyticsPayload, String> {
    let query = filters
        .to_query()
        .map_err(|e| format!("Failed to encode filters: {}", e))?;
    let path = with_query(&group_path(group_id, "analytics"), &query);
    fetch_with_auth(&path, access_token).await
}

/// Hands a composed report configuration to the backend generator.
pub async fn request_report(
    access_token: &str,
    request: &ReportRequest,
) -> Result<ReportTicket, String> {
    post_with_auth(&group_path(&request.group_id, "reports"), access_token, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_ids_are_url_encoded() {
        assert_eq!(
            group_path("umoja women/2024", "analytics"),
            "/api/savings-groups/umoja%20women%2F2024/analytics"
        );
    }
}
