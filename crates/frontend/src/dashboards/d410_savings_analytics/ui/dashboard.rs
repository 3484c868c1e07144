use crate::dashboards::d410_savings_analytics::api;
use crate::dashboards::d410_savings_analytics::export::export_filename;
use crate::dashboards::d410_savings_analytics::state::{AnalyticsRequest, DashboardModel, DashboardTab};
use crate::dashboards::d410_savings_analytics::ui::charts::{
    LoanDistributionChart, MemberEngagementChart, RiskHeatmap, SavingsGrowthChart,
};
use crate::dashboards::d410_savings_analytics::ui::filter_panel::FilterPanel;
use crate::dashboards::d410_savings_analytics::ui::kpi_grid::KpiGrid;
use crate::dashboards::d410_savings_analytics::ui::report_generator::ReportGenerator;
use crate::shared::components::{ChartContainer, PageHeader};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::system::auth::Session;
use contracts::dashboards::d410_group_analytics::{
    AnalyticsData, FilterConfiguration, FilterKey, ReportConfiguration, ReportRequest,
};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner};

/// Reactive view of one part of the current analytics snapshot; empty while
/// nothing is loaded.
fn analytics_part<T>(
    model: RwSignal<DashboardModel>,
    pick: impl Fn(&AnalyticsData) -> T + Send + Sync + 'static,
) -> Signal<T>
where
    T: Default + Send + Sync + 'static,
{
    Signal::derive(move || model.with(|m| m.analytics.as_ref().map(&pick).unwrap_or_default()))
}

fn export_rows<T: CsvExportable>(rows: Vec<T>, filename: String) {
    if let Err(err) = export_to_csv(&rows, &filename) {
        log::warn!("CSV export of {} skipped: {}", filename, err);
    }
}

/// Savings group analytics page: KPIs, overview charts, filters and report
/// generation for the selected group.
#[component]
pub fn SavingsAnalyticsDashboard(session: Session) -> impl IntoView {
    let access_token = StoredValue::new(session.access_token.clone());
    let user_name = session.user.display_name().to_string();

    let model = RwSignal::new(DashboardModel::default());
    let active_tab = RwSignal::new(DashboardTab::default());
    let sidebar_open = RwSignal::new(true);
    let filters_expanded = RwSignal::new(false);
    // Draft edited by the panel; the model holds the applied copy.
    let filters = RwSignal::new(FilterConfiguration::default());
    let is_generating = RwSignal::new(false);

    let is_loading = Memo::new(move |_| model.with(|m| m.is_loading()));
    let has_data = Memo::new(move |_| model.with(|m| m.analytics.is_some()));
    let shows_empty_state = Memo::new(move |_| model.with(|m| m.shows_empty_state()));

    // Fetch analytics for a request; the response is applied only if no
    // newer request was issued in the meantime.
    let run_analytics = Callback::new(move |request: AnalyticsRequest| {
        let token = access_token.get_value();
        spawn_local(async move {
            let data = match api::get_analytics(&token, &request.group_id, &request.filters).await {
                Ok(payload) => {
                    let data = AnalyticsData::from_payload(payload);
                    match &data {
                        Some(d) if d.skipped_records > 0 => log::warn!(
                            "Skipped {} invalid analytics records for group {}",
                            d.skipped_records,
                            request.group_id
                        ),
                        None => log::info!("No analytics data for group {}", request.group_id),
                        _ => {}
                    }
                    data
                }
                Err(err) => {
                    log::error!("Failed to load analytics for group {}: {}", request.group_id, err);
                    None
                }
            };

            let applied = model
                .try_update(|m| m.analytics_loaded(request.token, data))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale analytics response for group {}", request.group_id);
            }
        });
    });

    // Load groups on mount
    Effect::new(move |_| {
        model.update(|m| m.begin_groups_fetch());
        let token = access_token.get_value();
        spawn_local(async move {
            let next = match api::get_groups(&token).await {
                Ok(groups) => {
                    log::info!("Loaded {} savings groups", groups.len());
                    model.try_update(|m| m.groups_loaded(groups)).flatten()
                }
                Err(err) => {
                    log::error!("Failed to load savings groups: {}", err);
                    model.try_update(|m| m.groups_failed());
                    None
                }
            };
            if let Some(request) = next {
                run_analytics.run(request);
            }
        });
    });

    let reload = move || {
        if let Some(request) = model.try_update(|m| m.reload()).flatten() {
            run_analytics.run(request);
        }
    };

    let on_group_change = move |ev: ev::Event| {
        let group_id = event_target_value(&ev);
        if let Some(request) = model.try_update(|m| m.select_group(group_id)) {
            run_analytics.run(request);
        }
    };

    let on_export = move |_| {
        let (rows, filename) = model.with_untracked(|m| {
            (
                m.analytics
                    .as_ref()
                    .map(|a| a.savings_growth.clone())
                    .unwrap_or_default(),
                export_filename(m.selected_group_name(), "savings-growth"),
            )
        });
        export_rows(rows, filename);
    };

    let on_export_data = Callback::new(move |_| {
        let (rows, filename) = model.with_untracked(|m| {
            (
                m.analytics
                    .as_ref()
                    .map(|a| a.risk_members.clone())
                    .unwrap_or_default(),
                export_filename(m.selected_group_name(), "risk-members"),
            )
        });
        export_rows(rows, filename);
    });

    let on_filter_change = Callback::new(move |(key, value): (FilterKey, String)| {
        filters.update(|f| f.set(key, value));
    });
    let apply_filters = move |applied: FilterConfiguration| {
        if let Some(request) = model.try_update(|m| m.apply_filters(applied)).flatten() {
            run_analytics.run(request);
        }
    };
    let on_apply_filters = Callback::new(move |_| apply_filters(filters.get_untracked()));
    let on_reset_filters = Callback::new(move |_| {
        filters.set(FilterConfiguration::default());
        apply_filters(FilterConfiguration::default());
    });

    let on_generate_report = Callback::new(move |config: ReportConfiguration| {
        let Some(group_id) = model.with_untracked(|m| m.selected_group.clone()) else {
            log::warn!("Report requested without a selected savings group");
            return;
        };
        let request = ReportRequest::new(group_id, config);
        let token = access_token.get_value();
        is_generating.set(true);
        spawn_local(async move {
            match api::request_report(&token, &request).await {
                Ok(ticket) => log::info!("Report {} accepted: {}", ticket.request_id, ticket.status),
                Err(err) => log::error!("Report {} failed: {}", request.request_id, err),
            }
            is_generating.try_set(false);
        });
    });

    let group_options = move || {
        model.with(|m| {
            m.groups
                .iter()
                .map(|g| {
                    let selected = m.selected_group.as_deref() == Some(g.id.as_str());
                    view! { <option value=g.id.clone() selected=selected>{g.selector_label()}</option> }
                })
                .collect_view()
        })
    };

    let tabs = move || {
        DashboardTab::ALL
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        class="savings-dashboard__tab"
                        class:savings-dashboard__tab--active=move || active_tab.get() == tab
                        on:click=move |_| active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let overview = move || {
        view! {
            <KpiGrid kpis=analytics_part(model, |a| a.kpis) />
            <div class="chart-grid">
                <ChartContainer title="Savings growth" subtitle="Total savings and active loans" delay_ms=0>
                    <SavingsGrowthChart
                        data=analytics_part(model, |a| a.savings_growth.clone())
                        time_range=Signal::derive(move || model.with(|m| m.applied_filters.time_range.clone()))
                    />
                </ChartContainer>
                <ChartContainer title="Loan distribution" subtitle="Outstanding loans by purpose" delay_ms=60>
                    <LoanDistributionChart data=analytics_part(model, |a| a.loan_distribution.clone()) />
                </ChartContainer>
                <ChartContainer title="Member engagement" delay_ms=120>
                    <MemberEngagementChart
                        data=analytics_part(model, |a| a.member_engagement.clone())
                        metric=Signal::derive(move || model.with(|m| m.applied_filters.metric_type.clone()))
                    />
                </ChartContainer>
                <ChartContainer title="Risk heatmap" subtitle="Members by loan risk" delay_ms=180>
                    <RiskHeatmap data=analytics_part(model, |a| a.risk_members.clone()) />
                </ChartContainer>
            </div>
        }
    };

    let content = move || {
        if has_data.get() {
            if active_tab.get().renders_charts() {
                overview().into_any()
            } else {
                view! { <></> }.into_any()
            }
        } else if shows_empty_state.get() {
            view! {
                <div class="savings-dashboard__empty">
                    {icon("empty")}
                    <h3>"No analytics available"</h3>
                    <p>"Select another group or adjust the filters and try again."</p>
                </div>
            }
            .into_any()
        } else if is_loading.get() {
            view! {
                <div class="savings-dashboard__loading">
                    <Spinner />
                    <span>"Loading analytics..."</span>
                </div>
            }
            .into_any()
        } else {
            view! { <></> }.into_any()
        }
    };

    view! {
        <div
            id="d410_savings_analytics--dashboard"
            class="savings-dashboard"
            class:savings-dashboard--sidebar-collapsed=move || !sidebar_open.get()
        >
            <aside class="savings-dashboard__sidebar">
                <button
                    class="savings-dashboard__menu"
                    title="Toggle sidebar"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    {icon("menu")}
                </button>
                <Show when=move || sidebar_open.get()>
                    <label class="savings-dashboard__group">
                        <span class="savings-dashboard__label">"Savings group"</span>
                        <select class="form__select" on:change=on_group_change>
                            {group_options}
                        </select>
                    </label>
                    <nav class="savings-dashboard__tabs">{tabs}</nav>
                    <div class="savings-dashboard__user">{user_name.clone()}</div>
                </Show>
            </aside>

            <main class="savings-dashboard__main">
                <PageHeader
                    title="Savings Group Analytics"
                    subtitle=Signal::derive(move || {
                        model.with(|m| m.selected_group_name().map(str::to_string))
                    })
                >
                    {move || (is_loading.get() && has_data.get()).then(|| view! { <Spinner /> })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=is_loading
                        on_click=move |_| reload()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || !has_data.get())
                        on_click=on_export
                    >
                        {icon("download")}
                        " Export"
                    </Button>
                </PageHeader>

                <FilterPanel
                    filters=filters
                    is_expanded=filters_expanded
                    on_toggle=Callback::new(move |_| filters_expanded.update(|e| *e = !*e))
                    on_filter_change=on_filter_change
                    on_apply_filters=on_apply_filters
                    on_reset_filters=on_reset_filters
                    on_export_data=on_export_data
                />

                <div class="savings-dashboard__content">{content}</div>

                <ReportGenerator
                    on_generate_report=on_generate_report
                    is_generating=is_generating
                />
            </main>
        </div>
    }
}
