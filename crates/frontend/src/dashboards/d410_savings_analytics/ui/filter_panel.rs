use crate::shared::icons::icon;
use contracts::dashboards::d410_group_analytics::{
    FilterConfiguration, FilterKey, MemberSegment, MetricType, QuickFilter, RiskFilter, TimeRange,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Collapsible filter panel of the analytics dashboard.
///
/// Fully controlled: values come from `filters`, every edit is reported
/// through `on_filter_change` and nothing is validated here.
#[component]
pub fn FilterPanel(
    #[prop(into)] filters: Signal<FilterConfiguration>,
    #[prop(into)] is_expanded: Signal<bool>,
    on_toggle: Callback<()>,
    on_filter_change: Callback<(FilterKey, String)>,
    on_apply_filters: Callback<()>,
    on_reset_filters: Callback<()>,
    on_export_data: Callback<()>,
) -> impl IntoView {
    let active_count = Signal::derive(move || filters.with(|f| f.active_count()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=move |_| on_toggle.run(())>
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| on_export_data.run(())
                    >
                        {icon("download")}
                        " Export data"
                    </Button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <div class="filter-panel__grid">
                        {select_field("Time range", FilterKey::TimeRange, TimeRange::options(), filters, on_filter_change)}
                        {move || {
                            filters.with(|f| f.shows_custom_range()).then(|| view! {
                                {text_field("Start date", "date", FilterKey::StartDate, filters, on_filter_change)}
                                {text_field("End date", "date", FilterKey::EndDate, filters, on_filter_change)}
                            })
                        }}
                        {select_field("Member segment", FilterKey::MemberSegment, MemberSegment::options(), filters, on_filter_change)}
                        {select_field("Metric", FilterKey::MetricType, MetricType::options(), filters, on_filter_change)}
                        {select_field("Risk level", FilterKey::RiskLevel, RiskFilter::options(), filters, on_filter_change)}
                        {text_field("Min amount", "number", FilterKey::MinAmount, filters, on_filter_change)}
                        {text_field("Max amount", "number", FilterKey::MaxAmount, filters, on_filter_change)}
                    </div>

                    <div class="filter-panel__quick">
                        <span class="filter-panel__label">"Quick filters"</span>
                        {QuickFilter::ALL
                            .iter()
                            .map(|quick| {
                                let value = quick.value();
                                let is_active = move || filters.with(|f| f.quick_filter == value);
                                view! {
                                    <button
                                        class="filter-chip"
                                        class:filter-chip--active=is_active
                                        on:click=move |_| {
                                            on_filter_change.run((FilterKey::QuickFilter, value.to_string()))
                                        }
                                    >
                                        {quick.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="filter-panel__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_reset_filters.run(())
                        >
                            "Reset"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_apply_filters.run(())
                        >
                            "Apply filters"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn select_field(
    label: &'static str,
    key: FilterKey,
    options: Vec<(&'static str, &'static str)>,
    filters: Signal<FilterConfiguration>,
    on_filter_change: Callback<(FilterKey, String)>,
) -> impl IntoView {
    view! {
        <label class="filter-panel__field">
            <span class="filter-panel__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || filters.with(|f| f.get(key).to_string())
                on:change=move |ev| on_filter_change.run((key, event_target_value(&ev)))
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let selected = move || filters.with(|f| f.get(key) == value);
                        view! { <option value=value selected=selected>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

fn text_field(
    label: &'static str,
    input_type: &'static str,
    key: FilterKey,
    filters: Signal<FilterConfiguration>,
    on_filter_change: Callback<(FilterKey, String)>,
) -> impl IntoView {
    view! {
        <label class="filter-panel__field">
            <span class="filter-panel__label">{label}</span>
            <input
                class="form__input"
                type=input_type
                prop:value=move || filters.with(|f| f.get(key).to_string())
                on:input=move |ev| on_filter_change.run((key, event_target_value(&ev)))
            />
        </label>
    }
}
