use crate::shared::components::KpiCard;
use crate::shared::format::{format_currency, format_number, format_percent};
use contracts::dashboards::d410_group_analytics::Kpis;
use leptos::prelude::*;

/// The four headline cards above the charts.
#[component]
pub fn KpiGrid(#[prop(into)] kpis: Signal<Kpis>) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            <KpiCard
                label="Total Savings"
                icon_name="savings"
                value=Signal::derive(move || format_currency(kpis.get().total_savings))
                change_percent=Signal::derive(move || Some(kpis.get().savings_growth))
                subtitle="vs previous period"
            />
            <KpiCard
                label="Active Loans"
                icon_name="loans"
                value=Signal::derive(move || format_currency(kpis.get().active_loans))
                change_percent=Signal::derive(move || Some(kpis.get().loan_growth))
                subtitle="outstanding principal"
            />
            <KpiCard
                label="Members"
                icon_name="members"
                value=Signal::derive(move || format_number(kpis.get().total_members))
                change_percent=Signal::derive(move || Some(kpis.get().member_growth))
            />
            <KpiCard
                label="Repayment Rate"
                icon_name="repayment"
                value=Signal::derive(move || format_percent(kpis.get().repayment_rate))
                change_percent=Signal::derive(move || Some(kpis.get().repayment_trend))
                subtitle="on-time repayments"
            />
        </div>
    }
}
