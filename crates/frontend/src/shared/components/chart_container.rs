//! Card wrapper shared by every dashboard chart.
//!
//! The card fades in using the `card-appear` keyframes; pass increasing
//! `delay_ms` values to stagger a row of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ChartContainer(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class="chart-container" attr:style=style>
            <div class="chart-container__header">
                <h3 class="chart-container__title">{title}</h3>
                {subtitle.map(|s| view! { <div class="chart-container__subtitle">{s}</div> })}
            </div>
            <div class="chart-container__body">{children()}</div>
        </Card>
    }
}
