use crate::shared::charts::geometry::{arc_slices, donut_segment_path, ArcSlice};
use crate::shared::charts::palette::category_color;
use crate::shared::charts::{ChartTooltip, TooltipContent};
use crate::shared::format::{format_currency, format_currency_compact, format_percent};
use contracts::dashboards::d410_group_analytics::LoanDistributionSlice;
use leptos::prelude::*;
use std::f64::consts::FRAC_PI_2;

const SIZE: f64 = 240.0;
const OUTER_RADIUS: f64 = 110.0;
const INNER_RADIUS: f64 = 68.0;

fn slice_tooltip(slice: &LoanDistributionSlice) -> TooltipContent {
    TooltipContent::new(slice.category.clone())
        .row("Amount", format_currency(slice.value))
        .row("Share", format_percent(slice.percentage))
}

/// Tooltip anchor: middle of the ring at the slice's mid angle, in percent
/// of the chart box.
fn slice_anchor(arc: &ArcSlice) -> (f64, f64) {
    let mid = (arc.start + arc.end) / 2.0 - FRAC_PI_2;
    let r = (OUTER_RADIUS + INNER_RADIUS) / 2.0;
    let c = SIZE / 2.0;
    (
        (c + r * mid.cos()) / SIZE * 100.0,
        (c + r * mid.sin()) / SIZE * 100.0,
    )
}

#[component]
pub fn LoanDistributionChart(#[prop(into)] data: Signal<Vec<LoanDistributionSlice>>) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let arcs = Memo::new(move |_| {
        data.with(|slices| arc_slices(&slices.iter().map(|s| s.value).collect::<Vec<_>>()))
    });
    let total = Signal::derive(move || data.with(|slices| slices.iter().map(|s| s.value.max(0.0)).sum::<f64>()));

    let tooltip = Signal::derive(move || {
        let index = hovered.get()?;
        data.with(|slices| slices.get(index).map(slice_tooltip))
    });
    let tooltip_position = Signal::derive(move || {
        hovered
            .get()
            .and_then(|index| arcs.with(|a| a.get(index).map(slice_anchor)))
            .unwrap_or((50.0, 50.0))
    });

    let segments = move || {
        let c = SIZE / 2.0;
        arcs.get()
            .into_iter()
            .enumerate()
            .map(|(i, arc)| {
                let d = donut_segment_path(c, c, OUTER_RADIUS, INNER_RADIUS, &arc);
                view! {
                    <path
                        d=d
                        fill=category_color(i)
                        class="donut__segment"
                        class:donut__segment--active=move || hovered.get() == Some(i)
                        on:mouseenter=move |_| hovered.set(Some(i))
                    />
                }
            })
            .collect_view()
    };

    let legend = move || {
        data.with(|slices| {
            slices
                .iter()
                .enumerate()
                .map(|(i, slice)| {
                    view! {
                        <li class="chart-legend__item">
                            <span class="chart-legend__swatch" style=format!("background: {}", category_color(i))></span>
                            <span class="chart-legend__label">{slice.category.clone()}</span>
                            <span class="chart-legend__value">{format_percent(slice.percentage)}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart chart--loan-distribution">
            <div class="chart__canvas chart__canvas--square" on:mouseleave=move |_| hovered.set(None)>
                <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) role="img" aria-label="Loan distribution">
                    {segments}
                    <text x=SIZE / 2.0 y=SIZE / 2.0 - 4.0 text-anchor="middle" class="donut__total">
                        {move || format_currency_compact(total.get())}
                    </text>
                    <text x=SIZE / 2.0 y=SIZE / 2.0 + 16.0 text-anchor="middle" class="donut__caption">
                        "in loans"
                    </text>
                </svg>
                <ChartTooltip content=tooltip position=tooltip_position />
            </div>
            <ul class="chart-legend chart-legend--vertical">{legend}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_shows_amount_and_share() {
        let slice = LoanDistributionSlice {
            category: "School fees".into(),
            value: 4500.0,
            percentage: 37.5,
        };
        let content = slice_tooltip(&slice);
        assert_eq!(content.title, "School fees");
        assert_eq!(
            content.rows,
            vec![
                ("Amount".to_string(), "$4,500".to_string()),
                ("Share".to_string(), "37.5%".to_string()),
            ]
        );
    }

    #[test]
    fn anchor_of_right_half_is_right_of_center() {
        let arc = ArcSlice {
            start: 0.0,
            end: FRAC_PI_2 * 2.0,
            fraction: 0.5,
        };
        let (x, y) = slice_anchor(&arc);
        assert!(x > 50.0);
        assert!((y - 50.0).abs() < 1e-9);
    }
}
