use crate::shared::charts::geometry::{area_path, line_path, nice_ceiling, ticks, LinearScale, PlotArea};
use crate::shared::charts::palette::{LOANS_COLOR, SAVINGS_COLOR};
use crate::shared::charts::{ChartTooltip, TooltipContent};
use crate::shared::format::{format_currency, format_currency_compact, format_long_date, format_short_date};
use contracts::dashboards::d410_group_analytics::{SavingsGrowthPoint, TimeRange};
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 260.0);
const MAX_X_LABELS: usize = 8;
const Y_TICKS: usize = 4;

/// Pixel positions of both series.
#[derive(Debug, Clone, PartialEq)]
struct GrowthLayout {
    xs: Vec<f64>,
    savings: Vec<(f64, f64)>,
    loans: Vec<(f64, f64)>,
    y_max: f64,
}

fn layout(points: &[SavingsGrowthPoint], area: &PlotArea) -> GrowthLayout {
    let peak = points
        .iter()
        .map(|p| p.total_savings.max(p.active_loans))
        .fold(0.0, f64::max);
    let y_max = nice_ceiling(peak);
    let y = LinearScale::new((0.0, y_max), (area.bottom(), area.top()));

    // A single point sits in the middle of the plot.
    let xs: Vec<f64> = if points.len() == 1 {
        vec![area.left() + area.inner_width() / 2.0]
    } else {
        let x = LinearScale::new(
            (0.0, points.len().saturating_sub(1) as f64),
            (area.left(), area.right()),
        );
        (0..points.len()).map(|i| x.map(i as f64)).collect()
    };

    let savings = xs
        .iter()
        .zip(points)
        .map(|(x, p)| (*x, y.map(p.total_savings.max(0.0))))
        .collect();
    let loans = xs
        .iter()
        .zip(points)
        .map(|(x, p)| (*x, y.map(p.active_loans.max(0.0))))
        .collect();

    GrowthLayout {
        xs,
        savings,
        loans,
        y_max,
    }
}

/// Every n-th date gets an axis label so at most `max_labels` are shown.
fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

fn range_caption(time_range: &str) -> &'static str {
    TimeRange::ALL
        .iter()
        .find(|r| r.value() == time_range)
        .map(|r| r.label())
        .unwrap_or("Selected period")
}

fn point_tooltip(point: &SavingsGrowthPoint) -> TooltipContent {
    TooltipContent::new(format_long_date(&point.date))
        .row("Total savings", format_currency(point.total_savings))
        .row("Active loans", format_currency(point.active_loans))
}

#[component]
pub fn SavingsGrowthChart(
    #[prop(into)] data: Signal<Vec<SavingsGrowthPoint>>,
    #[prop(into)] time_range: Signal<String>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let geometry = Memo::new(move |_| data.with(|points| layout(points, &AREA)));

    let tooltip = Signal::derive(move || {
        let index = hovered.get()?;
        data.with(|points| points.get(index).map(point_tooltip))
    });
    let tooltip_position = Signal::derive(move || {
        let Some(index) = hovered.get() else {
            return (0.0, 0.0);
        };
        geometry.with(|g| {
            g.savings
                .get(index)
                .map(|(x, y)| (x / AREA.width * 100.0, y / AREA.height * 100.0))
                .unwrap_or((0.0, 0.0))
        })
    });

    let y_axis = move || {
        let y_max = geometry.with(|g| g.y_max);
        let y = LinearScale::new((0.0, y_max), (AREA.bottom(), AREA.top()));
        ticks(y_max, Y_TICKS)
            .into_iter()
            .map(|tick| {
                let ty = y.map(tick);
                view! {
                    <g class="chart-axis__tick">
                        <line x1=AREA.left() x2=AREA.right() y1=ty y2=ty class="chart-grid-line" />
                        <text x=AREA.left() - 8.0 y=ty + 4.0 text-anchor="end" class="chart-axis__label">
                            {format_currency_compact(tick)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    let x_axis = move || {
        let xs = geometry.with(|g| g.xs.clone());
        let stride = label_stride(xs.len(), MAX_X_LABELS);
        data.with(|points| {
            points
                .iter()
                .zip(xs)
                .enumerate()
                .filter(|(i, _)| i % stride == 0)
                .map(|(_, (point, x))| {
                    view! {
                        <text x=x y=AREA.bottom() + 20.0 text-anchor="middle" class="chart-axis__label">
                            {format_short_date(&point.date)}
                        </text>
                    }
                })
                .collect_view()
        })
    };

    let hit_areas = move || {
        let xs = geometry.with(|g| g.xs.clone());
        let slot = if xs.len() > 1 {
            AREA.inner_width() / (xs.len() - 1) as f64
        } else {
            AREA.inner_width()
        };
        xs.into_iter()
            .enumerate()
            .map(|(i, x)| {
                view! {
                    <rect
                        x=x - slot / 2.0
                        y=AREA.top()
                        width=slot
                        height=AREA.bottom() - AREA.top()
                        fill="transparent"
                        on:mouseenter=move |_| hovered.set(Some(i))
                    />
                }
            })
            .collect_view()
    };

    let hover_marker = move || {
        let index = hovered.get()?;
        geometry.with(|g| {
            let (sx, sy) = *g.savings.get(index)?;
            let (lx, ly) = *g.loans.get(index)?;
            Some(view! {
                <g class="chart-hover">
                    <line x1=sx x2=sx y1=AREA.top() y2=AREA.bottom() class="chart-hover__rule" />
                    <circle cx=sx cy=sy r="4" fill=SAVINGS_COLOR />
                    <circle cx=lx cy=ly r="4" fill=LOANS_COLOR />
                </g>
            })
        })
    };

    view! {
        <div class="chart chart--savings-growth">
            <div class="chart__caption">{move || range_caption(&time_range.get())}</div>
            <div class="chart__canvas" on:mouseleave=move |_| hovered.set(None)>
                <svg viewBox=AREA.view_box() preserveAspectRatio="none" role="img" aria-label="Savings growth">
                    <defs>
                        <linearGradient id="savings-growth-fill" x1="0" y1="0" x2="0" y2="1">
                            <stop offset="0%" stop-color=SAVINGS_COLOR stop-opacity="0.35" />
                            <stop offset="100%" stop-color=SAVINGS_COLOR stop-opacity="0.02" />
                        </linearGradient>
                    </defs>
                    {y_axis}
                    <path
                        d=move || geometry.with(|g| area_path(&g.savings, AREA.bottom()))
                        fill="url(#savings-growth-fill)"
                    />
                    <path
                        d=move || geometry.with(|g| line_path(&g.savings))
                        fill="none"
                        stroke=SAVINGS_COLOR
                        stroke-width="2.5"
                    />
                    <path
                        d=move || geometry.with(|g| line_path(&g.loans))
                        fill="none"
                        stroke=LOANS_COLOR
                        stroke-width="2"
                        stroke-dasharray="6 4"
                    />
                    {x_axis}
                    {hover_marker}
                    {hit_areas}
                </svg>
                <ChartTooltip content=tooltip position=tooltip_position />
            </div>
            <div class="chart-legend">
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {}", SAVINGS_COLOR)></span>
                    "Total savings"
                </span>
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {}", LOANS_COLOR)></span>
                    "Active loans"
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, savings: f64, loans: f64) -> SavingsGrowthPoint {
        SavingsGrowthPoint {
            date: date.to_string(),
            total_savings: savings,
            active_loans: loans,
        }
    }

    #[test]
    fn layout_spans_the_plot_width() {
        let points = vec![
            point("2024-01-01", 1000.0, 200.0),
            point("2024-02-01", 1500.0, 400.0),
            point("2024-03-01", 2000.0, 300.0),
        ];
        let g = layout(&points, &AREA);
        assert_eq!(g.y_max, 2000.0);
        assert_eq!(g.xs.first().copied(), Some(AREA.left()));
        assert_eq!(g.xs.last().copied(), Some(AREA.right()));
        // The peak touches the top edge.
        assert_eq!(g.savings[2].1, AREA.top());
        assert!(g.loans.iter().all(|(_, y)| *y <= AREA.bottom() && *y >= AREA.top()));
    }

    #[test]
    fn negative_values_stay_on_the_axis() {
        let g = layout(
            &[point("2024-01-01", -300.0, 100.0), point("2024-02-01", 200.0, -50.0)],
            &AREA,
        );
        assert_eq!(g.savings[0].1, AREA.bottom());
        assert_eq!(g.loans[1].1, AREA.bottom());
        assert!(g.savings.iter().chain(&g.loans).all(|(_, y)| *y <= AREA.bottom()));
    }

    #[test]
    fn single_point_is_centered() {
        let g = layout(&[point("2024-01-01", 10.0, 0.0)], &AREA);
        assert_eq!(g.xs, vec![AREA.left() + AREA.inner_width() / 2.0]);
    }

    #[test]
    fn empty_series_has_no_paths() {
        let g = layout(&[], &AREA);
        assert!(g.savings.is_empty());
        assert_eq!(line_path(&g.savings), "");
        assert_eq!(g.y_max, 1.0);
    }

    #[test]
    fn axis_labels_are_thinned() {
        assert_eq!(label_stride(5, 8), 1);
        assert_eq!(label_stride(30, 8), 4);
        assert_eq!(label_stride(0, 8), 1);
    }

    #[test]
    fn caption_falls_back_for_unknown_range() {
        assert_eq!(range_caption("90d"), "Last 90 days");
        assert_eq!(range_caption("fortnight"), "Selected period");
    }

    #[test]
    fn tooltip_shows_date_and_both_series() {
        let content = point_tooltip(&point("2024-03-15", 1234.99, 500.0));
        assert_eq!(content.title, "Mar 15, 2024");
        assert_eq!(
            content.rows,
            vec![
                ("Total savings".to_string(), "$1,235".to_string()),
                ("Active loans".to_string(), "$500".to_string()),
            ]
        );
    }
}
