use crate::shared::charts::geometry::{bands, nice_ceiling, ticks, Band, LinearScale, PlotArea};
use crate::shared::charts::{ChartTooltip, TooltipContent};
use crate::shared::format::{format_currency, format_currency_compact, format_percent};
use contracts::dashboards::d410_group_analytics::{MemberEngagement, MetricKind};
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 260.0);
const Y_TICKS: usize = 4;
const BAR_GAP: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    band: Band,
    top: f64,
    height: f64,
}

fn bars(members: &[MemberEngagement], area: &PlotArea) -> (Vec<Bar>, f64) {
    let y_max = nice_ceiling(members.iter().map(|m| m.value).fold(0.0, f64::max));
    let y = LinearScale::new((0.0, y_max), (area.bottom(), area.top()));
    let bars = bands(members.len(), area.left(), area.inner_width(), BAR_GAP)
        .into_iter()
        .zip(members)
        .map(|(band, m)| {
            let top = y.map(m.value.max(0.0));
            Bar {
                band,
                top,
                height: area.bottom() - top,
            }
        })
        .collect();
    (bars, y_max)
}

fn member_tooltip(member: &MemberEngagement, kind: MetricKind) -> TooltipContent {
    TooltipContent::new(member.name.clone())
        .row(kind.label(), format_currency(member.value))
        .optional_row("Participation", member.participation_rate.map(format_percent))
}

/// Long member names are cut so axis labels do not overlap.
fn short_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let cut: String = name.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn MemberEngagementChart(
    #[prop(into)] data: Signal<Vec<MemberEngagement>>,
    /// Metric filter value; selects the bar color.
    #[prop(into)]
    metric: Signal<String>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let kind = Memo::new(move |_| metric.with(|m| MetricKind::parse(m)));
    let layout = Memo::new(move |_| data.with(|members| bars(members, &AREA)));

    let tooltip = Signal::derive(move || {
        let index = hovered.get()?;
        let kind = kind.get();
        data.with(|members| members.get(index).map(|m| member_tooltip(m, kind)))
    });
    let tooltip_position = Signal::derive(move || {
        hovered
            .get()
            .and_then(|index| {
                layout.with(|(bars, _)| {
                    bars.get(index).map(|bar| {
                        (bar.band.center() / AREA.width * 100.0, bar.top / AREA.height * 100.0)
                    })
                })
            })
            .unwrap_or((0.0, 0.0))
    });

    let y_axis = move || {
        let y_max = layout.with(|(_, y_max)| *y_max);
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

    let bar_views = move || {
        let color = kind.get().color();
        let (bars, _) = layout.get();
        let names: Vec<String> = data.with(|members| members.iter().map(|m| short_name(&m.name, 12)).collect());
        bars.into_iter()
            .zip(names)
            .enumerate()
            .map(|(i, (bar, name))| {
                view! {
                    <g class="bar" on:mouseenter=move |_| hovered.set(Some(i))>
                        <rect
                            x=bar.band.x
                            y=bar.top
                            width=bar.band.width
                            height=bar.height
                            rx="3"
                            fill=color
                            fill-opacity=move || if hovered.get() == Some(i) { "1" } else { "0.85" }
                        />
                        <text x=bar.band.center() y=AREA.bottom() + 20.0 text-anchor="middle" class="chart-axis__label">
                            {name}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart chart--member-engagement">
            <div class="chart__canvas" on:mouseleave=move |_| hovered.set(None)>
                <svg viewBox=AREA.view_box() preserveAspectRatio="none" role="img" aria-label="Member engagement">
                    {y_axis}
                    {bar_views}
                </svg>
                <ChartTooltip content=tooltip position=tooltip_position />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, value: f64, rate: Option<f64>) -> MemberEngagement {
        MemberEngagement {
            name: name.to_string(),
            value,
            participation_rate: rate,
        }
    }

    #[test]
    fn tallest_bar_reaches_the_scale_top() {
        let (bars, y_max) = bars(&[member("Amina", 500.0, None), member("Baraka", 250.0, None)], &AREA);
        assert_eq!(y_max, 500.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].top, AREA.top());
        assert_eq!(bars[1].height, (AREA.bottom() - AREA.top()) / 2.0);
        assert!(bars[0].band.x < bars[1].band.x);
    }

    #[test]
    fn negative_values_draw_empty_bars() {
        let (bars, _) = bars(&[member("Chege", -20.0, None)], &AREA);
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn tooltip_includes_participation_only_when_known() {
        let with_rate = member_tooltip(&member("Amina", 1200.0, Some(87.5)), MetricKind::Contributions);
        assert_eq!(
            with_rate.rows,
            vec![
                ("Contributions".to_string(), "$1,200".to_string()),
                ("Participation".to_string(), "87.5%".to_string()),
            ]
        );

        let without = member_tooltip(&member("Baraka", 10.0, None), MetricKind::Other);
        assert_eq!(without.rows.len(), 1);
    }

    #[test]
    fn long_names_are_shortened() {
        assert_eq!(short_name("Amina", 12), "Amina");
        assert_eq!(short_name("Wanjiku Njoroge Kamau", 8), "Wanjiku…");
    }
}
