use crate::shared::charts::{ChartTooltip, TooltipContent};
use crate::shared::format::{format_currency, format_long_date, format_number, format_percent};
use contracts::dashboards::d410_group_analytics::{RiskLevel, RiskMember, RiskSummary};
use leptos::prelude::*;

const COLUMNS: usize = 10;

fn severity(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::High => 0,
        RiskLevel::Medium => 1,
        RiskLevel::Low => 2,
    }
}

/// High risk first, then longest overdue. Ties keep their input order.
fn ordered(members: &[RiskMember]) -> Vec<RiskMember> {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| {
        severity(a.risk_level)
            .cmp(&severity(b.risk_level))
            .then(b.days_overdue.cmp(&a.days_overdue))
    });
    sorted
}

fn member_tooltip(member: &RiskMember) -> TooltipContent {
    TooltipContent::new(member.name.clone())
        .row("Risk", member.risk_level.label())
        .row("Outstanding", format_currency(member.outstanding_loans))
        .row("Repayment rate", format_percent(member.repayment_rate))
        .row("Days overdue", member.days_overdue.to_string())
        .row("Credit score", format_number(member.credit_score))
        .optional_row("Last payment", member.last_payment.as_deref().map(format_long_date))
}

/// Tooltip anchor below the cell at `index`, in percent of the grid.
fn cell_anchor(index: usize, count: usize) -> (f64, f64) {
    let rows = count.div_ceil(COLUMNS).max(1);
    let col = index % COLUMNS;
    let row = index / COLUMNS;
    (
        (col as f64 + 0.5) / COLUMNS as f64 * 100.0,
        (row as f64 + 1.0) / rows as f64 * 100.0,
    )
}

#[component]
pub fn RiskHeatmap(#[prop(into)] data: Signal<Vec<RiskMember>>) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let members = Memo::new(move |_| data.with(|m| ordered(m)));

    let tooltip = Signal::derive(move || {
        let index = hovered.get()?;
        members.with(|m| m.get(index).map(member_tooltip))
    });
    let tooltip_position = Signal::derive(move || {
        hovered
            .get()
            .map(|index| cell_anchor(index, members.with(|m| m.len())))
            .unwrap_or((0.0, 0.0))
    });

    let summary = move || {
        let summary = data.with(|m| RiskSummary::from_members(m));
        RiskLevel::ALL
            .into_iter()
            .rev()
            .map(|level| {
                view! {
                    <div class="risk-summary__item">
                        <span class="risk-summary__swatch" style=format!("background: {}", level.color())></span>
                        <span class="risk-summary__label">{level.label()}</span>
                        <span class="risk-summary__count">{summary.count(level)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let cells = move || {
        members.with(|m| {
            m.iter()
                .enumerate()
                .map(|(i, member)| {
                    let style = format!("background: {};", member.risk_level.color());
                    let initials: String = member
                        .name
                        .split_whitespace()
                        .filter_map(|part| part.chars().next())
                        .take(2)
                        .collect();
                    view! {
                        <div
                            class="risk-heatmap__cell"
                            class:risk-heatmap__cell--active=move || hovered.get() == Some(i)
                            style=style
                            title=member.name.clone()
                            on:mouseenter=move |_| hovered.set(Some(i))
                        >
                            {initials}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart chart--risk-heatmap">
            <div class="risk-summary">{summary}</div>
            <div class="chart__canvas" on:mouseleave=move |_| hovered.set(None)>
                <div
                    class="risk-heatmap__grid"
                    style=format!("grid-template-columns: repeat({}, 1fr);", COLUMNS)
                >
                    {cells}
                </div>
                <ChartTooltip content=tooltip position=tooltip_position />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, level: RiskLevel, days_overdue: u32) -> RiskMember {
        RiskMember {
            member_id: id.to_string(),
            name: format!("Member {id}"),
            risk_level: level,
            outstanding_loans: 2500.0,
            repayment_rate: 72.5,
            days_overdue,
            credit_score: 610.0,
            last_payment: Some("2024-02-28".to_string()),
        }
    }

    #[test]
    fn high_risk_and_most_overdue_come_first() {
        let members = vec![
            member("a", RiskLevel::Low, 0),
            member("b", RiskLevel::High, 5),
            member("c", RiskLevel::Medium, 40),
            member("d", RiskLevel::High, 30),
            member("e", RiskLevel::Low, 0),
        ];
        let ids: Vec<String> = ordered(&members).into_iter().map(|m| m.member_id).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a", "e"]);
    }

    #[test]
    fn ordering_keeps_every_member() {
        let members = vec![
            member("a", RiskLevel::Low, 0),
            member("b", RiskLevel::Low, 0),
            member("c", RiskLevel::Medium, 1),
            member("d", RiskLevel::High, 2),
            member("e", RiskLevel::High, 3),
            member("f", RiskLevel::High, 4),
        ];
        let sorted = ordered(&members);
        assert_eq!(
            RiskSummary::from_members(&sorted),
            RiskSummary::from_members(&members)
        );
        assert_eq!(RiskSummary::from_members(&sorted).total(), members.len());
    }

    #[test]
    fn tooltip_lists_member_details() {
        let content = member_tooltip(&member("a", RiskLevel::High, 12));
        assert_eq!(content.title, "Member a");
        assert_eq!(content.rows[0], ("Risk".to_string(), "High risk".to_string()));
        assert_eq!(content.rows[1].1, "$2,500");
        assert_eq!(content.rows[3].1, "12");
        assert_eq!(content.rows.last().map(|r| r.1.as_str()), Some("Feb 28, 2024"));
    }

    #[test]
    fn anchors_follow_the_grid() {
        assert_eq!(cell_anchor(0, 5), (5.0, 100.0));
        assert_eq!(cell_anchor(10, 20), (5.0, 100.0));
        assert_eq!(cell_anchor(9, 20).1, 50.0);
    }
}
