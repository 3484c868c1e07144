use crate::shared::format::format_percent;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Direction of a KPI change relative to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Changes within half a percent either way count as flat.
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.5 {
            Trend::Up
        } else if change_percent < -0.5 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Trend::Up => "kpi-card__trend kpi-card__trend--up",
            Trend::Down => "kpi-card__trend kpi-card__trend--down",
            Trend::Flat => "kpi-card__trend kpi-card__trend--flat",
        }
    }
}

/// Signed change text, e.g. `"+12.5%"`, `"-3.0%"`.
pub fn change_label(change_percent: f64) -> String {
    if change_percent > 0.0 {
        format!("+{}", format_percent(change_percent))
    } else {
        format_percent(change_percent)
    }
}

#[component]
pub fn KpiCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to previous period
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let trend_view = move || {
        change_percent.get().map(|pct| {
            let trend = Trend::from_change(pct);
            let arrow = match trend {
                Trend::Up => Some(icon("trend-up")),
                Trend::Down => Some(icon("trend-down")),
                Trend::Flat => None,
            };
            view! {
                <span class=trend.class()>
                    {arrow}
                    {change_label(pct)}
                </span>
            }
        })
    };

    view! {
        <div class="kpi-card">
            <div class="kpi-card__icon">{icon(&icon_name)}</div>
            <div class="kpi-card__content">
                <div class="kpi-card__label">{label}</div>
                <div class="kpi-card__value">{move || value.get()}</div>
                <div class="kpi-card__footer">
                    {trend_view}
                    {subtitle.map(|s| view! { <span class="kpi-card__subtitle">{s}</span> })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_thresholds() {
        assert_eq!(Trend::from_change(12.0), Trend::Up);
        assert_eq!(Trend::from_change(0.5), Trend::Flat);
        assert_eq!(Trend::from_change(-0.4), Trend::Flat);
        assert_eq!(Trend::from_change(-3.0), Trend::Down);
    }

    #[test]
    fn change_label_is_signed() {
        assert_eq!(change_label(12.5), "+12.5%");
        assert_eq!(change_label(-3.0), "-3.0%");
        assert_eq!(change_label(0.0), "0.0%");
    }
}
