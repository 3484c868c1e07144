use leptos::prelude::*;

/// Text of a chart tooltip: a heading plus `label: value` rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipContent {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl TooltipContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    /// Adds the row only when `value` is present.
    pub fn optional_row(self, label: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.row(label, value),
            None => self,
        }
    }
}

/// Floating tooltip box. `position` is in percent of the chart container so
/// it follows the responsive SVG.
#[component]
pub fn ChartTooltip(
    #[prop(into)] content: Signal<Option<TooltipContent>>,
    #[prop(into)] position: Signal<(f64, f64)>,
) -> impl IntoView {
    move || {
        content.get().map(|content| {
            let (x, y) = position.get();
            let style = format!("left: {:.1}%; top: {:.1}%;", x, y);
            view! {
                <div class="chart-tooltip" style=style role="tooltip">
                    <div class="chart-tooltip__title">{content.title}</div>
                    {content
                        .rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="chart-tooltip__row">
                                    <span class="chart-tooltip__label">{label}": "</span>
                                    <span class="chart-tooltip__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_rows_are_skipped_when_absent() {
        let content = TooltipContent::new("Amina")
            .row("Value", "$120")
            .optional_row("Participation", None)
            .optional_row("Share", Some("12.0%".into()));
        assert_eq!(content.title, "Amina");
        assert_eq!(
            content.rows,
            vec![
                ("Value".to_string(), "$120".to_string()),
                ("Share".to_string(), "12.0%".to_string())
            ]
        );
    }
}
