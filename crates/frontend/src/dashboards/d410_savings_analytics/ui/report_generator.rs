use crate::shared::icons::icon;
use contracts::dashboards::d410_group_analytics::{
    ReportConfiguration, ReportField, ReportFormat, ReportSection, ReportTimeRange, ReportType,
};
use leptos::ev;
use leptos::prelude::*;
use std::str::FromStr;
use thaw::{Button, ButtonAppearance, Card};

/// Report composition form. Holds the draft configuration locally and hands
/// a snapshot to `on_generate_report` on submit.
#[component]
pub fn ReportGenerator(
    on_generate_report: Callback<ReportConfiguration>,
    #[prop(into)] is_generating: Signal<bool>,
) -> impl IntoView {
    let config = RwSignal::new(ReportConfiguration::default());
    let apply = move |field: ReportField| config.update(|c| *c = c.with(field));

    let on_type_change = move |ev: ev::Event| {
        match ReportType::from_str(&event_target_value(&ev)) {
            Ok(t) => apply(ReportField::Type(t)),
            Err(e) => log::warn!("{}", e),
        }
    };
    let on_format_change = move |ev: ev::Event| {
        match ReportFormat::from_str(&event_target_value(&ev)) {
            Ok(f) => apply(ReportField::Format(f)),
            Err(e) => log::warn!("{}", e),
        }
    };
    let on_range_change = move |ev: ev::Event| {
        match ReportTimeRange::from_str(&event_target_value(&ev)) {
            Ok(r) => apply(ReportField::TimeRange(r)),
            Err(e) => log::warn!("{}", e),
        }
    };

    let submit = move |_| on_generate_report.run(config.get_untracked());

    view! {
        <Card class="report-generator">
            <div class="report-generator__header">
                {icon("report")}
                <h3 class="report-generator__title">"Generate report"</h3>
            </div>

            <label class="report-generator__field">
                <span class="report-generator__label">"Report type"</span>
                <select
                    class="form__select"
                    prop:value=move || config.with(|c| c.report_type.code())
                    on:change=on_type_change
                >
                    {ReportType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <span class="report-generator__help">
                    {move || config.with(|c| c.report_type.description())}
                </span>
            </label>

            <label class="report-generator__field">
                <span class="report-generator__label">"Format"</span>
                <select
                    class="form__select"
                    prop:value=move || config.with(|c| c.format.code())
                    on:change=on_format_change
                >
                    {ReportFormat::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.code()>{f.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="report-generator__field">
                <span class="report-generator__label">"Period"</span>
                <select
                    class="form__select"
                    prop:value=move || config.with(|c| c.time_range.code())
                    on:change=on_range_change
                >
                    {ReportTimeRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <fieldset class="report-generator__sections">
                <legend class="report-generator__label">"Sections"</legend>
                {ReportSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <label class="report-generator__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || config.with(|c| c.includes(section))
                                    on:change=move |ev| apply(section.field(event_target_checked(&ev)))
                                />
                                {section.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>

            <label class="report-generator__field">
                <span class="report-generator__label">"Custom title"</span>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Optional"
                    prop:value=move || config.with(|c| c.custom_title.clone())
                    on:input=move |ev| apply(ReportField::CustomTitle(event_target_value(&ev)))
                />
            </label>

            <label class="report-generator__field">
                <span class="report-generator__label">"Send to"</span>
                <input
                    class="form__input"
                    type="email"
                    placeholder="treasurer@example.org"
                    prop:value=move || config.with(|c| c.recipient_email.clone())
                    on:input=move |ev| apply(ReportField::RecipientEmail(event_target_value(&ev)))
                />
            </label>

            <div class="report-generator__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_generating
                    on_click=submit
                >
                    {move || if is_generating.get() { "Generating..." } else { "Generate report" }}
                </Button>
            </div>
        </Card>
    }
}
