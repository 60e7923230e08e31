use leptos::prelude::*;

use crate::i18n::{tr, use_language};
use crate::schedule::{WorkWeek, ALL_WEEKDAYS};

/// Weekly schedule dialog, one row per day, closed days tinted red.
#[component]
pub fn WorkdaysDialog(
    schedule: Signal<Option<WorkWeek>>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language = use_language().language;

    view! {
        <Show when=move || schedule.get().is_some()>
            <div class="workdays-overlay" on:click=move |_| on_close()>
                <style>{include_str!("workdays_dialog.css")}</style>
                <div class="workdays-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>{move || tr(language.get(), "factory.workingHours")}</h3>
                    <div class="workdays-grid">
                        {move || {
                            let week = schedule.get().unwrap_or_default();
                            ALL_WEEKDAYS
                                .into_iter()
                                .map(|weekday| {
                                    let day = week.day(weekday).clone();
                                    let closed = day.closed;
                                    let lang = language.get();
                                    let hours = if closed {
                                        tr(lang, "factory.closed").to_string()
                                    } else {
                                        format!("{} - {}", day.from, day.to)
                                    };
                                    view! {
                                        <div class="workday-row" class:closed=closed>
                                            <span>{tr(lang, weekday.label_key())}</span>
                                            <span>{hours}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
