use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::i18n::{tr, use_language};

/// Notice key for a submission outcome, and whether the caller should
/// refresh its data to pick up the new rating.
fn submission_notice(outcome: &Result<(), String>) -> (&'static str, bool) {
    match outcome {
        Ok(()) => ("rating.success", true),
        Err(_) => ("rating.submitError", false),
    }
}

/// Modal for submitting a 1..=5 star rating for a factory.
#[component]
pub fn RatingDialog(
    factory_id: Signal<Option<u32>>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    /// Invoked after a rating is accepted, so the caller can refetch
    /// and show the updated average.
    on_submitted: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language = use_language().language;

    let (stars, set_stars) = signal(0u8);
    let (hovered, set_hovered) = signal(0u8);
    let (email, set_email) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (notice_key, set_notice_key) = signal::<Option<&'static str>>(None);

    let close = move || {
        set_stars.set(0);
        set_hovered.set(0);
        set_email.set(String::new());
        set_notice_key.set(None);
        on_close();
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(id) = factory_id.get_untracked() else {
            return;
        };
        let rating = stars.get_untracked();
        let address = email.get_untracked();
        if rating == 0 || address.trim().is_empty() {
            set_notice_key.set(Some("rating.fillAllFields"));
            return;
        }
        set_sending.set(true);
        set_notice_key.set(None);
        spawn_local(async move {
            let outcome = api::submit_rating(id, &address, rating).await;
            if let Err(e) = &outcome {
                log::error!("rating submission failed: {e}");
            }
            let (key, accepted) = submission_notice(&outcome);
            set_sending.set(false);
            set_notice_key.set(Some(key));
            if accepted {
                on_submitted();
            }
        });
    };

    view! {
        <Show when=move || factory_id.get().is_some()>
            <div class="rating-overlay" on:click=move |_| close()>
                <style>{include_str!("rating_dialog.css")}</style>
                <div class="rating-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>{move || tr(language.get(), "rating.title")}</h3>

                    <div class="rating-stars" dir="ltr">
                        {(1u8..=5)
                            .map(|value| {
                                view! {
                                    <button
                                        class="rating-star"
                                        class:lit=move || {
                                            let shown = if hovered.get() > 0 {
                                                hovered.get()
                                            } else {
                                                stars.get()
                                            };
                                            value <= shown
                                        }
                                        on:click=move |_| set_stars.set(value)
                                        on:mouseenter=move |_| set_hovered.set(value)
                                        on:mouseleave=move |_| set_hovered.set(0)
                                    >
                                        "\u{2605}"
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <input
                        type="email"
                        class="rating-email"
                        placeholder=move || tr(language.get(), "rating.emailPlaceholder")
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <Show when=move || notice_key.get().is_some()>
                        <p
                            class="rating-notice"
                            class:ok=move || notice_key.get() == Some("rating.success")
                        >
                            {move || notice_key.get().map(|key| tr(language.get(), key))}
                        </p>
                    </Show>

                    <div class="rating-actions">
                        <button class="btn-ghost" on:click=move |_| close()>
                            {move || tr(language.get(), "common.cancel")}
                        </button>
                        <button class="btn-primary" disabled=move || sending.get() on:click=submit>
                            {move || {
                                if sending.get() {
                                    tr(language.get(), "common.submitting")
                                } else {
                                    tr(language.get(), "rating.submit")
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_rating_triggers_refresh() {
        assert_eq!(submission_notice(&Ok(())), ("rating.success", true));
    }

    #[test]
    fn test_failed_rating_does_not_refresh() {
        let outcome = Err("network error".to_string());
        assert_eq!(submission_notice(&outcome), ("rating.submitError", false));
    }
}
