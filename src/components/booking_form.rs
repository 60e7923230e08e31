use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::api::{self, BookingRequest};
use crate::i18n::{tr, use_language};

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Visit-booking form shown inside a factory card's booking tab.
///
/// Name, phone, email and message are required; an attachment is
/// optional. The terms checkbox gates submission client-side.
#[component]
pub fn BookingForm(factory_id: u32) -> impl IntoView {
    let language = use_language().language;

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (agreed, set_agreed) = signal(false);
    let (state, set_state) = signal(SubmitState::Idle);
    let (error_key, set_error_key) = signal::<Option<&'static str>>(None);

    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !agreed.get_untracked() {
            set_error_key.set(Some("booking.agreementRequired"));
            return;
        }
        let required_filled = !name.get_untracked().trim().is_empty()
            && !phone.get_untracked().trim().is_empty()
            && !email.get_untracked().trim().is_empty()
            && !message.get_untracked().trim().is_empty();
        if !required_filled {
            set_error_key.set(Some("booking.fillAllFields"));
            return;
        }

        let file = file_input
            .get_untracked()
            .and_then(|input: HtmlInputElement| input.files())
            .and_then(|files| files.get(0));

        let request = BookingRequest {
            factory_id,
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            file,
        };

        set_state.set(SubmitState::Sending);
        set_error_key.set(None);
        spawn_local(async move {
            match api::submit_booking(&request).await {
                Ok(()) => {
                    set_state.set(SubmitState::Sent);
                    set_name.set(String::new());
                    set_phone.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_agreed.set(false);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    log::error!("booking submission failed: {e}");
                    set_state.set(SubmitState::Failed);
                    set_error_key.set(Some("booking.submitError"));
                }
            }
        });
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <style>{include_str!("booking_form.css")}</style>

            <div class="form-field">
                <label>{move || format!("{} *", tr(language.get(), "form.name"))}</label>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>{move || format!("{} *", tr(language.get(), "form.phone"))}</label>
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>{move || format!("{} *", tr(language.get(), "form.email"))}</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>{move || tr(language.get(), "booking.file")}</label>
                <input type="file" accept=".pdf,.doc,.docx,.txt" node_ref=file_input />
                <span class="field-hint">{move || tr(language.get(), "booking.fileTypes")}</span>
            </div>
            <div class="form-field">
                <label>{move || format!("{} *", tr(language.get(), "form.message"))}</label>
                <textarea
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <label class="agreement-row">
                <input
                    type="checkbox"
                    prop:checked=move || agreed.get()
                    on:change=move |ev| {
                        set_agreed.set(event_target_checked(&ev));
                    }
                />
                <span>{move || tr(language.get(), "booking.agreement")}</span>
            </label>

            <Show when=move || error_key.get().is_some()>
                <p class="form-error">
                    {move || error_key.get().map(|key| tr(language.get(), key))}
                </p>
            </Show>
            <Show when=move || state.get() == SubmitState::Sent>
                <p class="form-success">{move || tr(language.get(), "booking.success")}</p>
            </Show>

            <button
                type="submit"
                class="btn-primary form-submit"
                disabled=move || state.get() == SubmitState::Sending
            >
                {move || {
                    if state.get() == SubmitState::Sending {
                        tr(language.get(), "common.submitting")
                    } else {
                        tr(language.get(), "form.submit")
                    }
                }}
            </button>
        </form>
    }
}
