use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::i18n::{tr, use_language};

/// Contact page. Submission is acknowledged locally; there is no
/// backend inbox endpoint for this form.
#[component]
pub fn ContactUsPage() -> impl IntoView {
    let language = use_language().language;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_sending.set(true);
        set_sent.set(false);
        spawn_local(async move {
            TimeoutFuture::new(800).await;
            set_sending.set(false);
            set_sent.set(true);
            set_name.set(String::new());
            set_email.set(String::new());
            set_phone.set(String::new());
            set_message.set(String::new());
        });
    };

    view! {
        <div class="contact-page">
            <style>{include_str!("contact_us.css")}</style>
            <Navbar />

            <main class="contact-main">
                <h1>{move || tr(language.get(), "nav.contactUs")}</h1>

                <form class="contact-form" on:submit=on_submit>
                    <div class="form-field">
                        <label>{move || format!("{} *", tr(language.get(), "form.name"))}</label>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>{move || format!("{} *", tr(language.get(), "form.email"))}</label>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>{move || tr(language.get(), "form.phone")}</label>
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>{move || format!("{} *", tr(language.get(), "form.message"))}</label>
                        <textarea
                            required
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <Show when=move || sent.get()>
                        <p class="form-success">
                            {move || tr(language.get(), "contact.successMessage")}
                        </p>
                    </Show>

                    <button type="submit" class="btn-primary" disabled=move || sending.get()>
                        {move || {
                            if sending.get() {
                                tr(language.get(), "contact.submitting")
                            } else {
                                tr(language.get(), "contact.submit")
                            }
                        }}
                    </button>
                </form>
            </main>

            <Footer />
        </div>
    }
}
