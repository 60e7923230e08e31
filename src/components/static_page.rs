use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::i18n::{tr, use_language};

#[derive(Clone, PartialEq)]
enum Content {
    Loading,
    Ready(String),
    Failed,
}

/// Shared layout for the informational pages: fetches the localized
/// HTML body for `content_key` and renders it under a titled header.
#[component]
pub fn StaticPage(
    /// Translation key for the page heading.
    title_key: &'static str,
    /// Backend key of the static content block.
    content_key: &'static str,
) -> impl IntoView {
    let language = use_language().language;
    let (content, set_content) = signal(Content::Loading);
    let (attempt, set_attempt) = signal(0u32);

    Effect::new(move |_| {
        let lang = language.get();
        attempt.track();
        set_content.set(Content::Loading);
        spawn_local(async move {
            match api::fetch_static_content(lang, content_key).await {
                Ok(html) => set_content.set(Content::Ready(html)),
                Err(e) => {
                    log::error!("static content {content_key:?} unavailable: {e}");
                    set_content.set(Content::Failed);
                }
            }
        });
    });

    view! {
        <div class="static-page">
            <style>{include_str!("static_page.css")}</style>
            <Navbar />
            <main class="static-main">
                <h1>{move || tr(language.get(), title_key)}</h1>
                {move || match content.get() {
                    Content::Loading => view! {
                        <div class="static-loading">
                            <span class="spinner"></span>
                        </div>
                    }
                    .into_any(),
                    Content::Ready(html) => view! {
                        <div class="static-body" inner_html=html></div>
                    }
                    .into_any(),
                    Content::Failed => view! {
                        <div class="static-error">
                            <p>{move || tr(language.get(), "errors.contentUnavailable")}</p>
                            <button
                                class="btn-primary"
                                on:click=move |_| set_attempt.update(|n| *n += 1)
                            >
                                {move || tr(language.get(), "common.tryAgain")}
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
