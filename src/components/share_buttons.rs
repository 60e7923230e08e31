use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::i18n::{tr, use_language};

/// Share toggle with Facebook, WhatsApp and copy-to-clipboard targets.
#[component]
pub fn ShareButtons(
    /// Absolute URL being shared.
    url: Signal<String>,
    /// Short text prepended to the link.
    title: Signal<String>,
) -> impl IntoView {
    let language = use_language().language;
    let (open, set_open) = signal(false);
    let (copied, set_copied) = signal(false);

    let open_window = move |target_url: String| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&target_url, "_blank");
        }
    };

    let share_facebook = move |_: leptos::ev::MouseEvent| {
        open_window(format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            urlencoding::encode(&url.get_untracked()),
            urlencoding::encode(&title.get_untracked()),
        ));
    };

    let share_whatsapp = move |_: leptos::ev::MouseEvent| {
        open_window(format!(
            "https://api.whatsapp.com/send?text={}%20{}",
            urlencoding::encode(&title.get_untracked()),
            urlencoding::encode(&url.get_untracked()),
        ));
    };

    let copy_link = move |_: leptos::ev::MouseEvent| {
        let text = format!("{} {}", title.get_untracked(), url.get_untracked());
        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            if JsFuture::from(promise).await.is_ok() {
                set_copied.set(true);
                TimeoutFuture::new(2000).await;
                set_copied.set(false);
            } else {
                log::warn!("clipboard write rejected");
            }
        });
    };

    view! {
        <div class="share-buttons">
            <style>{include_str!("share_buttons.css")}</style>
            <button class="share-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || tr(language.get(), "common.share")}
            </button>
            <Show when=move || open.get()>
                <div class="share-popover">
                    <button class="share-target facebook" on:click=share_facebook>
                        "Facebook"
                    </button>
                    <button class="share-target whatsapp" on:click=share_whatsapp>
                        "WhatsApp"
                    </button>
                    <button class="share-target copy" on:click=copy_link>
                        {move || {
                            if copied.get() {
                                tr(language.get(), "common.linkCopied")
                            } else {
                                tr(language.get(), "common.copyLink")
                            }
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
