use leptos::prelude::*;

use crate::i18n::{save_language, tr, use_language};

/// Top navigation: primary links, a "more" dropdown for the static
/// pages, and the language toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_language();
    let language = ctx.language;
    let (more_open, set_more_open) = signal(false);

    let toggle_language = move |_: leptos::ev::MouseEvent| {
        let next = language.get_untracked().toggled();
        ctx.set_language.set(next);
        save_language(next);
    };

    let more_links = [
        ("/who-we-are", "nav.whoWeAre"),
        ("/how-to-use", "nav.howToUse"),
        ("/help", "nav.help"),
        ("/terms", "nav.terms"),
        ("/privacy", "nav.privacy"),
        ("/contact-us", "nav.contactUs"),
    ];

    view! {
        <header class="navbar">
            <style>{include_str!("navbar.css")}</style>
            <nav class="navbar-inner">
                <a href="/" class="navbar-brand">
                    {move || tr(language.get(), "home.title")}
                </a>

                <div class="navbar-links">
                    <a href="/" class="navbar-link">
                        {move || tr(language.get(), "nav.home")}
                    </a>
                    <a href="/factories" class="navbar-link">
                        {move || tr(language.get(), "nav.factories")}
                    </a>
                    <a href="/franchise-factories" class="navbar-link">
                        {move || tr(language.get(), "nav.franchiseFactories")}
                    </a>

                    <div class="navbar-more">
                        <button
                            class="navbar-link more-toggle"
                            on:click=move |_| set_more_open.update(|o| *o = !*o)
                        >
                            {move || tr(language.get(), "nav.more")}
                            " \u{25BE}"
                        </button>
                        <Show when=move || more_open.get()>
                            <div class="more-menu" on:click=move |_| set_more_open.set(false)>
                                {more_links
                                    .into_iter()
                                    .map(|(href, key)| {
                                        view! {
                                            <a href=href class="more-item">
                                                {move || tr(language.get(), key)}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Show>
                    </div>
                </div>

                <button class="language-toggle" on:click=toggle_language>
                    {move || {
                        if language.get().is_rtl() {
                            "English"
                        } else {
                            "العربية"
                        }
                    }}
                </button>
            </nav>
        </header>
    }
}
