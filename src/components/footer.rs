use leptos::prelude::*;

use crate::i18n::{tr, use_language};

#[component]
pub fn Footer() -> impl IntoView {
    let language = use_language().language;

    view! {
        <footer class="footer">
            <style>{include_str!("footer.css")}</style>
            <div class="footer-inner">
                <div class="footer-links">
                    <a href="/who-we-are" class="footer-link">
                        {move || tr(language.get(), "nav.whoWeAre")}
                    </a>
                    <a href="/terms" class="footer-link">
                        {move || tr(language.get(), "nav.terms")}
                    </a>
                    <a href="/privacy" class="footer-link">
                        {move || tr(language.get(), "nav.privacy")}
                    </a>
                    <a href="/contact-us" class="footer-link">
                        {move || tr(language.get(), "nav.contactUs")}
                    </a>
                </div>
                <p class="footer-rights">
                    {move || {
                        format!(
                            "\u{a9} 2026 {}. {}",
                            tr(language.get(), "home.title"),
                            tr(language.get(), "footer.rights"),
                        )
                    }}
                </p>
            </div>
        </footer>
    }
}
