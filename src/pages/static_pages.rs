//! Informational pages served from the backend's static-content store.

use leptos::prelude::*;

use crate::components::static_page::StaticPage;

#[component]
pub fn WhoWeArePage() -> impl IntoView {
    view! { <StaticPage title_key="nav.whoWeAre" content_key="who_we_are" /> }
}

#[component]
pub fn HowToUsePage() -> impl IntoView {
    view! { <StaticPage title_key="nav.howToUse" content_key="how_to_use" /> }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! { <StaticPage title_key="nav.help" content_key="help" /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <StaticPage title_key="nav.terms" content_key="policy" /> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <StaticPage title_key="nav.privacy" content_key="privacy" /> }
}
