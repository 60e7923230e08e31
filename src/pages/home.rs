use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_section::FilterSection;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::filters::quick::QuickFilters;
use crate::filters::state::FilterState;
use crate::filters::storage;
use crate::i18n::{tr, use_language};

/// Landing page: hero banner plus the filter bar. Applying filters
/// persists them under the factories key and moves to the listing,
/// which hydrates from the same key.
#[component]
pub fn HomePage() -> impl IntoView {
    let language = use_language().language;
    let (filters, set_filters) = signal(FilterState::default());

    let navigate = StoredValue::new_local(use_navigate());
    let go_to_results = move || {
        navigate.with_value(|nav| nav("/factories", Default::default()));
    };

    view! {
        <div class="home-page">
            <style>{include_str!("home.css")}</style>
            <Navbar />

            <div class="home-hero">
                <div class="home-hero-text">
                    <h1>{move || tr(language.get(), "home.title")}</h1>
                    <p>{move || tr(language.get(), "home.subtitle")}</p>
                    <p>{move || tr(language.get(), "home.subtitle2")}</p>
                </div>
            </div>

            <main class="home-main">
                <FilterSection
                    filters=filters
                    set_filters=set_filters
                    quick=Signal::derive(QuickFilters::default)
                    storage_key=storage::FACTORY_FILTERS_KEY
                    on_search=go_to_results
                />
            </main>

            <Footer />
        </div>
    }
}
