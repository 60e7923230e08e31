use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Factory};
use crate::components::factory_card::FactoryCard;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::rating_dialog::RatingDialog;
use crate::components::workdays_dialog::WorkdaysDialog;
use crate::filters::state::FilterState;
use crate::i18n::{tr, use_language};
use crate::schedule::WorkWeek;

#[derive(Clone, PartialEq)]
enum Lookup {
    Loading,
    Found(Box<Factory>),
    Missing,
}

/// Single-factory page for shared links: resolves the `:id` route
/// parameter against the directory and renders the full card.
#[component]
pub fn FactoryDetailPage() -> impl IntoView {
    let language = use_language().language;
    let params = use_params_map();

    let factory_id = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| raw.parse::<u32>().ok())
    });

    let (lookup, set_lookup) = signal(Lookup::Loading);
    let (rating_for, set_rating_for) = signal::<Option<u32>>(None);
    let (workdays, set_workdays) = signal::<Option<WorkWeek>>(None);

    // Bumped after a rating is accepted so the card shows the new average.
    let (refresh, set_refresh) = signal(0u32);

    Effect::new(move |_| {
        refresh.track();
        let lang = language.get();
        let Some(wanted) = factory_id.get() else {
            set_lookup.set(Lookup::Missing);
            return;
        };
        set_lookup.set(Lookup::Loading);
        spawn_local(async move {
            match api::search_factories(lang, &FilterState::default(), false).await {
                Ok(results) => {
                    match results.factories.into_iter().find(|f| f.id == wanted) {
                        Some(factory) => set_lookup.set(Lookup::Found(Box::new(factory))),
                        None => set_lookup.set(Lookup::Missing),
                    }
                }
                Err(e) => {
                    log::error!("factory lookup failed: {e}");
                    set_lookup.set(Lookup::Missing);
                }
            }
        });
    });

    view! {
        <div class="detail-page">
            <style>{include_str!("factory_detail.css")}</style>
            <Navbar />

            <main class="detail-main">
                {move || match lookup.get() {
                    Lookup::Loading => view! {
                        <div class="detail-loading">
                            <span class="spinner"></span>
                        </div>
                    }
                    .into_any(),
                    Lookup::Found(factory) => view! {
                        <FactoryCard
                            factory=*factory
                            on_rate=move |id| set_rating_for.set(Some(id))
                            on_show_workdays=move |f: Factory| set_workdays.set(f.work_days)
                        />
                    }
                    .into_any(),
                    Lookup::Missing => view! {
                        <div class="detail-missing">
                            <p>{move || tr(language.get(), "common.noFactoriesFound")}</p>
                        </div>
                    }
                    .into_any(),
                }}
            </main>

            <WorkdaysDialog
                schedule=workdays.into()
                on_close=move || set_workdays.set(None)
            />
            <RatingDialog
                factory_id=rating_for.into()
                on_close=move || set_rating_for.set(None)
                on_submitted=move || set_refresh.update(|n| *n += 1)
            />

            <Footer />
        </div>
    }
}
