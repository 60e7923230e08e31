use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, image_url, Ad, Factory};
use crate::components::factory_card::FactoryCard;
use crate::components::filter_section::FilterSection;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::rating_dialog::RatingDialog;
use crate::components::workdays_dialog::WorkdaysDialog;
use crate::filters::cascade::FetchSequencer;
use crate::filters::quick;
use crate::filters::state::FilterState;
use crate::filters::storage;
use crate::i18n::{tr, use_language};
use crate::schedule::WorkWeek;
use crate::slideshow;

/// Regular factories listing.
#[component]
pub fn FactoriesPage() -> impl IntoView {
    view! { <FactoryListing franchise=false /> }
}

/// Franchise listing: same page over the franchise slice of the
/// directory, with its own persisted filter selections.
#[component]
pub fn FranchiseFactoriesPage() -> impl IntoView {
    view! { <FactoryListing franchise=true /> }
}

#[component]
fn FactoryListing(franchise: bool) -> impl IntoView {
    let language_ctx = use_language();
    let language = language_ctx.language;

    let storage_key = if franchise {
        storage::FRANCHISE_FILTERS_KEY
    } else {
        storage::FACTORY_FILTERS_KEY
    };

    let (filters, set_filters) = signal(storage::load(storage_key));
    let (results, set_results) = signal(Vec::<Factory>::new());
    let (top_ads, set_top_ads) = signal(Vec::<Ad>::new());
    let (left_ad, set_left_ad) = signal::<Option<Ad>>(None);
    let (loading, set_loading) = signal(true);
    let (failed, set_failed) = signal(false);

    let search_seq = StoredValue::new(FetchSequencer::default());

    let run_search = move || {
        let lang = language.get_untracked();
        let state = filters.get_untracked();
        let ticket = search_seq.try_update_value(|seq| seq.begin()).unwrap_or(0);
        set_loading.set(true);
        set_failed.set(false);
        spawn_local(async move {
            let outcome = api::search_factories(lang, &state, franchise).await;
            if !search_seq.with_value(|seq| seq.is_current(ticket)) {
                return;
            }
            match outcome {
                Ok(found) => {
                    set_results.set(found.factories);
                    set_top_ads.set(found.top_ads);
                    set_left_ad.set(found.left_ad);
                }
                Err(e) => {
                    log::error!("results fetch failed: {e}");
                    set_results.set(Vec::new());
                    set_top_ads.set(Vec::new());
                    set_left_ad.set(None);
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    };

    // Initial fetch, repeated when the language flips so localized
    // records replace the current page.
    Effect::new(move |_| {
        language.track();
        run_search();
    });

    let quick_chips = Signal::derive(move || results.with(|list| quick::derive(list)));

    let (rating_for, set_rating_for) = signal::<Option<u32>>(None);
    let (workdays, set_workdays) = signal::<Option<WorkWeek>>(None);

    let clear_and_search = move |_: leptos::ev::MouseEvent| {
        set_filters.set(FilterState::default());
        storage::clear(storage_key);
        run_search();
    };

    view! {
        <div class="listing-page">
            <style>{include_str!("listing.css")}</style>
            <Navbar />

            <div class="listing-hero">
                <h1>{move || tr(language.get(), "home.title")}</h1>
            </div>

            <main class="listing-main">
                <FilterSection
                    filters=filters
                    set_filters=set_filters
                    quick=quick_chips
                    storage_key=storage_key
                    on_search=run_search
                />

                <div class="listing-columns">
                    <Show when=move || left_ad.get().is_some()>
                        <aside class="left-ad">
                            {move || left_ad.get().map(|ad| view! { <AdImage ad=ad /> })}
                        </aside>
                    </Show>

                    <div class="listing-results">
                        <Show when=move || {
                            !loading.get() && !failed.get() && !top_ads.with(|a| a.is_empty())
                        }>
                            <TopAdBanner ads=top_ads.into() />
                        </Show>

                        <Show when=move || loading.get()>
                            <div class="listing-loading">
                                <span class="spinner"></span>
                            </div>
                        </Show>

                        <Show when=move || failed.get()>
                            <div class="listing-error">
                                <p>{move || tr(language.get(), "errors.failedToLoad")}</p>
                                <button class="btn-ghost" on:click=move |_| run_search()>
                                    {move || tr(language.get(), "common.tryAgain")}
                                </button>
                            </div>
                        </Show>

                        <Show when=move || {
                            !loading.get() && !failed.get() && results.with(|r| r.is_empty())
                        }>
                            <div class="listing-empty">
                                <p>{move || tr(language.get(), "common.noFactoriesFound")}</p>
                                <Show when=move || filters.with(|f| f.has_selection())>
                                    <button class="btn-ghost" on:click=clear_and_search>
                                        {move || tr(language.get(), "filters.clear")}
                                    </button>
                                </Show>
                            </div>
                        </Show>

                        <Show when=move || {
                            !loading.get() && !failed.get() && !results.with(|r| r.is_empty())
                        }>
                            <For
                                each=move || results.get()
                                key=|factory| factory.id
                                children=move |factory: Factory| {
                                    view! {
                                        <FactoryCard
                                            factory=factory
                                            on_rate=move |id| set_rating_for.set(Some(id))
                                            on_show_workdays=move |f: Factory| {
                                                set_workdays.set(f.work_days)
                                            }
                                        />
                                    }
                                }
                            />
                        </Show>
                    </div>
                </div>
            </main>

            <WorkdaysDialog
                schedule=workdays.into()
                on_close=move || set_workdays.set(None)
            />
            <RatingDialog
                factory_id=rating_for.into()
                on_close=move || set_rating_for.set(None)
                on_submitted=run_search
            />

            <Footer />
        </div>
    }
}

/// Rotating top banner: advances every five seconds. A new slide set
/// starts a fresh loop tagged with a generation number; stale loops
/// exit on the next tick.
#[component]
fn TopAdBanner(ads: Signal<Vec<Ad>>) -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let count = ads.with(|list| list.len());
        set_current.set(0);
        let my_generation = generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or(0);
        if count < 2 {
            return;
        }
        spawn_local(async move {
            loop {
                TimeoutFuture::new(5000).await;
                if generation.try_with_value(|g| *g) != Some(my_generation) {
                    break;
                }
                set_current.update(|i| *i = slideshow::next_index(*i, count));
            }
        });
    });

    view! {
        <div class="top-ads">
            <For
                each=move || { ads.get().into_iter().enumerate().collect::<Vec<_>>() }
                key=|(_, ad)| ad.id
                children=move |(index, ad): (usize, Ad)| {
                    view! {
                        <div class="top-ad-slide" class:shown=move || current.get() == index>
                            <AdImage ad=ad />
                        </div>
                    }
                }
            />
            <Show when=move || ads.with(|list| list.len() > 1)>
                <div class="top-ad-dots">
                    <For
                        each=move || { (0..ads.with(|list| list.len())).collect::<Vec<_>>() }
                        key=|i| *i
                        children=move |i: usize| {
                            view! {
                                <button
                                    class="top-ad-dot"
                                    class:active=move || current.get() == i
                                    on:click=move |_| set_current.set(i)
                                ></button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// An ad image, wrapped in an outbound link when the placement has one.
#[component]
fn AdImage(ad: Ad) -> impl IntoView {
    let src = image_url(&ad.image);
    let alt = ad.title.unwrap_or_else(|| "Advertisement".to_string());
    match ad.url {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                <img class="ad-image" src=src alt=alt loading="lazy" />
            </a>
        }
        .into_any(),
        None => view! { <img class="ad-image" src=src alt=alt loading="lazy" /> }.into_any(),
    }
}

