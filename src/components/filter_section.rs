use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::filters::cascade::{reconcile_selection, FetchSequencer};
use crate::filters::quick::{QuickFilter, QuickFilters};
use crate::filters::state::{FilterItem, FilterState};
use crate::filters::storage;
use crate::i18n::{tr, use_language};

/// The filter bar: four dependent selects, free-text search, quick-filter
/// chips, and apply/clear buttons.
///
/// The cascade lives here. Country and category changes each issue a
/// ticketed fetch for their dependent option list; only the response
/// holding the newest ticket is applied, and a previously selected child
/// value whose id is absent from the fresh list is cleared.
#[component]
pub fn FilterSection(
    /// Current selections, shared with the owning page.
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
    /// Chips derived from the page's current result set.
    quick: Signal<QuickFilters>,
    /// localStorage key the selections persist under.
    storage_key: &'static str,
    /// Invoked after apply/clear/chip-click, once the state is persisted.
    on_search: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language_ctx = use_language();
    let language = language_ctx.language;

    let (countries, set_countries) = signal(Vec::<FilterItem>::new());
    let (cities, set_cities) = signal(Vec::<FilterItem>::new());
    let (categories, set_categories) = signal(Vec::<FilterItem>::new());
    let (specialties, set_specialties) = signal(Vec::<FilterItem>::new());

    let city_seq = StoredValue::new(FetchSequencer::default());
    let specialty_seq = StoredValue::new(FetchSequencer::default());

    // Top-level lists reload whenever the language flips so names arrive
    // localized.
    Effect::new(move |_| {
        let lang = language.get();
        spawn_local(async move {
            match api::fetch_countries(lang).await {
                Ok(list) => set_countries.set(list),
                Err(e) => log::warn!("country list unavailable: {e}"),
            }
        });
        spawn_local(async move {
            match api::fetch_categories(lang).await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::warn!("category list unavailable: {e}"),
            }
        });
    });

    // Track only the parent id so edits to unrelated slots don't refetch.
    let country_id = Memo::new(move |_| filters.with(|f| f.country.as_ref().map(|c| c.id)));
    let category_id = Memo::new(move |_| filters.with(|f| f.category.as_ref().map(|c| c.id)));

    Effect::new(move |_| {
        let lang = language.get();
        // A fresh ticket also retires any in-flight fetch when the
        // country is cleared.
        let ticket = city_seq.try_update_value(|seq| seq.begin()).unwrap_or(0);
        let Some(id) = country_id.get() else {
            set_cities.set(Vec::new());
            set_filters.update(|f| f.city = None);
            return;
        };
        spawn_local(async move {
            let list = match api::fetch_cities(lang, id).await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("city list unavailable: {e}");
                    Vec::new()
                }
            };
            if !city_seq.with_value(|seq| seq.is_current(ticket)) {
                return;
            }
            set_filters.update(|f| f.city = reconcile_selection(f.city.take(), &list));
            set_cities.set(list);
        });
    });

    Effect::new(move |_| {
        let lang = language.get();
        let ticket = specialty_seq
            .try_update_value(|seq| seq.begin())
            .unwrap_or(0);
        let Some(id) = category_id.get() else {
            set_specialties.set(Vec::new());
            set_filters.update(|f| f.specialty = None);
            return;
        };
        spawn_local(async move {
            let list = match api::fetch_specialties(lang, id).await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("specialty list unavailable: {e}");
                    Vec::new()
                }
            };
            if !specialty_seq.with_value(|seq| seq.is_current(ticket)) {
                return;
            }
            set_filters.update(|f| f.specialty = reconcile_selection(f.specialty.take(), &list));
            set_specialties.set(list);
        });
    });

    let apply = move || {
        storage::save(storage_key, &filters.get_untracked());
        on_search();
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        set_filters.set(FilterState::default());
        storage::clear(storage_key);
        on_search();
    };

    let on_search_input = move |ev: leptos::ev::Event| {
        set_filters.update(|f| f.search = event_target_value(&ev));
    };

    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            apply();
        }
    };

    // Chip clicks re-enter the cascade: the chip's name is resolved
    // against the loaded option list, so selecting a category chip
    // populates its specialty list exactly like the dropdown would.
    // Clicking the active chip deselects it.
    let pick_country = move |name: String| {
        let already = filters.with_untracked(|f| {
            f.country.as_ref().is_some_and(|c| c.name == name)
        });
        let next = if already {
            None
        } else {
            countries.get_untracked().into_iter().find(|o| o.name == name)
        };
        set_filters.update(|f| f.country = next);
        apply();
    };
    let pick_category = move |name: String| {
        let already = filters.with_untracked(|f| {
            f.category.as_ref().is_some_and(|c| c.name == name)
        });
        let next = if already {
            None
        } else {
            categories.get_untracked().into_iter().find(|o| o.name == name)
        };
        set_filters.update(|f| f.category = next);
        apply();
    };

    view! {
        <section class="filter-section">
            <style>{include_str!("filter_section.css")}</style>

            <div class="filter-grid">
                <FilterSelect
                    label_key="filters.country"
                    options=countries.into()
                    selected=Signal::derive(move || filters.with(|f| f.country.clone()))
                    on_pick=move |item| set_filters.update(|f| f.country = item)
                />
                <FilterSelect
                    label_key="filters.city"
                    options=cities.into()
                    selected=Signal::derive(move || filters.with(|f| f.city.clone()))
                    on_pick=move |item| set_filters.update(|f| f.city = item)
                />
                <FilterSelect
                    label_key="filters.category"
                    options=categories.into()
                    selected=Signal::derive(move || filters.with(|f| f.category.clone()))
                    on_pick=move |item| set_filters.update(|f| f.category = item)
                />
                <FilterSelect
                    label_key="filters.specialty"
                    options=specialties.into()
                    selected=Signal::derive(move || filters.with(|f| f.specialty.clone()))
                    on_pick=move |item| set_filters.update(|f| f.specialty = item)
                />

                <div class="filter-field filter-search">
                    <label>{move || tr(language.get(), "filters.searchLabel")}</label>
                    <input
                        type="text"
                        prop:value=move || filters.with(|f| f.search.clone())
                        placeholder=move || tr(language.get(), "filters.search")
                        on:input=on_search_input
                        on:keydown=on_search_key
                    />
                </div>
            </div>

            <div class="filter-actions">
                <button class="btn-primary" on:click=move |_| apply()>
                    {move || tr(language.get(), "filters.apply")}
                </button>
                <button class="btn-ghost" on:click=clear>
                    {move || tr(language.get(), "filters.clear")}
                </button>
            </div>

            <QuickChips
                title_key="filters.popularCategories"
                chips=Signal::derive(move || quick.get().categories)
                active=Signal::derive(move || {
                    filters.with(|f| f.category.as_ref().map(|c| c.name.clone()))
                })
                on_pick=pick_category
            />
            <QuickChips
                title_key="filters.popularCountries"
                chips=Signal::derive(move || quick.get().countries)
                active=Signal::derive(move || {
                    filters.with(|f| f.country.as_ref().map(|c| c.name.clone()))
                })
                on_pick=pick_country
            />
        </section>
    }
}

/// One labelled dropdown. Option ids are carried through the DOM as the
/// `<option>` value; "0" is the empty sentinel.
#[component]
fn FilterSelect(
    label_key: &'static str,
    options: Signal<Vec<FilterItem>>,
    selected: Signal<Option<FilterItem>>,
    on_pick: impl Fn(Option<FilterItem>) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language = use_language().language;

    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let picked = raw
            .parse::<u32>()
            .ok()
            .filter(|id| *id != 0)
            .and_then(|id| options.get_untracked().into_iter().find(|o| o.id == id));
        on_pick(picked);
    };

    view! {
        <div class="filter-field">
            <label>{move || tr(language.get(), label_key)}</label>
            <select
                prop:value=move || {
                    selected
                        .get()
                        .map(|item| item.id.to_string())
                        .unwrap_or_else(|| "0".to_string())
                }
                on:change=on_change
            >
                <option value="0">{move || tr(language.get(), "filters.all")}</option>
                <For
                    each=move || options.get()
                    key=|item| item.id
                    children=move |item: FilterItem| {
                        view! {
                            <option value=item.id.to_string()>{item.name}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
fn QuickChips(
    title_key: &'static str,
    chips: Signal<Vec<QuickFilter>>,
    active: Signal<Option<String>>,
    on_pick: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language = use_language().language;

    view! {
        <Show when=move || !chips.get().is_empty()>
            <div class="quick-chips">
                <span class="quick-chips-title">
                    {move || tr(language.get(), title_key)}
                </span>
                <For
                    each=move || chips.get()
                    key=|chip| (chip.id, chip.name.clone())
                    children=move |chip: QuickFilter| {
                        let name = chip.name.clone();
                        let is_active = {
                            let name = name.clone();
                            move || active.get().as_deref() == Some(name.as_str())
                        };
                        let label = format!("{} ({})", chip.name, chip.count);
                        view! {
                            <button
                                class="quick-chip"
                                class:active=is_active
                                on:click=move |_| on_pick(name.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
