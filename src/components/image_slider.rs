use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::i18n::{tr, use_language};
use crate::slideshow;

/// Auto-advancing image carousel with arrow and dot navigation. Shows a
/// placeholder message when the slide set is empty.
///
/// Each change to the slide set starts a new autoplay loop tagged with a
/// generation number; stale loops notice the bump and exit, so there is
/// never more than one ticking loop per slider.
#[component]
pub fn ImageSlider(
    /// Image URLs, already resolved to absolute form.
    images: Signal<Vec<String>>,
    /// Milliseconds between automatic advances.
    #[prop(default = 5000)]
    interval_ms: u32,
) -> impl IntoView {
    let language = use_language().language;
    let (current, set_current) = signal(0usize);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let count = images.with(|list| list.len());
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
                TimeoutFuture::new(interval_ms).await;
                if generation.try_with_value(|g| *g) != Some(my_generation) {
                    break;
                }
                set_current.update(|i| *i = slideshow::next_index(*i, count));
            }
        });
    });

    let step_back = move |_: leptos::ev::MouseEvent| {
        let count = images.with_untracked(|list| list.len());
        set_current.update(|i| *i = slideshow::prev_index(*i, count));
    };
    let step_forward = move |_: leptos::ev::MouseEvent| {
        let count = images.with_untracked(|list| list.len());
        set_current.update(|i| *i = slideshow::next_index(*i, count));
    };

    view! {
        <div class="image-slider" dir="ltr">
            <style>{include_str!("image_slider.css")}</style>
            <Show when=move || images.with(|list| list.is_empty())>
                <div class="slider-empty">
                    {move || tr(language.get(), "common.noImages")}
                </div>
            </Show>
            <Show when=move || !images.with(|list| list.is_empty())>
                <div
                    class="slider-track"
                    style=move || {
                        format!("transform: translateX(-{}%)", current.get() * 100)
                    }
                >
                    <For
                        each=move || images.get()
                        key=|url| url.clone()
                        children=move |url: String| {
                            view! { <img class="slide" src=url loading="lazy" /> }
                        }
                    />
                </div>
                <Show when=move || images.with(|list| list.len() > 1)>
                    <button class="slider-arrow prev" on:click=step_back>
                        "\u{2039}"
                    </button>
                    <button class="slider-arrow next" on:click=step_forward>
                        "\u{203A}"
                    </button>
                    <div class="slider-dots">
                        <For
                            each=move || { (0..images.with(|list| list.len())).collect::<Vec<_>>() }
                            key=|i| *i
                            children=move |i: usize| {
                                view! {
                                    <button
                                        class="slider-dot"
                                        class:active=move || current.get() == i
                                        on:click=move |_| set_current.set(i)
                                    ></button>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
