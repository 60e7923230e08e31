use leptos::prelude::*;

use crate::api::{image_url, Factory};
use crate::components::booking_form::BookingForm;
use crate::components::image_slider::ImageSlider;
use crate::components::share_buttons::ShareButtons;
use crate::i18n::{tr, use_language};
use crate::schedule;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Gallery,
    Products,
    About,
    Services,
    Booking,
}

const TABS: [(Tab, &str); 5] = [
    (Tab::Gallery, "factory.gallery"),
    (Tab::Products, "factory.products"),
    (Tab::About, "factory.about"),
    (Tab::Services, "factory.services"),
    (Tab::Booking, "nav.contactUs"),
];

/// One result row: contact panel on one side, tabbed detail panel
/// (gallery, products, about, services, booking form) on the other.
#[component]
pub fn FactoryCard(
    factory: Factory,
    /// Opens the rating dialog for this factory.
    on_rate: impl Fn(u32) + 'static + Copy + Send + Sync,
    /// Opens the working-hours dialog with this factory's schedule.
    on_show_workdays: impl Fn(Factory) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let language = use_language().language;
    let (tab, set_tab) = signal(Tab::Gallery);

    let factory = StoredValue::new(factory);
    let id = factory.with_value(|f| f.id);
    let name = factory.with_value(|f| f.name.clone());
    let rating = factory.with_value(|f| f.rating);
    let logo = factory.with_value(|f| image_url(&f.logo));
    let place = factory.with_value(|f| format!("{}, {}", f.city, f.country));
    let location_link = factory.with_value(|f| f.location_link.clone());
    let email = factory.with_value(|f| f.email.clone());
    let phone = factory.with_value(|f| f.phone.clone());
    let website = factory.with_value(|f| f.website.clone().unwrap_or_default());
    let description = factory.with_value(|f| f.description.clone());
    let services = factory.with_value(|f| f.services.clone());
    let share_title = format!("{name} - Visit our factory at");

    let open_now = move || factory.with_value(|f| {
        f.work_days
            .as_ref()
            .is_some_and(schedule::is_open_now)
    });

    let gallery = Signal::derive(move || {
        factory.with_value(|f| f.gallery.iter().map(|img| image_url(&img.url)).collect::<Vec<_>>())
    });
    let products = Signal::derive(move || {
        factory.with_value(|f| f.products.iter().map(|img| image_url(&img.url)).collect::<Vec<_>>())
    });

    let star_row = {
        let rating = rating;
        (0..5)
            .map(|index| {
                let class = if (index as f32) < rating.floor() {
                    "star full"
                } else if (index as f32) < rating {
                    "star half"
                } else {
                    "star empty"
                };
                view! { <span class=class>"\u{2605}"</span> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <article class="factory-card">
            <style>{include_str!("factory_card.css")}</style>

            <div class="card-info">
                <img class="card-logo" src=logo alt=name.clone() loading="lazy" />
                <h3 class="card-name">{name.clone()}</h3>

                <button class="card-rating" on:click=move |_| on_rate(id)>
                    <span class="stars">{star_row}</span>
                    <span class="rating-value">{format!("({rating:.1})")}</span>
                </button>

                <div class="card-contacts">
                    <a class="contact-row" href=location_link target="_blank" rel="noopener noreferrer">
                        {place}
                    </a>
                    {email.map(|address| {
                        view! {
                            <a class="contact-row" href=format!("mailto:{address}")>{address.clone()}</a>
                        }
                    })}
                    {phone.map(|number| {
                        view! {
                            <a class="contact-row" href=format!("tel:{number}")>{number.clone()}</a>
                        }
                    })}
                    <button
                        class="contact-row open-state"
                        class:open=open_now
                        on:click=move |_| factory.with_value(|f| on_show_workdays(f.clone()))
                    >
                        {move || {
                            if open_now() {
                                tr(language.get(), "factory.openNow")
                            } else {
                                tr(language.get(), "factory.closed")
                            }
                        }}
                    </button>
                </div>

                <div class="card-share">
                    <ShareButtons
                        url=Signal::derive(move || website.clone())
                        title=Signal::derive(move || share_title.clone())
                    />
                </div>
            </div>

            <div class="card-tabs">
                <div class="tab-list">
                    {TABS
                        .into_iter()
                        .map(|(value, key)| {
                            view! {
                                <button
                                    class="tab-trigger"
                                    class:active=move || tab.get() == value
                                    on:click=move |_| set_tab.set(value)
                                >
                                    {move || tr(language.get(), key)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="tab-panel">
                    {move || match tab.get() {
                        Tab::Gallery => view! { <ImageSlider images=gallery /> }.into_any(),
                        Tab::Products => view! { <ImageSlider images=products /> }.into_any(),
                        Tab::About => view! {
                            <div class="tab-prose">
                                <h4>{move || tr(language.get(), "factory.about")}</h4>
                                <div inner_html=description.clone()></div>
                            </div>
                        }
                        .into_any(),
                        Tab::Services => view! {
                            <div class="tab-prose">
                                <h4>{move || tr(language.get(), "factory.services")}</h4>
                                <div inner_html=services.clone()></div>
                            </div>
                        }
                        .into_any(),
                        Tab::Booking => view! {
                            <div class="tab-prose">
                                <BookingForm factory_id=id />
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </article>
    }
}
