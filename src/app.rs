use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::i18n::{apply_direction, load_language, LanguageContext};
use crate::pages::contact_us::ContactUsPage;
use crate::pages::factory_detail::FactoryDetailPage;
use crate::pages::home::HomePage;
use crate::pages::listing::{FactoriesPage, FranchiseFactoriesPage};
use crate::pages::static_pages::{
    HelpPage, HowToUsePage, PrivacyPage, TermsPage, WhoWeArePage,
};

#[component]
pub fn App() -> impl IntoView {
    let (language, set_language) = signal(load_language());
    provide_context(LanguageContext {
        language,
        set_language,
    });

    // Keep <html lang> and <body dir> in sync with the active language.
    Effect::new(move |_| {
        apply_direction(language.get());
    });

    view! {
        <Router>
            <style>{include_str!("app.css")}</style>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/factories") view=FactoriesPage />
                <Route path=path!("/franchise-factories") view=FranchiseFactoriesPage />
                <Route path=path!("/factory/:id") view=FactoryDetailPage />
                <Route path=path!("/who-we-are") view=WhoWeArePage />
                <Route path=path!("/how-to-use") view=HowToUsePage />
                <Route path=path!("/help") view=HelpPage />
                <Route path=path!("/terms") view=TermsPage />
                <Route path=path!("/privacy") view=PrivacyPage />
                <Route path=path!("/contact-us") view=ContactUsPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <a href="/">"\u{2190} Home"</a>
        </div>
    }
}
