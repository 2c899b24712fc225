//! Read-only preview of the saved profile.
//!
//! Two inputs are supported. With a `links` query parameter the page
//! renders exactly what the query carries (an ad-hoc, unsaved preview).
//! Without one it renders the profile last written to local storage.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use profile::preview::{IMAGE_PARAM, LINKS_PARAM, from_params};

use crate::components::profile_card::{CardModel, ProfileCard};
use crate::state::profile::ProfileStore;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let store = expect_context::<ProfileStore>();
    let query = use_query_map();
    let stored = RwSignal::new(CardModel::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let profile = profile::store::load_profile(&crate::util::storage::BrowserStore);
        stored.set(CardModel::from_saved(&profile));
    });

    let model = Signal::derive(move || {
        let params = query.get();
        match params.get(LINKS_PARAM) {
            Some(links) => {
                let preview = from_params(params.get(IMAGE_PARAM), Some(links));
                CardModel::from_links(preview.image, &preview.links)
            }
            None => stored.get(),
        }
    });

    view! {
        <div class="preview-page">
            <header class="preview-page__bar">
                <a
                    class="button button--secondary"
                    href="/profile/customize-links"
                    on:click=move |_| store.navigate(profile::FlowEvent::Edit)
                >
                    "Back to Editor"
                </a>
                <a class="button" href="/profile/share" on:click=move |_| store.navigate(profile::FlowEvent::Share)>
                    "Share Link"
                </a>
            </header>
            <ProfileCard model=model/>
        </div>
    }
}
