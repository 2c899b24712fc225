//! Public, read-only profile behind a share id (`/p/{id}`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::profile_card::{CardModel, ProfileCard};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum PublicView {
    Loading,
    Found(CardModel),
    NotFound,
    Failed(String),
}

#[component]
pub fn PublicProfilePage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(PublicView::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_public_profile(&id).await {
                Ok(Some(profile)) => PublicView::Found(CardModel::from_profile(&profile, &profile.links)),
                Ok(None) => PublicView::NotFound,
                Err(e) => PublicView::Failed(e),
            };
            state.set(next);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    view! {
        <div class="public-page">
            {move || match state.get() {
                PublicView::Loading => view! { <p class="public-page__status">"Loading..."</p> }.into_any(),
                PublicView::Found(model) => view! { <ProfileCard model=Signal::stored(model)/> }.into_any(),
                PublicView::NotFound => view! { <p class="public-page__status">"Profile not found."</p> }.into_any(),
                PublicView::Failed(message) => view! { <p class="form-error">{message}</p> }.into_any(),
            }}
            <a class="public-page__cta" href="/auth/signup">"Create your own devlinks"</a>
        </div>
    }
}
