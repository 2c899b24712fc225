//! Share page: the saved profile card, this browser's public profile URL,
//! a copy button and the QR link.

use leptos::prelude::*;

use crate::components::header::{AppHeader, HeaderTab};
use crate::components::profile_card::{CardModel, ProfileCard};
use crate::components::toast::show_toast;
use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn SharePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let url = RwSignal::new(String::new());
    let card = RwSignal::new(CardModel::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::storage::BrowserStore;

        let saved = profile::store::load_profile(&BrowserStore);
        card.set(CardModel::from_saved(&saved));

        let id = match profile::share::ensure_profile_id(&BrowserStore) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("share id not persisted: {e}");
                return;
            }
        };
        url.set(profile::share::share_url(&crate::util::browser::origin(), &id));
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::bind_share_id(&id).await {
                show_toast(toasts, Toast::error("Share link unavailable", &e));
            }
        });
    });

    let on_copy = move |_| {
        let text = url.get_untracked();
        if text.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::util::browser::copy_text(&text).await {
                Ok(()) => show_toast(toasts, Toast::success("Link copied!", "Your profile link is on the clipboard.")),
                Err(e) => show_toast(toasts, Toast::error("Copy failed", &e)),
            }
        });
    };

    view! {
        <div class="share-page">
            <AppHeader active=HeaderTab::None/>
            <ProfileCard model=card/>
            <section class="share-card">
                <h1>"Share your profile"</h1>
                <p>"Anyone with this link can see your links."</p>
                <input class="share-card__url" type="text" readonly prop:value=move || url.get()/>
                <div class="share-card__actions">
                    <button type="button" class="button" disabled=move || url.get().is_empty() on:click=on_copy>
                        "Copy Link"
                    </button>
                    <a class="button button--secondary" href="/profile/qrcode">"QR Code"</a>
                    <a class="button button--secondary" href="/profile/preview">"Preview"</a>
                </div>
            </section>
        </div>
    }
}
