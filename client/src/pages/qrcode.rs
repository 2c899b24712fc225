//! QR code of the user's links, with PNG download and copy-as-image.

use leptos::prelude::*;

use crate::components::header::{AppHeader, HeaderTab};
use crate::components::toast::show_toast;
use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser::{QR_DOWNLOAD_NAME, QR_PNG_PATH, copy_png, download};

const QR_SVG_PATH: &str = "/api/qrcode.svg";

/// What the page shows while and after loading the link list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum QrView {
    Loading,
    Empty,
    Ready(String),
    Failed(String),
}

#[component]
pub fn QrCodePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let state = RwSignal::new(QrView::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_links().await {
                Ok(links) if links.is_empty() => QrView::Empty,
                Ok(links) => QrView::Ready(profile::share::qr_payload(&links)),
                Err(e) => QrView::Failed(e),
            };
            state.set(next);
        });
    });

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            match copy_png(QR_PNG_PATH).await {
                Ok(()) => show_toast(toasts, Toast::success("QR code copied!", "Paste it anywhere as an image.")),
                Err(e) => show_toast(toasts, Toast::error("Copy failed", &e)),
            }
        });
    };

    view! {
        <div class="qrcode-page">
            <AppHeader active=HeaderTab::None/>
            <section class="qrcode-card">
                <h1>"Your QR code"</h1>
                {move || match state.get() {
                    QrView::Loading => view! { <p class="qrcode-card__status">"Loading links..."</p> }.into_any(),
                    QrView::Empty => view! {
                        <p class="qrcode-card__status">
                            "Add some links first. " <a href="/profile/customize-links">"Go to the editor"</a>
                        </p>
                    }
                    .into_any(),
                    QrView::Failed(message) => view! { <p class="form-error" role="alert">{message}</p> }.into_any(),
                    QrView::Ready(payload) => view! {
                        <img class="qrcode-card__image" src=QR_SVG_PATH alt="QR code of your links"/>
                        <pre class="qrcode-card__payload">{payload}</pre>
                        <div class="qrcode-card__actions">
                            <button type="button" class="button" on:click=move |_| download(QR_PNG_PATH, QR_DOWNLOAD_NAME)>
                                "Download PNG"
                            </button>
                            <button type="button" class="button button--secondary" on:click=on_copy>
                                "Copy image"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
