//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    customize_links::CustomizeLinksPage, forgot_password::ForgotPasswordPage, login::LoginPage, preview::PreviewPage,
    public_profile::PublicProfilePage, qrcode::QrCodePage, share::SharePage, signup::SignupPage,
};
use crate::state::{auth::AuthState, profile::ProfileStore, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, profile and toast contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);
    provide_context(ProfileStore::new());

    // Resolve the signed-in user once per page load.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState { user, loading: false });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/devlinks.css"/>
        <Title text="devlinks"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=CustomizeLinksPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("forgot-password")) view=ForgotPasswordPage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("customize-links")) view=CustomizeLinksPage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("preview")) view=PreviewPage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("share")) view=SharePage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("qrcode")) view=QrCodePage/>
                    <Route path=(StaticSegment("p"), ParamSegment("id")) view=PublicProfilePage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
