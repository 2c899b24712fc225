//! Top bar for the signed-in pages: logo, editor tabs, preview and logout.

use leptos::prelude::*;

/// Which editor tab is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTab {
    Links,
    Profile,
    None,
}

#[component]
pub fn AppHeader(
    #[prop(into)] active: Signal<HeaderTab>,
    /// Tab switch; `None` renders the tabs as plain links back to the editor.
    #[prop(optional)]
    on_tab: Option<Callback<HeaderTab>>,
) -> impl IntoView {
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::util::auth::LOGIN_PATH);
            }
        });
    };
    let tab = move |target: HeaderTab, label: &'static str| {
        let class = move || if active.get() == target { "header__tab header__tab--active" } else { "header__tab" };
        match on_tab {
            Some(cb) => view! {
                <button type="button" class=class on:click=move |_| cb.run(target)>{label}</button>
            }
            .into_any(),
            None => view! { <a class=class href="/profile/customize-links">{label}</a> }.into_any(),
        }
    };

    view! {
        <header class="header">
            <a class="header__logo" href="/profile/customize-links">"devlinks"</a>
            <nav class="header__tabs">
                {tab(HeaderTab::Links, "Links")}
                {tab(HeaderTab::Profile, "Profile Details")}
            </nav>
            <div class="header__actions">
                <a class="button button--secondary" href="/profile/preview">"Preview"</a>
                <button type="button" class="button button--ghost" on:click=on_logout>"Logout"</button>
            </div>
        </header>
    }
}
