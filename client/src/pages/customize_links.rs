//! Profile editor: the links list and the profile details form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the signed-in landing route. On hydration it seeds the editor
//! from local storage, then swaps in the server copy when the user has one.
//! Saving writes local storage first and the server second; a server
//! failure keeps the local state and tells the user to retry.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use profile::ProfileEditor;

use crate::components::header::{AppHeader, HeaderTab};
use crate::components::link_item::LinkItem;
use crate::components::phone_preview::PhonePreview;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileStore, SyncStatus};
#[cfg(feature = "hydrate")]
use crate::state::toast::Toast;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStore;

#[cfg(feature = "hydrate")]
const SAVE_FAILED: &str = "Something went wrong. Please try again later.";

#[component]
pub fn CustomizeLinksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<ProfileStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let tab = RwSignal::new(HeaderTab::Links);

    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            if loaded.get_untracked() {
                return;
            }
            loaded.set(true);
            store.load_local(&BrowserStore);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile().await {
                    Ok(remote) if remote != profile::ProfileData::default() => store.apply_remote(remote),
                    Ok(_) => {}
                    Err(e) => log::warn!("profile fetch failed: {e}"),
                }
            });
        });
    }

    let on_save = move |_| {
        if matches!(store.sync.get_untracked(), SyncStatus::Saving) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let (snapshot, written) = store.save_local(&BrowserStore);
            if let Err(e) = written {
                log::warn!("local profile save failed: {e}");
            }
            store.sync.set(SyncStatus::Saving);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_profile(&snapshot).await {
                    Ok(saved) => {
                        store.sync.set(SyncStatus::Saved);
                        store.apply_remote(saved);
                        store.navigate(profile::FlowEvent::Save);
                        show_toast(toasts, Toast::success("Saved", "Your changes have been successfully saved!"));
                        navigate("/profile/share", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("profile save failed: {e}");
                        store.sync.set(SyncStatus::Failed(SAVE_FAILED.to_owned()));
                        show_toast(toasts, Toast::error("Save failed", SAVE_FAILED));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, toasts);
    };

    view! {
        <div class="editor-page">
            <AppHeader active=tab on_tab=Callback::new(move |t| tab.set(t))/>
            <div class="editor">
                <PhonePreview/>
                <section class="editor__panel">
                    {move || match tab.get() {
                        HeaderTab::Profile => view! { <ProfileDetails/> }.into_any(),
                        _ => view! { <LinksEditor/> }.into_any(),
                    }}
                    <footer class="editor__footer">
                        <Show when=move || store.sync.get().message().is_some()>
                            <p class="editor__status">
                                {move || store.sync.get().message().unwrap_or_default().to_owned()}
                            </p>
                        </Show>
                        <Show when=move || !store.editor.with(ProfileEditor::can_share)>
                            <p class="editor__status">"Save your changes to share them."</p>
                        </Show>
                        <a class="button button--secondary" href="/profile/preview">"Preview"</a>
                        <a
                            class="button button--secondary"
                            class:button--disabled=move || !store.editor.with(ProfileEditor::can_share)
                            aria-disabled=move || (!store.editor.with(ProfileEditor::can_share)).to_string()
                            href=move || store.editor.with(ProfileEditor::can_share).then_some("/profile/share")
                            on:click=move |_| {
                                if store.editor.with_untracked(ProfileEditor::can_share) {
                                    store.navigate(profile::FlowEvent::Share);
                                }
                            }
                        >
                            "Share"
                        </a>
                        <button
                            type="button"
                            class="button"
                            disabled=move || matches!(store.sync.get(), SyncStatus::Saving)
                            on:click=on_save
                        >
                            "Save"
                        </button>
                    </footer>
                </section>
            </div>
        </div>
    }
}

#[component]
fn LinksEditor() -> impl IntoView {
    let store = expect_context::<ProfileStore>();
    let preview_query = move || {
        store.editor.with(|e| profile::preview::encode_preview_query(e.profile().image.as_deref(), e.links()))
    };

    view! {
        <h1>"Customize your links"</h1>
        <p class="editor__subtitle">
            "Add/edit/remove links below and then share all your profiles with the world!"
        </p>
        <button type="button" class="button button--outline" on:click=move |_| store.add_link()>
            "+ Add new link"
        </button>
        <Show
            when=move || store.editor.with(|e| !e.links().is_empty())
            fallback=|| view! {
                <div class="editor__empty">
                    <h2>"Let's get you started"</h2>
                    <p>
                        "Use the \"Add new link\" button to get started. Once you have more than one link, "
                        "you can reorder and edit them."
                    </p>
                </div>
            }
        >
            <ul class="link-list">
                <For
                    each=move || store.editor.with(|e| e.links().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, entry)| (*index, entry.id, entry.platform.to_string(), entry.link.clone())
                    children=|(index, entry)| view! { <LinkItem index=index entry=entry/> }
                />
            </ul>
            <a class="editor__preview-link" href=move || format!("/profile/preview?{}", preview_query())>
                "Open unsaved preview"
            </a>
        </Show>
    }
}

#[component]
fn ProfileDetails() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = crate::util::file::first_file(&input) else {
                return;
            };
            store.begin_image_upload();
            leptos::task::spawn_local(async move {
                store.finish_image_upload(crate::util::file::read_image(file).await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <h1>"Profile Details"</h1>
        <p class="editor__subtitle">"Add your details to create a personal touch to your profile."</p>
        <div class="details__image">
            <span>"Profile picture"</span>
            <label class="details__upload" class:details__upload--busy=move || store.editor.with(|e| e.image_loading())>
                {move || {
                    store.editor.with(|e| e.profile().image.clone()).map(|src| {
                        view! { <img class="details__avatar" src=src alt="Profile picture"/> }
                    })
                }}
                <span>{move || if store.editor.with(|e| e.image_loading()) { "Loading..." } else { "+ Upload Image" }}</span>
                <input
                    type="file"
                    accept="image/*"
                    disabled=move || store.editor.with(|e| e.image_loading())
                    on:change=on_file
                />
            </label>
            <p class="details__hint">"Image must be below 2 MB. Use PNG, JPG or any other image format."</p>
            <Show when=move || store.image_error.get().is_some()>
                <p class="form-error" role="alert">{move || store.image_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || store.editor.with(|e| e.profile().image.is_some())>
                <button type="button" class="button button--ghost" on:click=move |_| store.clear_image()>
                    "Remove image"
                </button>
            </Show>
        </div>
        <div class="details__fields">
            <label for="first-name">"First name"</label>
            <input
                id="first-name"
                type="text"
                placeholder="e.g. John"
                prop:value=move || store.editor.with(|e| e.profile().first_name.clone())
                on:input=move |ev| store.set_first_name(&event_target_value(&ev))
            />
            <label for="last-name">"Last name"</label>
            <input
                id="last-name"
                type="text"
                placeholder="e.g. Appleseed"
                prop:value=move || store.editor.with(|e| e.profile().last_name.clone())
                on:input=move |ev| store.set_last_name(&event_target_value(&ev))
            />
            <label for="profile-email">"Email"</label>
            <input
                id="profile-email"
                type="email"
                placeholder="e.g. email@example.com"
                prop:value=move || store.editor.with(|e| e.profile().email.clone())
                on:input=move |ev| store.set_email(&event_target_value(&ev))
            />
        </div>
    }
}
