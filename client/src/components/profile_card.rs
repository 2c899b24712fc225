//! Read-only profile card: avatar, name, email and one coloured row per link.
//!
//! DESIGN
//! ======
//! The card is a pure function of a [`CardModel`]; the preview page, the
//! public page and the editor's phone mock-up all build the model the same
//! way so every renderer agrees on styles and hrefs.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;
use profile::preview::{PreviewItem, preview_items};
use profile::{LinkLike, ProfileData};

/// Everything the card renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardModel {
    pub image: Option<String>,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub items: Vec<PreviewItem>,
}

impl CardModel {
    /// Card for a stored profile showing `links` (the saved snapshot or the live list).
    #[must_use]
    pub fn from_profile<L: LinkLike>(profile: &ProfileData, links: &[L]) -> Self {
        Self {
            image: profile.image.clone().filter(|i| !i.is_empty()),
            name: profile.display_name(),
            initials: profile.initials(),
            email: profile.email.trim().to_owned(),
            items: preview_items(links),
        }
    }

    /// Card for what was last saved: the preview and share pages show this.
    #[must_use]
    pub fn from_saved(profile: &ProfileData) -> Self {
        Self::from_profile(profile, &profile.saved_links)
    }

    /// Card for a query-string preview, which carries only an image and links.
    #[must_use]
    pub fn from_links<L: LinkLike>(image: Option<String>, links: &[L]) -> Self {
        Self { image: image.filter(|i| !i.is_empty()), items: preview_items(links), ..Self::default() }
    }
}

/// Inline style for one link row.
#[must_use]
pub fn item_style(item: &PreviewItem) -> String {
    format!("background-color: {}; color: {};", item.style.background, item.style.foreground)
}

#[component]
pub fn ProfileCard(#[prop(into)] model: Signal<CardModel>) -> impl IntoView {
    view! {
        <section class="profile-card">
            {move || {
                let CardModel { image, name, initials, email, items } = model.get();
                let avatar = match image {
                    Some(src) => view! { <img class="profile-card__avatar" src=src alt="Profile picture"/> }.into_any(),
                    None => view! { <span class="profile-card__avatar profile-card__avatar--empty">{initials}</span> }
                        .into_any(),
                };
                let rows = items
                    .into_iter()
                    .map(|item| {
                        let style = item_style(&item);
                        let icon = format!("icon icon--{}", item.style.icon.slug());
                        view! {
                            <li>
                                <a class="profile-card__link" style=style href=item.href target="_blank" rel="noopener noreferrer">
                                    <span class=icon aria-hidden="true"></span>
                                    <span class="profile-card__label">{item.label}</span>
                                    <span class="profile-card__arrow" aria-hidden="true">"→"</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    {avatar}
                    <h2 class="profile-card__name">{name}</h2>
                    <p class="profile-card__email">{email}</p>
                    <ul class="profile-card__links">{rows}</ul>
                }
            }}
        </section>
    }
}
