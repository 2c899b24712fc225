//! One editable (platform, URL) row of the links editor.

#[cfg(test)]
#[path = "link_item_test.rs"]
mod link_item_test;

use leptos::prelude::*;
use profile::{LinkEntry, LinkField, Platform};

use crate::state::profile::ProfileStore;

/// Select options for a row: the known platforms, plus the row's own value
/// when it is free text so the select never silently changes it.
#[must_use]
pub fn platform_options(current: &Platform) -> Vec<String> {
    let mut options: Vec<String> = Platform::KNOWN.iter().map(|p| p.as_str().to_owned()).collect();
    if let Platform::Other(raw) = current {
        options.push(raw.clone());
    }
    options
}

/// Placeholder hint for the URL input.
#[must_use]
pub fn link_placeholder(platform: &Platform) -> String {
    match platform.style().host {
        Some(host) => format!("e.g. https://www.{host}/johnappleseed"),
        None => "e.g. https://example.com".to_owned(),
    }
}

#[component]
pub fn LinkItem(index: usize, entry: LinkEntry) -> impl IntoView {
    let store = expect_context::<ProfileStore>();
    let id = entry.id;
    let selected = entry.platform.as_str().to_owned();
    let options = platform_options(&entry.platform)
        .into_iter()
        .map(|name| {
            let is_selected = name == selected;
            view! { <option value=name.clone() selected=is_selected>{name.clone()}</option> }
        })
        .collect_view();
    let placeholder = link_placeholder(&entry.platform);
    let select_id = format!("link-{id}-platform");
    let input_id = format!("link-{id}-url");

    view! {
        <li class="link-item">
            <div class="link-item__header">
                <span class="link-item__title">{format!("Link #{}", index + 1)}</span>
                <button
                    type="button"
                    class="link-item__remove"
                    on:click=move |_| store.remove_link(id)
                >
                    "Remove"
                </button>
            </div>
            <label for=select_id.clone()>"Platform"</label>
            <select
                id=select_id
                on:change=move |ev| store.update_link(id, LinkField::Platform, &event_target_value(&ev))
            >
                {options}
            </select>
            <label for=input_id.clone()>"Link"</label>
            <input
                id=input_id
                type="text"
                placeholder=placeholder
                prop:value=entry.link
                on:change=move |ev| store.update_link(id, LinkField::Link, &event_target_value(&ev))
            />
        </li>
    }
}
