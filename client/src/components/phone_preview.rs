//! Mobile-frame mock-up around the profile card, shown beside the editor.

use leptos::prelude::*;

use crate::components::profile_card::{CardModel, ProfileCard};
use crate::state::profile::ProfileStore;

/// Phone frame rendering the last saved snapshot of the editor.
#[component]
pub fn PhonePreview() -> impl IntoView {
    let store = expect_context::<ProfileStore>();
    let model = Signal::derive(move || {
        store.editor.with(|e| CardModel::from_profile(e.profile(), e.saved_links()))
    });

    view! {
        <aside class="phone" aria-label="Profile preview">
            <div class="phone__notch"></div>
            <div class="phone__screen">
                <ProfileCard model=model/>
            </div>
        </aside>
    }
}
