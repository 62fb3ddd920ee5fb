//! Join page — pick a display name and a room to enter.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::storage;

/// localStorage key remembering the last display name used.
const USERNAME_STORAGE_KEY: &str = "sketchroom:username";

/// Join page — entering a name and room id navigates to the room view.
#[component]
pub fn JoinPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let room = RwSignal::new(String::new());

    // Prefill the name from the previous visit.
    Effect::new(move || {
        if username.get_untracked().is_empty() {
            if let Some(stored) = storage::load_json::<String>(USERNAME_STORAGE_KEY) {
                username.set(stored);
            }
        }
    });

    let navigate = use_navigate();
    let do_join = move || {
        let name = username.get().trim().to_owned();
        let room_id = room.get().trim().to_owned();
        if name.is_empty() || room_id.is_empty() {
            return;
        }

        storage::save_json(USERNAME_STORAGE_KEY, &name);
        session.update(|s| s.username = name);
        navigate(&format!("/room/{room_id}"), NavigateOptions::default());
    };

    let on_click = {
        let do_join = do_join.clone();
        move |_| do_join()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_join();
        }
    };
    let on_keydown_room = on_keydown.clone();

    view! {
        <div class="join-page">
            <h1>"Sketchroom"</h1>
            <p>"Shared whiteboard and chat"</p>
            <input
                class="join-page__input"
                type="text"
                placeholder="Your name"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <input
                class="join-page__input"
                type="text"
                placeholder="Room"
                prop:value=move || room.get()
                on:input=move |ev| room.set(event_target_value(&ev))
                on:keydown=on_keydown_room
            />
            <button class="btn btn--primary" on:click=on_click>
                "Join room"
            </button>
        </div>
    }
}
