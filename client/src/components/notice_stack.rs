//! Toast-style stack rendering transient notices.

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};

/// How long a notice stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_MS: u64 = 4000;

/// Renders the notice stack and auto-dismisses entries after a short delay.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Schedule auto-dismissal for each notice as it appears.
    let scheduled_through = RwSignal::new(None::<u64>);
    Effect::new(move || {
        let notices = ui.get().notices;
        let Some(newest) = notices.last().map(|n| n.id) else {
            return;
        };
        if scheduled_through.get_untracked().is_some_and(|seen| seen >= newest) {
            return;
        }

        #[cfg(feature = "hydrate")]
        for notice in &notices {
            if scheduled_through.get_untracked().is_some_and(|seen| seen >= notice.id) {
                continue;
            }
            let id = notice.id;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TTL_MS)).await;
                ui.update(|u| u.dismiss(id));
            });
        }
        scheduled_through.set(Some(newest));
    });

    view! {
        <div class="notice-stack">
            {move || {
                ui.get()
                    .notices
                    .iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = match notice.level {
                            NoticeLevel::Info => "notice notice--info",
                            NoticeLevel::Error => "notice notice--error",
                        };
                        let text = notice.text.clone();
                        view! {
                            <div class=class>
                                <span class="notice__text">{text}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss(id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
