//! ナビゲーションバー

use exercise_video_common::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NavigationBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav">
            <div class="nav-links">
                {Route::NAV
                    .into_iter()
                    .map(|route| {
                        let active = move || route.is_active(&pathname.get());
                        let icon = match route {
                            Route::Upload => "⬆",
                            _ => "⇄",
                        };
                        view! {
                            <a
                                href=route.path()
                                class=move || if active() { "nav-link active" } else { "nav-link" }
                                aria-current=move || active().then_some("page")
                            >
                                <span class="nav-icon">{icon}</span>
                                {route.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
