//! 動画比較ページ
//!
//! `/compare/*` の2ルートで同じ比較状態を共有する。モードはルートから設定し、
//! 選択済み動画と前回結果はモード切替後も残る。

use exercise_video_common::{ComparisonMode, ComparisonSession, Route, SimulationConfig, Slot};
use leptos::component::{component_props_builder, component_view};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::api;
use crate::browser_file::BrowserFile;
use crate::components::similarity_result::SimilarityResult;
use crate::components::upload_section::UploadSection;

pub type ComparisonSignal = RwSignal<ComparisonSession<BrowserFile>, LocalStorage>;

#[derive(Clone, Copy)]
struct ComparisonState(ComparisonSignal);

#[component]
pub fn CompareLayout() -> impl IntoView {
    let initial = Route::match_path(&use_location().pathname.get_untracked())
        .and_then(|route| route.comparison_mode())
        .unwrap_or(ComparisonMode::Pretrained);
    provide_context(ComparisonState(RwSignal::new_local(ComparisonSession::new(initial))));

    view! { <Outlet /> }
}

#[component]
pub fn ComparisonPage(mode: ComparisonMode) -> impl IntoView {
    let ComparisonState(session) = expect_context::<ComparisonState>();
    if session.with_untracked(|s| s.mode()) != mode {
        session.update(|s| s.set_mode(mode));
    }

    let on_compare = move |_| {
        let job = match session.try_update(|s| s.begin()) {
            Some(Ok(job)) => job,
            Some(Err(e)) => {
                log::debug!("比較を開始できません: {}", e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = api::run_comparison(SimulationConfig::default(), &job).await;
            session.try_update(move |s| match outcome {
                Ok(score) => s.complete(score),
                Err(e) => s.fail(&e),
            });
        });
    };

    view! {
        <div class="page">
            <h2 class="page-title">{mode.title()}</h2>

            <UploadSection session=session slot=Slot::Primary />
            <Show when=move || session.with(|s| s.shows_secondary())>
                // `slot` is reserved by `view!` for Leptos slots, so build the props explicitly.
                {component_view(
                    &UploadSection,
                    component_props_builder(&UploadSection)
                        .session(session)
                        .slot(Slot::Secondary)
                        .build(),
                )}
            </Show>

            <Show when=move || session.with(|s| s.has_required_files())>
                <div class="actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || session.with(|s| s.is_comparing())
                        on:click=on_compare
                    >
                        {move || {
                            if session.with(|s| s.is_comparing()) {
                                "Comparing..."
                            } else {
                                mode.action_label()
                            }
                        }}
                    </button>
                </div>
            </Show>

            <SimilarityResult session=session />
        </div>
    }
}
