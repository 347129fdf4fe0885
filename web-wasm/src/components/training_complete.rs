//! 学習完了ダイアログ

use exercise_video_common::AFTER_TRAINING_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::upload_page::TrainingSignal;

#[component]
pub fn TrainingComplete(session: TrainingSignal) -> impl IntoView {
    let navigate = use_navigate();
    let exercise = move || {
        session.with(|s| s.notice().map(|e| e.value()).unwrap_or_default())
    };

    let on_ok = move |_| {
        session.update(|s| s.dismiss_notice());
        navigate(AFTER_TRAINING_PATH, Default::default());
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-icon">"✔"</div>
                <h3>"Model Training Complete"</h3>
                <p class="text-muted">
                    "Your model has been successfully trained with the uploaded videos for "
                    {exercise}
                    "."
                </p>
                <button class="btn btn-primary btn-block" on:click=on_ok>
                    "OK"
                </button>
            </div>
        </div>
    }
}
