//! 動画アップロード・学習ページ

use exercise_video_common::{Exercise, SimulationConfig, TrainingSession};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, HtmlInputElement};

use crate::api;
use crate::browser_file::{files_from_input, BrowserFile};
use crate::components::training_complete::TrainingComplete;

pub type TrainingSignal = RwSignal<TrainingSession<BrowserFile>, LocalStorage>;

/// ページを離れると状態は破棄される
#[component]
pub fn UploadPage() -> impl IntoView {
    let session: TrainingSignal = RwSignal::new_local(TrainingSession::new());

    let on_train = move |_| {
        let job = match session.try_update(|s| s.begin()) {
            Some(Ok(job)) => job,
            Some(Err(e)) => {
                log::debug!("学習を開始できません: {}", e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = api::run_training(SimulationConfig::default(), &job).await;
            // 待機中にページを離れていれば何もしない
            session.try_update(move |s| match outcome {
                Ok(()) => {
                    if let Err(e) = s.complete(job) {
                        log::warn!("学習結果を反映できません: {}", e);
                    }
                }
                Err(e) => s.fail(&e),
            });
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Video Upload Training"</h1>
                <p class="text-muted">"Upload your videos to train the model"</p>
            </div>

            <ExerciseSelect session=session />
            <VideoPicker session=session />

            <Show when=move || session.with(|s| !s.submitted().is_empty())>
                <SubmittedList session=session />
            </Show>

            <Show when=move || session.with(|s| !s.pending().is_empty())>
                <PendingList session=session />
            </Show>

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !session.with(|s| s.can_submit())
                    on:click=on_train
                >
                    {move || {
                        if session.with(|s| s.is_training()) {
                            "Training Model..."
                        } else {
                            "Train Model"
                        }
                    }}
                </button>
            </div>

            <Show when=move || session.with(|s| s.notice().is_some())>
                <TrainingComplete session=session />
            </Show>
        </div>
    }
}

#[component]
fn ExerciseSelect(session: TrainingSignal) -> impl IntoView {
    let selected = move || {
        session.with(|s| s.exercise().map(|e| e.value()).unwrap_or_default())
    };

    view! {
        <div class="form-group">
            <label for="exercise">"Select Exercise"</label>
            <select
                id="exercise"
                prop:value=selected
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.select_exercise(Exercise::from_select_value(&value)));
                }
            >
                <option value="">"-- Select Exercise --"</option>
                {Exercise::ALL
                    .into_iter()
                    .map(|exercise| {
                        view! { <option value=exercise.value()>{exercise.label()}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn VideoPicker(session: TrainingSignal) -> impl IntoView {
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = files_from_input(&input);
        let selected = files.len();
        let added = session.try_update(|s| s.add_files(files)).unwrap_or_default();
        log::debug!("動画を追加: {}/{}件", added, selected);
        // 同じファイルを選び直せるようにする
        input.set_value("");
    };

    view! {
        <div class="card">
            <label for="video-upload" class="upload-area">
                <div class="upload-icon">"⬆"</div>
                <p>"Click to upload videos"</p>
                <p class="text-muted">"MP4, WebM, or OGG files accepted"</p>
                <input
                    id="video-upload"
                    type="file"
                    class="hidden"
                    accept="video/*"
                    multiple=true
                    on:change=on_change
                />
            </label>
        </div>
    }
}

#[component]
fn SubmittedList(session: TrainingSignal) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Submitted Videos"</h2>
            <ul class="file-list">
                {move || {
                    session
                        .with(|s| s.submitted().iter().map(|r| r.to_string()).collect::<Vec<_>>())
                        .into_iter()
                        .map(|record| {
                            view! {
                                <li class="file-item">
                                    <span class="check">"✔"</span>
                                    <span>{record}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn PendingList(session: TrainingSignal) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Selected Videos"</h2>
            <ul class="file-list">
                {move || {
                    session
                        .with(|s| s.pending_names())
                        .into_iter()
                        .enumerate()
                        .map(|(index, name)| {
                            view! {
                                <li class="file-item spread">
                                    <span>{name}</span>
                                    <button
                                        class="btn-link danger"
                                        on:click=move |_| {
                                            if let Some(Err(e)) = session.try_update(|s| s.remove(index)) {
                                                log::debug!("削除できません: {}", e);
                                            }
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
