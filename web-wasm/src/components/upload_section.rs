//! 比較用の動画アップロード欄（1欄1本）

use exercise_video_common::{MediaFile, Slot};
use leptos::prelude::*;
use web_sys::{Event, HtmlInputElement};

use crate::browser_file::files_from_input;
use crate::components::comparison_page::ComparisonSignal;

#[component]
pub fn UploadSection(session: ComparisonSignal, slot: Slot) -> impl IntoView {
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = files_from_input(&input).into_iter().next() {
            session.update(|s| {
                s.choose(slot, file);
            });
        }
        input.set_value("");
    };

    let selected = move || session.with(|s| s.file(slot).map(|f| f.name()));
    let prompt = move || session.with(|s| slot.prompt(s.mode()));

    view! {
        <div class="card">
            <label class="upload-area">
                {move || match selected() {
                    Some(name) => view! {
                        <div class="upload-icon selected">"🎞"</div>
                        <p class="file-name">{name}</p>
                        <p class="text-muted">"Click to change video"</p>
                    }
                    .into_any(),
                    None => view! {
                        <div class="upload-icon">"⬆"</div>
                        <p>{prompt}</p>
                        <p class="text-muted">"MP4, WebM, or OGG files accepted"</p>
                    }
                    .into_any(),
                }}
                <input type="file" class="hidden" accept="video/*" on:change=on_change />
            </label>
        </div>
    }
}
