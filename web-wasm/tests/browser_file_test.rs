//! ブラウザ上のファイル処理テスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

#![cfg(target_arch = "wasm32")]

use exercise_video_common::{
    ComparisonMode, ComparisonSession, Exercise, FormField, MediaFile, Slot, TrainingSession,
};
use exercise_video_wasm::api::build_form_data;
use exercise_video_wasm::browser_file::BrowserFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str, media_type: &str) -> BrowserFile {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str("data"));
    let options = web_sys::FilePropertyBag::new();
    options.set_type(media_type);
    let file = web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
        .expect("File生成に失敗");
    BrowserFile::new(file)
}

#[wasm_bindgen_test]
fn test_browser_file_media_file() {
    let file = make_file("squat.mp4", "video/mp4");
    assert_eq!(file.name(), "squat.mp4");
    assert_eq!(file.media_type(), "video/mp4");
    assert_eq!(file.size(), 4);
    assert!(file.is_video());
}

#[wasm_bindgen_test]
fn test_training_session_filters_browser_files() {
    let mut session = TrainingSession::new();
    let added = session.add_files(vec![
        make_file("a.mp4", "video/mp4"),
        make_file("b.png", "image/png"),
        make_file("c.webm", "video/webm"),
    ]);
    assert_eq!(added, 2);
    assert_eq!(session.pending_names(), vec!["a.mp4", "c.webm"]);

    session.select_exercise(Some(Exercise::Squat));
    let job = session.begin().expect("学習開始に失敗");
    let data = build_form_data(&job.form).expect("FormData生成に失敗");
    assert!(data.has(FormField::Video.as_str()));
    assert_eq!(data.get_all(FormField::Video.as_str()).length(), 2);
}

#[wasm_bindgen_test]
fn test_reference_form_data_fields() {
    let mut session = ComparisonSession::new(ComparisonMode::Reference);
    session.choose(Slot::Primary, make_file("ref.mp4", "video/mp4"));
    session.choose(Slot::Secondary, make_file("me.mp4", "video/mp4"));

    let job = session.begin().expect("比較開始に失敗");
    let data = build_form_data(&job.form).expect("FormData生成に失敗");
    assert!(data.has("reference"));
    assert!(data.has("comparison"));
    assert!(!data.has("video"));
}
