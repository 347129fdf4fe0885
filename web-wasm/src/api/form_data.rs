//! multipart FormData 組み立て

use exercise_video_common::{MediaFile, UploadForm};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::browser_file::BrowserFile;

/// フィールド名はフォームの定義どおり（video / reference / comparison）
pub fn build_form_data(form: &UploadForm<BrowserFile>) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (field, file) in form.parts() {
        data.append_with_blob_and_filename(field.as_str(), file.as_file(), &file.name())?;
    }
    Ok(data)
}
