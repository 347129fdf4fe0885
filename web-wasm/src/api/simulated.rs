use exercise_video_common::{
    ComparisonBackend, ComparisonJob, SimilarityScore, SimulatedBackend, SimulationConfig,
    TrainingBackend, TrainingJob, UploadError, UploadForm,
};
use gloo::timers::future::TimeoutFuture;

use super::build_form_data;
use crate::browser_file::BrowserFile;

/// 送信はしない。組み立てたフォームの中身だけログに出す
fn log_notional_request(kind: &str, form: &UploadForm<BrowserFile>) -> Result<(), UploadError> {
    build_form_data(form).map_err(|e| UploadError::Rejected(format!("{:?}", e)))?;
    let summary = serde_json::to_string(&form.summary()).unwrap_or_default();
    log::debug!("{}リクエスト（未送信）: {}", kind, summary);
    Ok(())
}

/// 学習（擬似）
pub async fn run_training(
    config: SimulationConfig,
    job: &TrainingJob<BrowserFile>,
) -> Result<(), UploadError> {
    log_notional_request("学習", &job.form)?;
    TimeoutFuture::new(config.training_delay_ms).await;

    let mut backend = SimulatedBackend::new(config, js_sys::Math::random);
    backend.train(job.exercise, &job.form)
}

/// 比較（擬似）。スコアは [minScore, maxScore] の一様乱数
pub async fn run_comparison(
    config: SimulationConfig,
    job: &ComparisonJob<BrowserFile>,
) -> Result<SimilarityScore, UploadError> {
    log_notional_request("比較", &job.form)?;
    TimeoutFuture::new(config.comparison_delay_ms).await;

    let mut backend = SimulatedBackend::new(config, js_sys::Math::random);
    backend.compare(job.mode, &job.form)
}
