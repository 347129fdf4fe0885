//! 擬似学習・擬似比較の実行
//!
//! ブラウザ版と同じセッション型を使い、待ち時間は tokio のスリープで消化する。

use crate::error::{AppError, Result};
use exercise_video_common::{
    ComparisonBackend, ComparisonMode, ComparisonSession, Exercise, MediaFile, SimilarityScore,
    SimulatedBackend, SimulationConfig, Slot, SubmissionRecord, TrainingBackend, TrainingSession,
    VideoFile,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// 保留リストに入った動画数
    pub accepted: usize,
    /// 動画以外で除外した数
    pub dropped: usize,
    pub submitted: Vec<SubmissionRecord>,
}

fn spinner(message: &'static str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn train(
    files: Vec<VideoFile>,
    exercise: Exercise,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<TrainingReport> {
    let selected = files.len();
    let mut session = TrainingSession::new();
    let accepted = session.add_files(files);
    if accepted == 0 {
        return Err(AppError::NoVideosFound(format!("{}件中0件", selected)));
    }
    if accepted < selected {
        log::info!("動画以外を除外: {}件中{}件を使用", selected, accepted);
    }

    session.select_exercise(Some(exercise));
    let job = session.begin()?;

    let pb = spinner("Training Model...", show_progress);
    tokio::time::sleep(Duration::from_millis(config.training_delay_ms as u64)).await;
    pb.finish_and_clear();

    let mut backend = SimulatedBackend::new(config.clone(), rand::random::<f64>);
    match backend.train(job.exercise, &job.form) {
        Ok(()) => {
            session.complete(job)?;
        }
        Err(e) => {
            session.fail(&e);
            log::warn!("擬似バックエンドが学習を拒否: {}", e);
            return Err(e.into());
        }
    }

    Ok(TrainingReport {
        accepted,
        dropped: selected - accepted,
        submitted: session.submitted().to_vec(),
    })
}

/// `files` はモードに応じて1本または2本（参照動画が先）
pub async fn compare(
    mode: ComparisonMode,
    files: Vec<VideoFile>,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimilarityScore> {
    let mut session = ComparisonSession::new(mode);
    for (slot, file) in [Slot::Primary, Slot::Secondary].into_iter().zip(files) {
        let name = file.name();
        if !session.choose(slot, file) {
            log::warn!("動画ではないため比較できません: {}", name);
            return Err(AppError::NoVideosFound(name));
        }
    }

    let job = session.begin()?;

    let pb = spinner("Comparing...", show_progress);
    tokio::time::sleep(Duration::from_millis(config.comparison_delay_ms as u64)).await;
    pb.finish_and_clear();

    let mut backend = SimulatedBackend::new(config.clone(), rand::random::<f64>);
    match backend.compare(job.mode, &job.form) {
        Ok(score) => {
            session.complete(score);
            Ok(score)
        }
        Err(e) => {
            session.fail(&e);
            log::warn!("擬似バックエンドが比較を拒否: {}", e);
            Err(e.into())
        }
    }
}
