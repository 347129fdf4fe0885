//! エラー型定義

use thiserror::Error;

use crate::upload::UploadError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("処理中のため操作できません")]
    Busy,

    #[error("処理が開始されていません")]
    NotStarted,

    #[error("動画が選択されていません")]
    NoPendingFiles,

    #[error("エクササイズが選択されていません")]
    ExerciseNotSelected,

    #[error("比較に必要な動画が不足しています: {0}")]
    MissingVideo(&'static str),

    #[error("インデックスが範囲外です: {index} (件数 {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("スコアが範囲外です: {0}")]
    ScoreOutOfRange(u32),

    #[error("不明なエクササイズ: {0}")]
    UnknownExercise(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("アップロード失敗: {0}")]
    Upload(#[from] UploadError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
