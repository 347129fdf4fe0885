use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("動画が見つかりません: {0}")]
    NoVideosFound(String),

    #[error(transparent)]
    Session(#[from] exercise_video_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<exercise_video_common::UploadError> for AppError {
    fn from(e: exercise_video_common::UploadError) -> Self {
        AppError::Session(e.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
