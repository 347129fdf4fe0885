//! アップロードフォームと擬似バックエンド
//!
//! 実バックエンドは存在しない。フォームは組み立てるだけで送信しない。
//! 待ち時間は各フロントエンドのタイマーで消化する（ここでは扱わない）。

use thiserror::Error;

use crate::comparison::ComparisonMode;
use crate::config::SimulationConfig;
use crate::exercise::Exercise;
use crate::media::MediaFile;
use crate::score::SimilarityScore;

/// multipartのフィールド名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Video,
    Reference,
    Comparison,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Video => "video",
            FormField::Reference => "reference",
            FormField::Comparison => "comparison",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    parts: Vec<(FormField, F)>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, field: FormField, file: F) {
        self.parts.push((field, file));
    }

    pub fn parts(&self) -> &[(FormField, F)] {
        &self.parts
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.parts.iter().map(|(field, _)| *field).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<F: MediaFile> UploadForm<F> {
    /// ログ出力用の (フィールド名, ファイル名) 一覧
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        self.parts
            .iter()
            .map(|(field, file)| (field.as_str(), file.name()))
            .collect()
    }
}

/// 実バックエンド導入時の失敗種別
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("アップロードが拒否されました: {0}")]
    Rejected(String),

    #[error("対応していない形式です: {0}")]
    UnsupportedFormat(String),

    #[error("ファイルサイズが上限を超えています: {file_name} ({size} > {limit} bytes)")]
    TooLarge {
        file_name: String,
        size: u64,
        limit: u64,
    },

    #[error("タイムアウトしました ({0}ms)")]
    Timeout(u32),

    #[error("通信エラー: {0}")]
    Network(String),
}

pub trait TrainingBackend<F> {
    fn train(&mut self, exercise: Exercise, form: &UploadForm<F>) -> Result<(), UploadError>;
}

pub trait ComparisonBackend<F> {
    fn compare(
        &mut self,
        mode: ComparisonMode,
        form: &UploadForm<F>,
    ) -> Result<SimilarityScore, UploadError>;
}

/// 擬似バックエンド
///
/// `sampler` は [0,1) の一様乱数を返す関数（ブラウザでは `Math.random`）。
pub struct SimulatedBackend<S> {
    config: SimulationConfig,
    sampler: S,
}

impl<S> SimulatedBackend<S>
where
    S: FnMut() -> f64,
{
    pub fn new(config: SimulationConfig, sampler: S) -> Self {
        Self { config, sampler }
    }

    fn check_files<F: MediaFile>(&self, form: &UploadForm<F>) -> Result<(), UploadError> {
        for (_, file) in form.parts() {
            if !file.is_video() {
                return Err(UploadError::UnsupportedFormat(file.media_type()));
            }
            if let Some(limit) = self.config.max_upload_bytes {
                if file.size() > limit {
                    return Err(UploadError::TooLarge {
                        file_name: file.name(),
                        size: file.size(),
                        limit,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<F, S> TrainingBackend<F> for SimulatedBackend<S>
where
    F: MediaFile,
    S: FnMut() -> f64,
{
    fn train(&mut self, exercise: Exercise, form: &UploadForm<F>) -> Result<(), UploadError> {
        if form.is_empty() || form.fields().iter().any(|f| *f != FormField::Video) {
            return Err(UploadError::Rejected(format!(
                "学習フォームの形式が不正です: {:?}",
                form.fields()
            )));
        }
        self.check_files(form)?;
        log::debug!("擬似学習: {} ({}件)", exercise, form.len());
        Ok(())
    }
}

impl<F, S> ComparisonBackend<F> for SimulatedBackend<S>
where
    F: MediaFile,
    S: FnMut() -> f64,
{
    fn compare(
        &mut self,
        mode: ComparisonMode,
        form: &UploadForm<F>,
    ) -> Result<SimilarityScore, UploadError> {
        if form.fields() != mode.form_fields() {
            return Err(UploadError::Rejected(format!(
                "{}モードのフォーム形式が不正です: {:?}",
                mode.as_str(),
                form.fields()
            )));
        }
        self.check_files(form)?;

        let sample = (self.sampler)();
        let score = SimilarityScore::from_unit(sample, self.config.min_score, self.config.max_score)
            .map_err(|e| UploadError::Rejected(e.to_string()))?;
        log::debug!("擬似比較: {} -> {}", mode.as_str(), score);
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::VideoFile;

    fn video(name: &str, size: u64) -> VideoFile {
        VideoFile::new(name, "video/mp4", size)
    }

    fn form(parts: Vec<(FormField, VideoFile)>) -> UploadForm<VideoFile> {
        let mut form = UploadForm::new();
        for (field, file) in parts {
            form.append(field, file);
        }
        form
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormField::Video.as_str(), "video");
        assert_eq!(FormField::Reference.as_str(), "reference");
        assert_eq!(FormField::Comparison.as_str(), "comparison");
    }

    #[test]
    fn test_compare_pretrained_uses_sampler() {
        let mut backend = SimulatedBackend::new(SimulationConfig::default(), || 0.0);
        let score = backend
            .compare(
                ComparisonMode::Pretrained,
                &form(vec![(FormField::Video, video("a.mp4", 1))]),
            )
            .unwrap();
        assert_eq!(score.value(), 70);

        let mut backend = SimulatedBackend::new(SimulationConfig::default(), || 0.9999);
        let score = backend
            .compare(
                ComparisonMode::Pretrained,
                &form(vec![(FormField::Video, video("a.mp4", 1))]),
            )
            .unwrap();
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_compare_rejects_wrong_fields() {
        let mut backend = SimulatedBackend::new(SimulationConfig::default(), || 0.5);
        let result = backend.compare(
            ComparisonMode::Reference,
            &form(vec![(FormField::Video, video("a.mp4", 1))]),
        );
        assert!(matches!(result, Err(UploadError::Rejected(_))));
    }

    #[test]
    fn test_size_limit() {
        let config = SimulationConfig {
            max_upload_bytes: Some(100),
            ..SimulationConfig::instant()
        };
        let mut backend = SimulatedBackend::new(config, || 0.5);
        let result = backend.compare(
            ComparisonMode::Reference,
            &form(vec![
                (FormField::Reference, video("ref.mp4", 10)),
                (FormField::Comparison, video("big.mp4", 101)),
            ]),
        );
        assert_eq!(
            result,
            Err(UploadError::TooLarge {
                file_name: "big.mp4".into(),
                size: 101,
                limit: 100,
            })
        );
    }

    #[test]
    fn test_train_accepts_video_parts() {
        let mut backend = SimulatedBackend::new(SimulationConfig::instant(), || 0.0);
        let ok = backend.train(
            Exercise::Squat,
            &form(vec![
                (FormField::Video, video("a.mp4", 1)),
                (FormField::Video, video("b.mp4", 1)),
            ]),
        );
        assert!(ok.is_ok());

        let empty: UploadForm<VideoFile> = UploadForm::new();
        assert!(matches!(
            backend.train(Exercise::Squat, &empty),
            Err(UploadError::Rejected(_))
        ));
    }

    #[test]
    fn test_train_rejects_non_video() {
        let mut backend = SimulatedBackend::new(SimulationConfig::instant(), || 0.0);
        let result = backend.train(
            Exercise::Squat,
            &form(vec![(FormField::Video, VideoFile::new("a.png", "image/png", 1))]),
        );
        assert_eq!(
            result,
            Err(UploadError::UnsupportedFormat("image/png".into()))
        );
    }

    #[test]
    fn test_summary() {
        let f = form(vec![
            (FormField::Reference, video("ref.mp4", 1)),
            (FormField::Comparison, video("cmp.mp4", 1)),
        ]);
        assert_eq!(
            f.summary(),
            vec![("reference", "ref.mp4".to_string()), ("comparison", "cmp.mp4".to_string())]
        );
    }
}
