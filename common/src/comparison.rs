//! 動画比較セッション
//!
//! モードはルートから与えられる。モード変更時に選択済み動画と前回結果はリセットしない。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::media::MediaFile;
use crate::score::SimilarityScore;
use crate::types::Phase;
use crate::upload::{FormField, UploadError, UploadForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// 学習済みモデルと比較（1本）
    Pretrained,
    /// 参照動画と比較（2本）
    Reference,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Pretrained => "pretrained",
            ComparisonMode::Reference => "reference",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ComparisonMode::Pretrained => "Compare with Pre-trained Model",
            ComparisonMode::Reference => "Compare with Reference Video",
        }
    }

    /// 必要な動画の本数（1本目から順に埋める）
    pub fn required_files(&self) -> usize {
        match self {
            ComparisonMode::Pretrained => 1,
            ComparisonMode::Reference => 2,
        }
    }

    pub fn form_fields(&self) -> Vec<FormField> {
        match self {
            ComparisonMode::Pretrained => vec![FormField::Video],
            ComparisonMode::Reference => vec![FormField::Reference, FormField::Comparison],
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            ComparisonMode::Pretrained => "Compare Video",
            ComparisonMode::Reference => "Compare Videos",
        }
    }
}

/// アップロード欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// 1本目（referenceモードでは参照動画）
    Primary,
    /// 2本目（referenceモードのみ）
    Secondary,
}

impl Slot {
    pub fn prompt(&self, mode: ComparisonMode) -> &'static str {
        match (mode, self) {
            (ComparisonMode::Reference, Slot::Primary) => "Upload reference video",
            _ => "Upload video to compare",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonJob<F> {
    pub mode: ComparisonMode,
    pub form: UploadForm<F>,
}

#[derive(Debug, Clone)]
pub struct ComparisonSession<F> {
    mode: ComparisonMode,
    primary: Option<F>,
    secondary: Option<F>,
    result: Option<SimilarityScore>,
    phase: Phase,
}

impl<F> ComparisonSession<F> {
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            primary: None,
            secondary: None,
            result: None,
            phase: Phase::Idle,
        }
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    pub fn file(&self, slot: Slot) -> Option<&F> {
        match slot {
            Slot::Primary => self.primary.as_ref(),
            Slot::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn result(&self) -> Option<SimilarityScore> {
        self.result
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_comparing(&self) -> bool {
        self.phase.is_busy()
    }

    /// モード切替。選択済み動画と前回結果は引き継ぐ
    pub fn set_mode(&mut self, mode: ComparisonMode) {
        if self.mode == mode {
            return;
        }
        if self.carries_state() {
            log::warn!(
                "モード切替 {} -> {}: 選択済み動画と前回結果を引き継ぎます",
                self.mode.as_str(),
                mode.as_str()
            );
        }
        self.mode = mode;
    }

    /// 以前のモードの選択や結果が残っているか
    pub fn carries_state(&self) -> bool {
        self.primary.is_some() || self.secondary.is_some() || self.result.is_some()
    }

    /// 2本目の欄を表示するか
    pub fn shows_secondary(&self) -> bool {
        self.mode == ComparisonMode::Reference && self.primary.is_some()
    }

    /// 比較ボタンを表示するか（モードに必要な動画が揃っている）
    pub fn has_required_files(&self) -> bool {
        [self.primary.is_some(), self.secondary.is_some()]
            .into_iter()
            .take(self.mode.required_files())
            .all(|chosen| chosen)
    }

    pub fn can_compare(&self) -> bool {
        self.has_required_files() && !self.phase.is_busy()
    }

    pub fn complete(&mut self, score: SimilarityScore) {
        log::info!("比較完了: {} ({})", score, score.tier().as_str());
        self.result = Some(score);
        self.phase = Phase::Idle;
    }

    /// 失敗時は前回結果を残してIdleへ戻す
    pub fn fail(&mut self, error: &UploadError) {
        log::error!("比較に失敗しました: {}", error);
        self.phase = Phase::Idle;
    }
}

impl<F: MediaFile> ComparisonSession<F> {
    /// 動画なら欄に設定して true、それ以外は無視して false
    pub fn choose(&mut self, slot: Slot, file: F) -> bool {
        if !file.is_video() {
            log::debug!("動画以外のファイルを無視: {}", file.name());
            return false;
        }
        match slot {
            Slot::Primary => self.primary = Some(file),
            Slot::Secondary => self.secondary = Some(file),
        }
        true
    }
}

impl<F: MediaFile + Clone> ComparisonSession<F> {
    pub fn begin(&mut self) -> Result<ComparisonJob<F>> {
        if self.phase.is_busy() {
            return Err(Error::Busy);
        }

        let mut form = UploadForm::new();
        match self.mode {
            ComparisonMode::Pretrained => {
                let video = self.primary.clone().ok_or(Error::MissingVideo("video"))?;
                form.append(FormField::Video, video);
            }
            ComparisonMode::Reference => {
                let reference = self
                    .primary
                    .clone()
                    .ok_or(Error::MissingVideo("reference"))?;
                let comparison = self
                    .secondary
                    .clone()
                    .ok_or(Error::MissingVideo("comparison"))?;
                form.append(FormField::Reference, reference);
                form.append(FormField::Comparison, comparison);
            }
        }

        self.phase = Phase::Busy;
        log::debug!("比較開始: {} {:?}", self.mode.as_str(), form.summary());
        Ok(ComparisonJob {
            mode: self.mode,
            form,
        })
    }
}
