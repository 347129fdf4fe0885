//! アップロード・学習セッション
//!
//! 状態遷移: Idle → Busy（begin）→ Idle（complete / fail）
//!
//! Busy中の追加ファイルは保留リストに残り、完了時は開始時点の分だけ送信済みへ移す。

use crate::error::{Error, Result};
use crate::exercise::Exercise;
use crate::media::MediaFile;
use crate::types::{Phase, SubmissionRecord};
use crate::upload::{FormField, UploadError, UploadForm};

/// begin() が返す学習ジョブ
#[derive(Debug, Clone)]
pub struct TrainingJob<F> {
    pub exercise: Exercise,
    pub form: UploadForm<F>,
}

impl<F> TrainingJob<F> {
    pub fn file_count(&self) -> usize {
        self.form.len()
    }
}

#[derive(Debug, Clone)]
pub struct TrainingSession<F> {
    pending: Vec<F>,
    exercise: Option<Exercise>,
    submitted: Vec<SubmissionRecord>,
    phase: Phase,
    model_trained: bool,
    notice: Option<Exercise>,
}

impl<F> Default for TrainingSession<F> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            exercise: None,
            submitted: Vec::new(),
            phase: Phase::Idle,
            model_trained: false,
            notice: None,
        }
    }
}

impl<F> TrainingSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[F] {
        &self.pending
    }

    pub fn submitted(&self) -> &[SubmissionRecord] {
        &self.submitted
    }

    pub fn exercise(&self) -> Option<Exercise> {
        self.exercise
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_training(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn is_model_trained(&self) -> bool {
        self.model_trained
    }

    /// 完了通知（表示中なら学習したエクササイズ）
    pub fn notice(&self) -> Option<Exercise> {
        self.notice
    }

    pub fn select_exercise(&mut self, exercise: Option<Exercise>) {
        self.exercise = exercise;
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.is_empty() && self.exercise.is_some() && !self.phase.is_busy()
    }

    pub fn remove(&mut self, index: usize) -> Result<F> {
        if self.phase.is_busy() {
            return Err(Error::Busy);
        }
        if index >= self.pending.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.pending.len(),
            });
        }
        Ok(self.pending.remove(index))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// 失敗時は保留リストを残してIdleへ戻す
    pub fn fail(&mut self, error: &UploadError) {
        log::error!("学習に失敗しました: {}", error);
        self.phase = Phase::Idle;
    }
}

impl<F: MediaFile> TrainingSession<F> {
    /// `video/` 以外は黙って捨てる。追加件数を返す
    pub fn add_files<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let before = self.pending.len();
        let mut dropped = 0usize;
        for file in files {
            if file.is_video() {
                self.pending.push(file);
            } else {
                dropped += 1;
            }
        }
        let added = self.pending.len() - before;
        if dropped > 0 {
            log::debug!("動画以外のファイルを除外: {}件", dropped);
        }
        self.model_trained = false;
        added
    }

    pub fn pending_names(&self) -> Vec<String> {
        self.pending.iter().map(|f| f.name()).collect()
    }
}

impl<F: MediaFile + Clone> TrainingSession<F> {
    /// Busyへ遷移し、送信用フォームを返す
    pub fn begin(&mut self) -> Result<TrainingJob<F>> {
        if self.phase.is_busy() {
            return Err(Error::Busy);
        }
        if self.pending.is_empty() {
            return Err(Error::NoPendingFiles);
        }
        let exercise = self.exercise.ok_or(Error::ExerciseNotSelected)?;

        let mut form = UploadForm::new();
        for file in &self.pending {
            form.append(FormField::Video, file.clone());
        }

        self.phase = Phase::Busy;
        log::debug!("学習開始: {} ({}件)", exercise, form.len());
        Ok(TrainingJob { exercise, form })
    }

    /// 送信済みログへ移し、通知を出してIdleへ戻す。追加したログの件数を返す
    ///
    /// Busyでなければ（fail後の古いジョブなど）何も変えない
    pub fn complete(&mut self, job: TrainingJob<F>) -> Result<usize> {
        if !self.phase.is_busy() {
            return Err(Error::NotStarted);
        }
        let count = job.file_count().min(self.pending.len());
        let records: Vec<SubmissionRecord> = self
            .pending
            .drain(..count)
            .map(|file| SubmissionRecord {
                file_name: file.name(),
                exercise: job.exercise,
            })
            .collect();

        self.submitted.extend(records);
        self.model_trained = true;
        self.notice = Some(job.exercise);
        self.phase = Phase::Idle;
        log::info!("学習完了: {} ({}件)", job.exercise, count);
        Ok(count)
    }
}
