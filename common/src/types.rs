//! セッション共通の型
//!
//! - Phase: Idle / Busy の2状態
//! - SubmissionRecord: 学習済みログの1行

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exercise::Exercise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Busy,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Busy)
    }
}

/// 送信済み動画の記録（表示専用、削除しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub file_name: String,
    pub exercise: Exercise,
}

impl fmt::Display for SubmissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.file_name, self.exercise.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_record_display() {
        let record = SubmissionRecord {
            file_name: "a.mp4".into(),
            exercise: Exercise::BicepCurls,
        };
        assert_eq!(record.to_string(), "a.mp4 (Bicep Curls)");
    }

    #[test]
    fn test_phase_default_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert!(!Phase::Idle.is_busy());
        assert!(Phase::Busy.is_busy());
    }
}
