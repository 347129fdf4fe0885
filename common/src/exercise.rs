//! エクササイズ種別
//!
//! 値（記録に使う文字列）と表示ラベルは別物。例: `Pushup` / "Push-up"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    Pushup,
    Squat,
    Planks,
    Crunches,
    #[serde(rename = "Bicep Curls")]
    BicepCurls,
    #[serde(rename = "Jumping Jacks")]
    JumpingJacks,
}

impl Exercise {
    /// 選択肢の表示順
    pub const ALL: [Exercise; 6] = [
        Exercise::Pushup,
        Exercise::Squat,
        Exercise::Planks,
        Exercise::Crunches,
        Exercise::BicepCurls,
        Exercise::JumpingJacks,
    ];

    /// 送信記録・フォーム値に使う文字列
    pub fn value(&self) -> &'static str {
        match self {
            Exercise::Pushup => "Pushup",
            Exercise::Squat => "Squat",
            Exercise::Planks => "Planks",
            Exercise::Crunches => "Crunches",
            Exercise::BicepCurls => "Bicep Curls",
            Exercise::JumpingJacks => "Jumping Jacks",
        }
    }

    /// セレクトボックスの表示名
    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Pushup => "Push-up",
            other => other.value(),
        }
    }

    /// セレクトボックスの値から変換（空文字は未選択）
    pub fn from_select_value(value: &str) -> Option<Exercise> {
        if value.is_empty() {
            return None;
        }
        value.parse().ok()
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Exercise {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Exercise::ALL
            .into_iter()
            .find(|e| {
                e.value().eq_ignore_ascii_case(trimmed) || e.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| Error::UnknownExercise(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_label() {
        assert_eq!(Exercise::Pushup.value(), "Pushup");
        assert_eq!(Exercise::Pushup.label(), "Push-up");
        assert_eq!(Exercise::BicepCurls.value(), "Bicep Curls");
        assert_eq!(Exercise::BicepCurls.label(), "Bicep Curls");
    }

    #[test]
    fn test_parse_accepts_value_or_label() {
        assert_eq!("Squat".parse::<Exercise>().unwrap(), Exercise::Squat);
        assert_eq!("push-up".parse::<Exercise>().unwrap(), Exercise::Pushup);
        assert_eq!("jumping jacks".parse::<Exercise>().unwrap(), Exercise::JumpingJacks);
        assert!(matches!(
            "Burpees".parse::<Exercise>(),
            Err(Error::UnknownExercise(_))
        ));
    }

    #[test]
    fn test_empty_select_value_is_unset() {
        assert_eq!(Exercise::from_select_value(""), None);
        assert_eq!(Exercise::from_select_value("Planks"), Some(Exercise::Planks));
    }

    #[test]
    fn test_serde_uses_value() {
        let json = serde_json::to_string(&Exercise::BicepCurls).unwrap();
        assert_eq!(json, "\"Bicep Curls\"");
        for exercise in Exercise::ALL {
            let json = serde_json::to_string(&exercise).unwrap();
            assert_eq!(json, format!("\"{}\"", exercise.value()));
            assert_eq!(serde_json::from_str::<Exercise>(&json).unwrap(), exercise);
        }
    }
}
