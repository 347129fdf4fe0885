//! シミュレーション設定

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::MAX_SCORE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// 学習の擬似待ち時間（ミリ秒）
    pub training_delay_ms: u32,
    /// 比較の擬似待ち時間（ミリ秒）
    pub comparison_delay_ms: u32,
    pub min_score: u8,
    pub max_score: u8,
    /// 1ファイルあたりの上限。未設定なら無制限
    pub max_upload_bytes: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            training_delay_ms: 2000,
            comparison_delay_ms: 2000,
            min_score: 70,
            max_score: MAX_SCORE,
            max_upload_bytes: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_score > MAX_SCORE {
            return Err(Error::Config(format!(
                "maxScoreは{}以下にしてください: {}",
                MAX_SCORE, self.max_score
            )));
        }
        if self.min_score > self.max_score {
            return Err(Error::Config(format!(
                "minScore({})がmaxScore({})を超えています",
                self.min_score, self.max_score
            )));
        }
        Ok(())
    }

    /// テスト用: 待ち時間なし
    pub fn instant() -> Self {
        Self {
            training_delay_ms: 0,
            comparison_delay_ms: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.training_delay_ms, 2000);
        assert_eq!(config.comparison_delay_ms, 2000);
        assert_eq!((config.min_score, config.max_score), (70, 100));
        assert!(config.max_upload_bytes.is_none());
        assert!(config.validate().is_ok());
    }

    fn parse(json: &str) -> SimulationConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = parse(r#"{"trainingDelayMs": 10}"#);
        assert_eq!(config.training_delay_ms, 10);
        assert_eq!(config.comparison_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = parse(r#"{"minScore": 95, "maxScore": 80}"#);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_max_over_100() {
        let config = parse(r#"{"maxScore": 120}"#);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
