//! 類似度スコアと評価段階

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MAX_SCORE: u8 = 100;

/// 0〜100の類似度（%）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SimilarityScore(u8);

impl SimilarityScore {
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_SCORE as u32 {
            return Err(Error::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// [0,1) の一様乱数を [min,max]（両端含む）の整数へ写像する
    pub fn from_unit(sample: f64, min: u8, max: u8) -> Result<Self> {
        if min > max || max > MAX_SCORE {
            return Err(Error::Config(format!(
                "スコア範囲が不正です: {}..={}",
                min, max
            )));
        }
        let span = (max - min) as u32 + 1;
        let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
        let offset = ((sample * span as f64).floor() as u32).min(span - 1);
        Self::new(min as u32 + offset)
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::of(*self)
    }
}

impl TryFrom<u32> for SimilarityScore {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SimilarityScore> for u32 {
    fn from(score: SimilarityScore) -> Self {
        score.0 as u32
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 評価段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl MatchTier {
    pub fn of(score: SimilarityScore) -> Self {
        match score.value() {
            90..=MAX_SCORE => MatchTier::Excellent,
            80..=89 => MatchTier::Good,
            _ => MatchTier::Fair,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent match!",
            MatchTier::Good => "Good match with room for improvement",
            MatchTier::Fair => "Fair match - consider reviewing the technique",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u32) -> SimilarityScore {
        SimilarityScore::new(v).unwrap()
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(score(95).tier(), MatchTier::Excellent);
        assert_eq!(score(90).tier(), MatchTier::Excellent);
        assert_eq!(score(89).tier(), MatchTier::Good);
        assert_eq!(score(85).tier(), MatchTier::Good);
        assert_eq!(score(80).tier(), MatchTier::Good);
        assert_eq!(score(79).tier(), MatchTier::Fair);
        assert_eq!(score(75).tier(), MatchTier::Fair);
        assert_eq!(score(0).tier(), MatchTier::Fair);
    }

    #[test]
    fn test_new_rejects_over_100() {
        assert!(SimilarityScore::new(100).is_ok());
        assert!(matches!(
            SimilarityScore::new(101),
            Err(Error::ScoreOutOfRange(101))
        ));
    }

    #[test]
    fn test_from_unit_covers_inclusive_range() {
        assert_eq!(SimilarityScore::from_unit(0.0, 70, 100).unwrap().value(), 70);
        assert_eq!(
            SimilarityScore::from_unit(0.999_999, 70, 100).unwrap().value(),
            100
        );
        // 1.0ちょうどでも上限を超えない
        assert_eq!(SimilarityScore::from_unit(1.0, 70, 100).unwrap().value(), 100);
        assert_eq!(SimilarityScore::from_unit(f64::NAN, 70, 100).unwrap().value(), 70);

        for i in 0..1000 {
            let v = SimilarityScore::from_unit(i as f64 / 1000.0, 70, 100)
                .unwrap()
                .value();
            assert!((70..=100).contains(&v), "範囲外: {}", v);
        }
    }

    #[test]
    fn test_from_unit_rejects_bad_range() {
        assert!(SimilarityScore::from_unit(0.5, 90, 80).is_err());
        assert!(SimilarityScore::from_unit(0.5, 70, 101).is_err());
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(score(87).to_string(), "87%");
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&score(72)).unwrap(), "72");
        assert!(serde_json::from_str::<SimilarityScore>("150").is_err());
    }
}
