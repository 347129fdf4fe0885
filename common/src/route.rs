//! ルート定義
//!
//! 未知のパスの `/` へのリダイレクトはWeb側のルーターが行う。

use crate::comparison::ComparisonMode;

/// 学習完了ダイアログを閉じたときの遷移先（ルート外なので `/` に戻る）
pub const AFTER_TRAINING_PATH: &str = "/compare";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Upload,
    ComparePretrained,
    CompareReference,
}

impl Route {
    /// ナビゲーションバーの並び順
    pub const NAV: [Route; 3] = [
        Route::Upload,
        Route::ComparePretrained,
        Route::CompareReference,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Upload => "/",
            Route::ComparePretrained => "/compare/pretrained",
            Route::CompareReference => "/compare/reference",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Upload => "Upload Video",
            Route::ComparePretrained => "Compare with Pre-trained Model",
            Route::CompareReference => "Compare with Reference",
        }
    }

    pub fn comparison_mode(&self) -> Option<ComparisonMode> {
        match self {
            Route::Upload => None,
            Route::ComparePretrained => Some(ComparisonMode::Pretrained),
            Route::CompareReference => Some(ComparisonMode::Reference),
        }
    }

    /// 完全一致のみ（末尾スラッシュは無視）
    pub fn match_path(path: &str) -> Option<Route> {
        let normalized = normalize(path);
        Route::NAV.into_iter().find(|r| r.path() == normalized)
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        Route::match_path(current_path) == Some(*self)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::match_path("/"), Some(Route::Upload));
        assert_eq!(Route::match_path("/compare/pretrained"), Some(Route::ComparePretrained));
        assert_eq!(Route::match_path("/compare/reference/"), Some(Route::CompareReference));
        assert_eq!(Route::match_path("/compare/reference?x=1"), Some(Route::CompareReference));
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        assert_eq!(Route::match_path("/unknown/path"), None);
        assert_eq!(Route::match_path("/compare/pretrained/extra"), None);
        // 学習完了後の遷移先はどのルートでもない
        assert_eq!(Route::match_path(AFTER_TRAINING_PATH), None);
    }

    #[test]
    fn test_is_active_exact() {
        assert!(Route::Upload.is_active("/"));
        assert!(!Route::Upload.is_active("/compare/pretrained"));
        assert!(Route::ComparePretrained.is_active("/compare/pretrained"));
        assert!(!Route::ComparePretrained.is_active("/compare/reference"));
        // 未知のパスではどれも強調しない
        assert!(Route::NAV.iter().all(|r| !r.is_active("/nope")));
    }

    #[test]
    fn test_comparison_mode() {
        assert_eq!(Route::Upload.comparison_mode(), None);
        assert_eq!(
            Route::CompareReference.comparison_mode(),
            Some(ComparisonMode::Reference)
        );
    }
}
