//! 擬似バックエンド呼び出し
//!
//! 実際の送信は行わない。FormDataを組み立ててログに残し、固定時間待つ。

mod form_data;
mod simulated;

pub use form_data::build_form_data;
pub use simulated::{run_comparison, run_training};
