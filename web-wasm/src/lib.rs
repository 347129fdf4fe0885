//! Exercise Video Trainer Web App (Leptos + WASM)

pub mod app;
mod components;
pub mod api;
pub mod browser_file;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("Exercise Video Trainer 起動");
    leptos::mount::mount_to_body(app::App);
}

/// リリースビルドではフォーム内容などのdebugログを出さない
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_build_profile() {
        let level = log_level();
        assert!(level >= log::Level::Info);
        assert_eq!(level == log::Level::Debug, cfg!(debug_assertions));
    }
}
