//! UIコンポーネント

pub mod navigation_bar;
pub mod upload_page;
pub mod training_complete;
pub mod comparison_page;
pub mod upload_section;
pub mod similarity_result;
