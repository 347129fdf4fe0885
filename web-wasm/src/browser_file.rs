//! ブラウザの `File` を共通セッションで扱うラッパー

use exercise_video_common::MediaFile;
use web_sys::{File, HtmlInputElement};

#[derive(Debug, Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl MediaFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// `<input type="file">` の選択順でファイルを取り出す（種別の絞り込みはセッション側）
pub fn files_from_input(input: &HtmlInputElement) -> Vec<BrowserFile> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(BrowserFile::from)
        .collect()
}
