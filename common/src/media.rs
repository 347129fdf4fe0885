//! メディアファイル抽象
//!
//! ブラウザの `File` とローカルファイルを同じセッション型で扱うためのトレイト。

use serde::{Deserialize, Serialize};

const VIDEO_PREFIX: &str = "video/";

/// 拡張子 → MIMEタイプ
const VIDEO_EXTENSIONS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("ogg", "video/ogg"),
    ("ogv", "video/ogg"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
];

pub trait MediaFile {
    fn name(&self) -> String;
    fn media_type(&self) -> String;
    fn size(&self) -> u64;

    fn is_video(&self) -> bool {
        is_video_media_type(&self.media_type())
    }
}

/// ネイティブ側・テスト用のファイル記述子
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl VideoFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    /// ファイル名の拡張子からMIMEタイプを決める
    pub fn from_file_name(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let media_type = media_type_for_file_name(&name).to_string();
        Self { name, media_type, size }
    }
}

impl MediaFile for VideoFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

pub fn is_video_media_type(media_type: &str) -> bool {
    media_type.starts_with(VIDEO_PREFIX)
}

/// 不明な拡張子は `application/octet-stream`
pub fn media_type_for_file_name(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "application/octet-stream",
    };
    VIDEO_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_media_type() {
        assert!(is_video_media_type("video/mp4"));
        assert!(is_video_media_type("video/webm"));
        assert!(!is_video_media_type("image/png"));
        assert!(!is_video_media_type(""));
        // 大文字は video/ とみなさない
        assert!(!is_video_media_type("Video/mp4"));
    }

    #[test]
    fn test_media_type_for_file_name() {
        assert_eq!(media_type_for_file_name("squat.mp4"), "video/mp4");
        assert_eq!(media_type_for_file_name("SQUAT.MOV"), "video/quicktime");
        assert_eq!(media_type_for_file_name("clip.ogv"), "video/ogg");
        assert_eq!(media_type_for_file_name("notes.txt"), "application/octet-stream");
        assert_eq!(media_type_for_file_name("noext"), "application/octet-stream");
    }

    #[test]
    fn test_video_file_from_file_name() {
        let file = VideoFile::from_file_name("a.webm", 42);
        assert_eq!(file.media_type, "video/webm");
        assert!(file.is_video());
        assert!(!VideoFile::from_file_name("a.jpg", 1).is_video());
    }
}
