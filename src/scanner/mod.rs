use crate::error::{AppError, Result};
use exercise_video_common::VideoFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 引数のパスを展開する。フォルダは直下のみ、ファイル名順
///
/// 動画以外もそのまま返す（絞り込みはセッション側で行う）
pub fn scan_paths(paths: &[PathBuf]) -> Result<Vec<VideoFile>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path)?);
        } else {
            files.push(describe(path)?);
        }
    }
    Ok(files)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<VideoFile>> {
    if !folder.exists() {
        return Err(AppError::FileNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            files.push(describe(entry.path())?);
        }
    }

    log::debug!("{}: {}件のファイルを検出", folder.display(), files.len());
    Ok(files)
}

/// MIMEタイプは拡張子から決める
pub fn describe(path: &Path) -> Result<VideoFile> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();
    log::trace!("{} ({} bytes)", name, size);

    Ok(VideoFile::from_file_name(name, size))
}
