//! 画像・モード選択
//!
//! フォルダ直下の画像ファイルを列挙し、対話的に選ぶ。
//! キャンセル（Esc）は `None` を返し、呼び出し側の状態は変わらない。

use crate::error::{LuminusError, Result};
use crate::mode::{Mode, ALL_MODES};
use dialoguer::Select;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// フォルダ直下の画像ファイルを列挙する（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(LuminusError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str) {
                images.push(path.to_path_buf());
            }
        }
    }

    images.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    Ok(images)
}

/// フォルダから画像を1枚選ぶ。キャンセル時は `None`
pub fn pick_image(folder: &Path) -> Result<Option<PathBuf>> {
    let images = scan_folder(folder)?;

    if images.is_empty() {
        return Err(LuminusError::NoImagesFound(folder.display().to_string()));
    }

    let items: Vec<String> = images
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect();

    let selection = Select::new()
        .with_prompt("画像を選択")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| LuminusError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| images[i].clone()))
}

/// 解析モードを選ぶ。キャンセル時は `None`
pub fn pick_mode(current: Mode) -> Result<Option<Mode>> {
    let items: Vec<String> = ALL_MODES.iter().map(|m| m.label()).collect();
    let default = ALL_MODES.iter().position(|&m| m == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("解析モードを選択")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|e| LuminusError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| ALL_MODES[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(LuminusError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let temp_dir = std::env::temp_dir().join("luminus-test-empty");
        fs::create_dir_all(&temp_dir).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert!(result.is_empty());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_folder_filters_non_images() {
        let temp_dir = std::env::temp_dir().join("luminus-test-filter");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("foto1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("foto2.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("notas.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert_eq!(result.len(), 2);

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_folder_sorted_by_filename() {
        let temp_dir = std::env::temp_dir().join("luminus-test-sort");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("c.jpg")).unwrap();
        File::create(temp_dir.join("a.jpg")).unwrap();
        File::create(temp_dir.join("b.jpg")).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        let names: Vec<_> = result
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);

        fs::remove_dir_all(&temp_dir).ok();
    }
}
