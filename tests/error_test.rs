//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use luminus::error::LuminusError;
use luminus::picker;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = picker::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, LuminusError::FolderNotFound(_)));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = picker::scan_folder(dir.path());

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 画像のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("notas.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("dados.json"), "{}").unwrap();

    let result = picker::scan_folder(dir.path());
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// LuminusErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LuminusError::Config("テスト設定エラー".to_string()),
        LuminusError::NoImageSelected,
        LuminusError::FileNotFound("foto.jpg".to_string()),
        LuminusError::FolderNotFound("/path/to/folder".to_string()),
        LuminusError::NoImagesFound("/path/to/folder".to_string()),
        LuminusError::ImageLoad("foto.jpg".to_string()),
        LuminusError::Transport("connection refused".to_string()),
        LuminusError::ApiParse("unexpected token".to_string()),
        LuminusError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// NoImageSelectedエラーのメッセージ確認
#[test]
fn test_no_image_selected_message() {
    let err = LuminusError::NoImageSelected;
    let display = format!("{}", err);

    assert!(display.contains("画像が選択されていません"));
    assert!(display.contains("先に画像を選択"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = LuminusError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LuminusError = io_err.into();

    assert!(matches!(err, LuminusError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LuminusError = json_err.into();

    assert!(matches!(err, LuminusError::JsonParse(_)));
}
