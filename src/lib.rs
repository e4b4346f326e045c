//! Luminus クライアントライブラリ
//!
//! CLIと統合テストで共有する送信・画面状態・表示ロジック

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mode;
pub mod picker;
pub mod render;
pub mod screen;

pub use api::{Analysis, AnalysisBackend, HttpClient};
pub use config::Config;
pub use error::{LuminusError, Result};
pub use mode::{Action, Mode, ModelVariant};
pub use screen::{ScreenEvent, ScreenState};
