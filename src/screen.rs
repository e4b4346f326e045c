//! 画面状態
//!
//! 非同期完了から直接フィールドを書き換えるのではなく、イベントを単一の
//! 状態保有者に適用して遷移を決める。画像・結果・読込中の組合せは常に
//! 4状態のどれか1つに正規化される。

use crate::api::Analysis;
use crate::error::{LuminusError, Result};
use std::path::{Path, PathBuf};

/// 画面の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    /// 画像未選択
    #[default]
    Empty,
    /// 画像選択済み・結果なし
    Picked { image: PathBuf },
    /// 送信中
    Loading { image: PathBuf },
    /// 結果表示中
    Ready { image: PathBuf, analysis: Analysis },
}

/// 状態遷移イベント
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// 画像が選択された。既存の結果は破棄される
    ImagePicked(PathBuf),
    /// 送信が開始された
    SubmitStarted,
    /// 送信が成功した
    SubmitSucceeded(Analysis),
    /// 送信が失敗した
    SubmitFailed,
}

impl ScreenState {
    /// 選択中の画像
    pub fn image(&self) -> Option<&Path> {
        match self {
            ScreenState::Empty => None,
            ScreenState::Picked { image }
            | ScreenState::Loading { image }
            | ScreenState::Ready { image, .. } => Some(image),
        }
    }

    /// 表示中の結果
    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            ScreenState::Ready { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading { .. })
    }

    /// 送信前の画像チェック。未選択ならリクエストを出さずにエラーを返す
    pub fn require_image(&self) -> Result<&Path> {
        self.image().ok_or(LuminusError::NoImageSelected)
    }

    /// イベントを適用して次状態へ遷移する
    ///
    /// 成功イベントは結果の格納と読込中の解除を1遷移で行う。
    /// 起こり得ない組合せ（画像未選択での送信など）は現状維持。
    pub fn apply(&mut self, event: ScreenEvent) {
        *self = match (std::mem::take(self), event) {
            // 画像選択は常に以前の結果を破棄する
            (_, ScreenEvent::ImagePicked(image)) => ScreenState::Picked { image },

            (
                ScreenState::Picked { image }
                | ScreenState::Loading { image }
                | ScreenState::Ready { image, .. },
                ScreenEvent::SubmitStarted,
            ) => ScreenState::Loading { image },

            (ScreenState::Loading { image }, ScreenEvent::SubmitSucceeded(analysis)) => {
                ScreenState::Ready { image, analysis }
            }

            (ScreenState::Loading { image }, ScreenEvent::SubmitFailed) => {
                ScreenState::Picked { image }
            }

            (state, _) => state,
        };
    }
}
