//! 解析送信モジュール
//!
//! 選択中の画像をモードに応じたエンドポイントへ送信し、
//! レスポンスを結果レコード（Analysis）に組み立てる。

mod http;
mod types;

pub use http::HttpClient;
pub use types::{Analysis, Description, ExtractedText, ObjectLabel, Recognition, WebEntity};

use crate::error::Result;
use crate::mode::{Action, Mode, ModelVariant};

/// バックエンド呼び出しの境界。テストではフェイク実装に差し替える
#[allow(async_fn_in_trait)]
pub trait AnalysisBackend {
    /// `POST /analisar?modo=<variant>` への画像アップロード
    async fn analyze(&self, variant: ModelVariant, image: &[u8]) -> Result<serde_json::Value>;

    /// `POST /ler-texto` への画像アップロード
    async fn read_text(&self, image: &[u8]) -> Result<ExtractedText>;
}

/// 画像をモードに応じて送信し、結果レコードを返す
///
/// `tudo` は `/analisar` と `/ler-texto` を同時に1回ずつ呼び、
/// `/analisar` のレスポンスを認識・説明の両フィールドに使い回す。
/// どちらかが失敗したら全体を失敗にする（部分結果は返さない）。
pub async fn submit<B: AnalysisBackend>(
    backend: &B,
    mode: Mode,
    image: &[u8],
) -> Result<Analysis> {
    match mode.action {
        Action::Recognize => {
            let value = backend.analyze(mode.variant, image).await?;
            Ok(Analysis::Recognition(Recognition::from_value(value)))
        }

        Action::Describe => {
            let value = backend.analyze(mode.variant, image).await?;
            Ok(Analysis::Description(Description::from_value(value)))
        }

        Action::ReadText => {
            let text = backend.read_text(image).await?;
            Ok(Analysis::Text(text))
        }

        Action::All => {
            let (value, text) = tokio::try_join!(
                backend.analyze(mode.variant, image),
                backend.read_text(image),
            )?;

            Ok(Analysis::Full {
                recognition: Recognition::from_value(value.clone()),
                description: Description::from_value(value),
                text,
            })
        }
    }
}
