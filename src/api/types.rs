//! バックエンドのレスポンス型定義
//!
//! ワイヤ上のフィールド名はバックエンド契約（ポルトガル語）のまま。
//! Rust側のフィールド名には `#[serde(rename)]` で対応付ける。

use serde::{Deserialize, Serialize};

/// 検出されたオブジェクト（ラベルと信頼度）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLabel {
    #[serde(rename = "objeto")]
    pub label: String,

    #[serde(rename = "confianca", default)]
    pub confidence: f64,
}

/// Web参照エンティティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEntity {
    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(default)]
    pub score: f64,
}

/// 認識結果
///
/// 期待形はオブジェクト配列だが、バックエンドは別形を返すことがある。
/// その場合は生JSONのまま保持し、表示側でダンプする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recognition {
    Objects(Vec<ObjectLabel>),
    Raw(serde_json::Value),
}

impl Recognition {
    /// レスポンスJSONから変換（期待形でなければ `Raw` に落ちる）
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value::<Vec<ObjectLabel>>(value.clone()) {
            Ok(objects) => Recognition::Objects(objects),
            Err(_) => Recognition::Raw(value),
        }
    }

    /// 先頭の検出ラベル
    pub fn first_label(&self) -> Option<&str> {
        match self {
            Recognition::Objects(objects) => objects.first().map(|o| o.label.as_str()),
            Recognition::Raw(_) => None,
        }
    }
}

/// 説明結果（ラベル一覧とWeb参照）
///
/// どちらのリストも欠けていることがあるため空をデフォルトにする
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub labels: Vec<ObjectLabel>,
    pub web_entities: Vec<WebEntity>,
}

impl Description {
    /// レスポンスJSONから変換（期待形でなければ空の説明になる）
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// テキスト抽出結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    #[serde(rename = "texto")]
    pub text: String,
}

/// 1回の送信で得られる解析結果
///
/// モードごとに保持するフィールドが決まる。前のモードのフィールドが
/// 残る組合せは表現できない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Analysis {
    Recognition(Recognition),
    Description(Description),
    Text(ExtractedText),
    Full {
        recognition: Recognition,
        description: Description,
        text: ExtractedText,
    },
}
