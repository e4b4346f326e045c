//! HTTPトランスポート
//!
//! 画像は multipart/form-data でアップロードする。フィールド名 `imagem`、
//! ファイル名 `foto.jpg`、MIME `image/jpeg` はバックエンド契約で固定。

use super::types::ExtractedText;
use super::AnalysisBackend;
use crate::config::Config;
use crate::error::{LuminusError, Result};
use crate::mode::ModelVariant;
use std::time::Duration;

pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LuminusError::Transport(format!("クライアント初期化失敗: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn image_form(image: &[u8]) -> Result<reqwest::multipart::Form> {
        let part = reqwest::multipart::Part::bytes(image.to_vec())
            .file_name("foto.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| LuminusError::Transport(e.to_string()))?;

        Ok(reqwest::multipart::Form::new().part("imagem", part))
    }

    /// 画像をPOSTし、レスポンスボディをJSONとして返す
    async fn post_image(&self, url: String, image: &[u8]) -> Result<serde_json::Value> {
        let form = Self::image_form(image)?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LuminusError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LuminusError::Transport(format!(
                "HTTP {} ({})",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LuminusError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| LuminusError::ApiParse(e.to_string()))
    }
}

impl AnalysisBackend for HttpClient {
    async fn analyze(&self, variant: ModelVariant, image: &[u8]) -> Result<serde_json::Value> {
        let url = format!("{}/analisar?modo={}", self.base_url, variant.query_value());
        self.post_image(url, image).await
    }

    async fn read_text(&self, image: &[u8]) -> Result<ExtractedText> {
        let url = format!("{}/ler-texto", self.base_url);
        let value = self.post_image(url, image).await?;
        serde_json::from_value(value).map_err(|e| LuminusError::ApiParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> Config {
        Config {
            base_url: base_url.to_string(),
            timeout_seconds: 60,
        }
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = HttpClient::new(&test_config("http://192.168.1.128:5000/")).unwrap();
        assert_eq!(client.base_url, "http://192.168.1.128:5000");
    }

    #[test]
    fn test_image_form_builds() {
        let form = HttpClient::image_form(b"dummy");
        assert!(form.is_ok());
    }
}
