//! 解析モード定義
//!
//! モードは (モデル種別 × アクション) の組。文字列表現はバックエンド画面の
//! キー形式 `<モデル>_<アクション>` を踏襲する（例: `gemini_descrever`）。

/// バックエンドのモデル種別
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelVariant {
    Vision,
    Gemini,
}

impl ModelVariant {
    /// `/analisar` の `modo` クエリパラメータ値
    pub fn query_value(&self) -> &'static str {
        match self {
            ModelVariant::Vision => "vision",
            ModelVariant::Gemini => "gemini",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ModelVariant::Vision => "Vision",
            ModelVariant::Gemini => "Gemini",
        }
    }
}

/// 解析アクション
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// 物体認識
    Recognize,
    /// ラベル・Web参照つきの説明
    Describe,
    /// テキスト抽出（OCR）
    ReadText,
    /// 上記3つをまとめて実行
    All,
}

impl Action {
    /// モードキーに使うアクション名
    pub fn key(&self) -> &'static str {
        match self {
            Action::Recognize => "reconhecer",
            Action::Describe => "descrever",
            Action::ReadText => "lerTexto",
            Action::All => "tudo",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Action::Recognize => "物体認識",
            Action::Describe => "説明",
            Action::ReadText => "テキスト抽出",
            Action::All => "すべて",
        }
    }
}

/// 解析モード（モデル種別 × アクション）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mode {
    pub variant: ModelVariant,
    pub action: Action,
}

/// 選択可能な全モード（ピッカー表示順）
pub const ALL_MODES: [Mode; 8] = [
    Mode { variant: ModelVariant::Vision, action: Action::Recognize },
    Mode { variant: ModelVariant::Vision, action: Action::Describe },
    Mode { variant: ModelVariant::Vision, action: Action::ReadText },
    Mode { variant: ModelVariant::Vision, action: Action::All },
    Mode { variant: ModelVariant::Gemini, action: Action::Recognize },
    Mode { variant: ModelVariant::Gemini, action: Action::Describe },
    Mode { variant: ModelVariant::Gemini, action: Action::ReadText },
    Mode { variant: ModelVariant::Gemini, action: Action::All },
];

impl Mode {
    /// モードキー（例: `vision_lerTexto`）
    pub fn key(&self) -> String {
        format!("{}_{}", self.variant.query_value(), self.action.key())
    }

    /// ピッカー表示用ラベル（例: `説明 (Gemini)`）
    pub fn label(&self) -> String {
        format!("{} ({})", self.action.label(), self.variant.label())
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode {
            variant: ModelVariant::Gemini,
            action: Action::Describe,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((variant, action)) = s.split_once('_') else {
            return Err(format!(
                "Unknown mode: {}. Use <vision|gemini>_<reconhecer|descrever|lerTexto|tudo>",
                s
            ));
        };

        let variant = match variant.to_lowercase().as_str() {
            "vision" => ModelVariant::Vision,
            "gemini" => ModelVariant::Gemini,
            _ => return Err(format!("Unknown model: {}. Use vision or gemini", variant)),
        };

        let action = match action.to_lowercase().as_str() {
            "reconhecer" => Action::Recognize,
            "descrever" => Action::Describe,
            "lertexto" => Action::ReadText,
            "tudo" => Action::All,
            _ => {
                return Err(format!(
                    "Unknown action: {}. Use reconhecer, descrever, lerTexto, or tudo",
                    action
                ))
            }
        };

        Ok(Mode { variant, action })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_mode_keys() {
        for mode in ALL_MODES {
            let parsed: Mode = mode.key().parse().expect("モードキーのパース失敗");
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: Mode = "GEMINI_LERTEXTO".parse().unwrap();
        assert_eq!(parsed.variant, ModelVariant::Gemini);
        assert_eq!(parsed.action, Action::ReadText);
    }

    #[test]
    fn test_parse_rejects_unknown_model() {
        let result = "azure_descrever".parse::<Mode>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown model"));
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        let result = "vision_resumir".parse::<Mode>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown action"));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!("descrever".parse::<Mode>().is_err());
    }

    #[test]
    fn test_default_mode() {
        let mode = Mode::default();
        assert_eq!(mode.key(), "gemini_descrever");
    }

    #[test]
    fn test_display_roundtrip() {
        let mode = Mode { variant: ModelVariant::Vision, action: Action::ReadText };
        assert_eq!(mode.to_string(), "vision_lerTexto");
        let parsed: Mode = mode.to_string().parse().unwrap();
        assert_eq!(parsed, mode);
    }

    #[test]
    fn test_query_value() {
        assert_eq!(ModelVariant::Vision.query_value(), "vision");
        assert_eq!(ModelVariant::Gemini.query_value(), "gemini");
    }

    #[test]
    fn test_label_contains_variant() {
        let mode = Mode { variant: ModelVariant::Gemini, action: Action::Describe };
        assert_eq!(mode.label(), "説明 (Gemini)");
    }
}
