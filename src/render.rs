//! 結果表示
//!
//! 結果レコードを表示テキストに変換する純粋関数。同じ入力からは常に
//! 同じ出力になる。

use crate::api::{Analysis, Description, ExtractedText, Recognition};

/// 信頼度・スコアを最近傍のパーセントに丸める
fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// 結果レコード全体を表示用テキストにする
pub fn render(analysis: &Analysis) -> String {
    render_lines(analysis).join("\n")
}

/// 結果レコードを表示行に変換する
pub fn render_lines(analysis: &Analysis) -> Vec<String> {
    match analysis {
        Analysis::Recognition(recognition) => recognition_lines(recognition),
        Analysis::Description(description) => description_lines(description),
        Analysis::Text(text) => text_lines(text),
        Analysis::Full { recognition, description, text } => {
            let mut lines = recognition_lines(recognition);
            lines.extend(description_lines(description));
            lines.extend(text_lines(text));
            lines
        }
    }
}

fn recognition_lines(recognition: &Recognition) -> Vec<String> {
    let mut lines = vec!["認識結果:".to_string()];

    // 期待形なら先頭ラベルのみ。そうでなければ生JSONをダンプする
    match recognition.first_label() {
        Some(label) => lines.push(label.to_string()),
        None => lines.push(raw_dump(recognition)),
    }

    lines
}

fn raw_dump(recognition: &Recognition) -> String {
    let value = match recognition {
        Recognition::Raw(value) => value.clone(),
        Recognition::Objects(objects) => {
            serde_json::to_value(objects).unwrap_or(serde_json::Value::Null)
        }
    };
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

fn description_lines(description: &Description) -> Vec<String> {
    let mut lines = vec!["検出オブジェクト:".to_string()];
    for item in &description.labels {
        lines.push(format!("• {} ({}%)", item.label, percent(item.confidence)));
    }

    lines.push("Web参照:".to_string());
    for entity in &description.web_entities {
        lines.push(format!("• {} ({}%)", entity.description, percent(entity.score)));
    }

    lines
}

fn text_lines(text: &ExtractedText) -> Vec<String> {
    vec!["検出テキスト:".to_string(), text.text.clone()]
}
