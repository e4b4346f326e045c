use crate::mode::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "luminus")]
#[command(about = "画像AI解析クライアント（物体認識・説明・テキスト抽出）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を1枚送信して解析結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析モード（例: gemini_descrever, vision_tudo）
        #[arg(short, long, default_value = "gemini_descrever")]
        mode: Mode,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話モード（画像選択→モード選択→送信を繰り返す）
    Interactive {
        /// 画像フォルダのパス（省略時はカレント）
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// リクエストタイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
