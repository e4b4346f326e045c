use clap::Parser;
use dialoguer::Select;
use luminus::cli::{Cli, Commands};
use luminus::config::Config;
use luminus::error::{LuminusError, Result};
use luminus::mode::Mode;
use luminus::screen::{ScreenEvent, ScreenState};
use luminus::{api, picker, render};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, mode, json } => {
            println!("🔍 Luminus - 画像解析\n");

            let config = resolve_backend(&config, cli.base_url.as_deref());

            if !image.exists() {
                return Err(LuminusError::FileNotFound(image.display().to_string()));
            }

            if cli.verbose {
                println!("  画像: {}", image.display());
                println!("  モード: {}", mode);
                println!("  バックエンド: {}\n", config.base_url);
            }

            let client = api::HttpClient::new(&config)?;
            let bytes = read_image(&image)?;

            let spinner = spinner("解析中...");
            let result = api::submit(&client, mode, &bytes).await;
            spinner.finish_and_clear();

            let analysis = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", render::render(&analysis));
            }

            println!("\n✅ 解析完了");
        }

        Commands::Interactive { folder } => {
            println!("🔍 Luminus - 対話モード\n");

            let config = resolve_backend(&config, cli.base_url.as_deref());
            let client = api::HttpClient::new(&config)?;
            let mut state = ScreenState::default();
            let mut mode = Mode::default();

            loop {
                match state.image() {
                    Some(image) => println!("画像: {}", image.display()),
                    None => println!("画像: （未選択）"),
                }

                let actions = [
                    "画像を選択".to_string(),
                    format!("モード: {}", mode.label()),
                    "送信".to_string(),
                    "終了".to_string(),
                ];

                let choice = Select::new()
                    .items(&actions)
                    .default(0)
                    .interact_opt()
                    .map_err(|e| LuminusError::Prompt(e.to_string()))?;

                match choice {
                    Some(0) => {
                        if let Some(image) = picker::pick_image(&folder)? {
                            println!("  → {}\n", image.display());
                            state.apply(ScreenEvent::ImagePicked(image));
                        }
                    }

                    Some(1) => {
                        if let Some(selected) = picker::pick_mode(mode)? {
                            mode = selected;
                        }
                    }

                    Some(2) => {
                        let image = match state.require_image() {
                            Ok(image) => image.to_path_buf(),
                            Err(e) => {
                                println!("⚠ {}\n", e);
                                continue;
                            }
                        };

                        let bytes = match read_image(&image) {
                            Ok(bytes) => bytes,
                            Err(e) => {
                                println!("✗ {}\n", e);
                                continue;
                            }
                        };

                        state.apply(ScreenEvent::SubmitStarted);

                        let spinner = spinner("解析中...");
                        let result = api::submit(&client, mode, &bytes).await;
                        spinner.finish_and_clear();

                        match result {
                            Ok(analysis) => {
                                state.apply(ScreenEvent::SubmitSucceeded(analysis));
                                if let Some(analysis) = state.analysis() {
                                    println!("{}\n", render::render(analysis));
                                }
                            }
                            Err(e) => {
                                state.apply(ScreenEvent::SubmitFailed);
                                if cli.verbose {
                                    eprintln!("  エラー詳細: {}", e);
                                }
                                println!("✗ リクエストに失敗しました。サーバを確認して再試行してください\n");
                            }
                        }
                    }

                    _ => break,
                }
            }
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ バックエンドURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// バックエンドURLの優先順位: --base-url > LUMINUS_BASE_URL > 設定ファイル
fn resolve_backend(config: &Config, cli_base_url: Option<&str>) -> Config {
    let mut resolved = config.clone();
    resolved.base_url = match cli_base_url {
        Some(url) => url.to_string(),
        None => config.get_base_url(),
    };
    resolved
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| LuminusError::ImageLoad(format!("{}: {}", path.display(), e)))
}

fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
