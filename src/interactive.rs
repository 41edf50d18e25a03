//! 対話式ルックアップモジュール

use crate::error::{ProfilerError, Result};
use crate::lookup::Profiler;
use crate::render::render_outcome;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 入力が終了コマンドか
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.trim(), "" | "q" | "quit" | "exit")
}

/// 対話式で組織名を照会
pub async fn run_interactive(profiler: &Profiler) -> Result<()> {
    println!("🔍 顧客プロファイリング（サイバーセキュリティ・アドバイザリー）");
    println!("組織名を入力するとセクター・規制要件・推奨サービスを表示します");
    println!("---");
    println!("操作: [Enter]のみ または q で終了");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("組織名")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ProfilerError::Prompt(e.to_string()))?;

        if is_exit_command(&input) {
            println!("終了します");
            break;
        }

        let spinner = lookup_spinner(profiler.has_enrichment());
        let outcome = profiler.lookup(&input).await;
        spinner.finish_and_clear();

        println!("{}", render_outcome(&input, &outcome));
    }

    Ok(())
}

fn lookup_spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("照会中...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
