use clap::Parser;
use sector_profiler::{batch, cli, config, error, interactive, logging, lookup, render};
use sector_profiler::common::SectorClassifier;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use lookup::Profiler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut config = Config::load()?;

    if cli.no_enrich {
        config.enrichment = false;
    }

    let table = lookup::load_table(cli.table.as_deref())?;

    match cli.command {
        Commands::Lookup { name, json, candidates } => {
            let profiler = Profiler::from_config(SectorClassifier::new(table, config.match_policy()), &config)?;
            let outcome = profiler.lookup(&name).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render::render_outcome(&name, &outcome));
            }

            if candidates {
                let all = profiler.classifier().classify_all(&name);
                println!("{}", render::render_candidates(&all));
            }
        }

        Commands::Interactive => {
            let profiler = Profiler::from_config(SectorClassifier::new(table, config.match_policy()), &config)?;
            interactive::run_interactive(&profiler).await?;
        }

        Commands::Batch { input, output } => {
            println!("📋 sector-profiler - 一括照会\n");

            let profiler = Profiler::from_config(SectorClassifier::new(table, config.match_policy()), &config)?;
            let report = batch::run_batch(&profiler, &input, &output).await?;

            println!("✔ {}件を照会", report.results.len());
            println!("  一致: {}", report.matched);
            println!("  外部参照のみ: {}", report.enriched);
            println!("  該当なし: {}", report.unmatched);
            println!("✔ 結果を保存: {}", output.display());
        }

        Commands::Sectors { keywords } => {
            println!("照合方式: {}\n", config.match_policy());
            print!("{}", render::render_sector_table(&table.sectors, keywords));
            println!("\n手動マッピング: {}件", table.overrides.len());
        }

        Commands::Config { show, set_threshold, set_policy, set_registry_token, set_timeout } => {
            let mut changed = false;

            if let Some(mode) = set_policy {
                config.match_mode = mode;
                changed = true;
                println!("✔ 照合方式を設定しました: {}", mode);
            }

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                changed = true;
                println!("✔ 閾値を設定しました: {}", threshold);
            }

            if let Some(token) = set_registry_token {
                config.set_registry_token(token);
                changed = true;
                println!("✔ レジストリAPIトークンを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました: {}秒", seconds);
            }

            if changed {
                // --no-enrich は一時的な指定なので保存しない
                let mut saved = Config::load()?;
                saved.match_mode = config.match_mode;
                saved.threshold = config.threshold;
                saved.registry_api_token = config.registry_api_token.clone();
                saved.timeout_seconds = config.timeout_seconds;
                saved.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  照合方式: {}", config.match_policy());
                println!("  外部参照: {}", if config.enrichment { "有効" } else { "無効" });
                println!("  ナレッジベース: {}", config.knowledge_base_url);
                println!("  企業レジストリ: {}", config.registry_url);
                println!("  レジストリAPIトークン: {}", if config.get_registry_token().is_some() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
