use clap::{Parser, Subcommand};
use sector_profiler_common::MatchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sector-profiler")]
#[command(about = "組織名からセクター・規制要件・推奨サービスを判定", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カスタムセクターテーブル（JSON）
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// 外部参照（ナレッジベース・企業レジストリ）を行わない
    #[arg(long, global = true)]
    pub no_enrich: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 組織名を1件照会
    Lookup {
        /// 組織名
        #[arg(required = true)]
        name: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 閾値を満たす全セクター候補を表示
        #[arg(long)]
        candidates: bool,
    },

    /// 対話的に組織名を照会
    Interactive,

    /// 組織名リスト（1行1件）を一括照会してJSONを出力
    Batch {
        /// 入力テキストファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル
        #[arg(short, long, default_value = "lookup-results.json")]
        output: PathBuf,
    },

    /// セクターテーブルを表示
    Sectors {
        /// キーワードも表示
        #[arg(short, long)]
        keywords: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 照合の閾値 (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        set_threshold: Option<u8>,

        /// 照合方式 (global-max/first-above)
        #[arg(long)]
        set_policy: Option<MatchMode>,

        /// 企業レジストリのAPIトークン
        #[arg(long)]
        set_registry_token: Option<String>,

        /// 外部参照のタイムアウト（秒）
        #[arg(long)]
        set_timeout: Option<u64>,
    },
}
