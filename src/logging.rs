use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（標準エラー出力）
///
/// `RUST_LOG` が優先。未設定時は warn、`--verbose` で debug。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
