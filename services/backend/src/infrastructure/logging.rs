/// ログ基盤モジュール
///
/// Lambda環境向けのJSON構造化ログ設定を提供する。
/// 既定のinfoレベルで出力されるのは初期化時のログのみで、
/// 呼び出しごとのログはdebugレベルで出力する。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

static INIT: Once = Once::new();

/// 既定のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// JSON形式のサブスクライバーを構築する
///
/// イベントのフィールドはトップレベルに展開され、`target`・ファイル名・行番号が付与される。
pub fn json_subscriber<W>(
    env_filter: EnvFilter,
    make_writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(make_writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false);

    tracing_subscriber::registry().with(env_filter).with(json_layer)
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// `RUST_LOG`でフィルタリングし、未設定時は`DEFAULT_LOG_LEVEL`。
/// 複数回呼び出しても初期化は最初の1回のみ。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        // 既存のサブスクライバーがあれば何もしない
        let _ = json_subscriber(env_filter, std::io::stdout).try_init();
    });
}
