/// 挨拶HTTP Lambdaエントリポイント
///
/// Lambda Function URL経由のHTTPリクエストを処理し、
/// メソッド・パスに関係なく固定の挨拶JSONを返す。
use backend::application::HelloHandler;
use backend::infrastructure::init_logging;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("挨拶HTTP Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// # Arguments
/// * `request` - HTTPリクエスト（ログ出力以外に使用しない）
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    debug!(method = %request.method(), path = request.uri().path(), "HTTPリクエスト受信");

    let response = HelloHandler::new().handle_http()?;

    debug!(status_code = response.status().as_u16(), "HTTPレスポンス送信");

    Ok(response)
}
