/// 挨拶Lambdaエントリポイント
///
/// API Gatewayプロキシ統合から呼び出され、固定の挨拶レスポンスを返す。
/// イベントは`serde_json::Value`として受け取るため、形式を問わず処理できる。
use backend::application::HelloHandler;
use backend::domain::ProxyResponse;
use backend::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("挨拶Lambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 戻り値
/// 常にステータス200のプロキシレスポンス
async fn handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "リクエスト受信");

    let response = HelloHandler::new().handle(&payload, &context);

    debug!(
        request_id = %context.request_id,
        status_code = response.status_code,
        "レスポンス送信"
    );

    Ok(response)
}
