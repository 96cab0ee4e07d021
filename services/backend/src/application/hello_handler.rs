// 挨拶レスポンス生成ハンドラー
//
// 入力イベントとコンテキストを一切参照せず、固定の成功レスポンスを返す。
// 副作用（ログ出力・外部呼び出し・状態変更）は持たない。

use crate::domain::{ProxyResponse, GREETING_BODY, STATUS_OK};
use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::{Body, Response};
use lambda_runtime::Context;
use serde_json::Value;
use thiserror::Error;

/// ハンドラーのエラー型
#[derive(Debug, Error)]
pub enum HelloHandlerError {
    /// HTTPレスポンスの構築に失敗
    #[error("Failed to build HTTP response: {0}")]
    ResponseBuild(#[from] lambda_http::http::Error),
}

/// 挨拶レスポンス生成ハンドラー
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloHandler;

impl HelloHandler {
    /// 新しいハンドラーを作成
    pub fn new() -> Self {
        Self
    }

    /// 呼び出しを処理してプロキシレスポンスを生成
    ///
    /// # Arguments
    /// * `_event` - Lambdaイベント（参照しない。マップ以外の値も受け付ける）
    /// * `_context` - Lambdaコンテキスト（参照しない）
    ///
    /// # Returns
    /// CORSヘッダー付きのステータス200レスポンス
    pub fn handle(&self, _event: &Value, _context: &Context) -> ProxyResponse {
        ProxyResponse::ok()
    }

    /// 同じ内容をHTTPレスポンスとして生成（Function URL用）
    ///
    /// `HeaderMap`はヘッダー名を小文字で保持するため、名前の大文字小文字は保持されない。
    /// 大文字小文字を含めて固定する必要がある場合は`handle`を使う。
    pub fn handle_http(&self) -> Result<Response<Body>, HelloHandlerError> {
        let mut response = Response::builder()
            .status(STATUS_OK)
            .body(Body::Text(GREETING_BODY.to_string()))?;

        *response.headers_mut() = Self::build_cors_headers();

        Ok(response)
    }

    /// CORSヘッダーを生成
    ///
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    /// - Access-Control-Allow-Headers: Content-Type
    /// - Access-Control-Allow-Methods: GET,POST,OPTIONS
    pub fn build_cors_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        );

        headers
    }
}
