// API Gatewayプロキシレスポンス
//
// Lambdaプロキシ統合が期待する statusCode / headers / body の3フィールドのみを持つ。
// aws_lambda_eventsのApiGatewayProxyResponseは multiValueHeaders 等を追加で出力するため使わない。

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::greeting::GREETING_BODY;

/// 成功時のHTTPステータス
pub const STATUS_OK: u16 = 200;

/// レスポンスヘッダー（出力順・大文字小文字を固定）
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET,POST,OPTIONS"),
];

/// 固定ヘッダー集合
///
/// シリアライズ時に `RESPONSE_HEADERS` を定義順のJSONオブジェクトとして出力する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseHeaders;

impl ResponseHeaders {
    /// ヘッダー名と値の組を定義順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        RESPONSE_HEADERS.into_iter()
    }
}

impl Serialize for ResponseHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RESPONSE_HEADERS.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// プロキシレスポンス
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダー
    pub headers: ResponseHeaders,
    /// シリアライズ済みJSONボディ
    pub body: &'static str,
}

impl ProxyResponse {
    /// 固定の成功レスポンスを生成
    pub const fn ok() -> Self {
        Self {
            status_code: STATUS_OK,
            headers: ResponseHeaders,
            body: GREETING_BODY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_ok_serializes_to_proxy_shape() {
        let value = serde_json::to_value(ProxyResponse::ok()).unwrap();

        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {
                    "Content-Type": "application/json",
                    "Access-Control-Allow-Origin": "*",
                    "Access-Control-Allow-Headers": "Content-Type",
                    "Access-Control-Allow-Methods": "GET,POST,OPTIONS"
                },
                "body": "{\"message\": \"Hello from Vision Lab backend!\", \"status\": \"ok\"}"
            })
        );
    }

    /// キーの出力順が固定されている
    #[test]
    fn test_ok_serialized_key_order() {
        let text = serde_json::to_string(&ProxyResponse::ok()).unwrap();

        let expected = concat!(
            r#"{"statusCode":200,"headers":{"#,
            r#""Content-Type":"application/json","#,
            r#""Access-Control-Allow-Origin":"*","#,
            r#""Access-Control-Allow-Headers":"Content-Type","#,
            r#""Access-Control-Allow-Methods":"GET,POST,OPTIONS"},"#,
            r#""body":"{\"message\": \"Hello from Vision Lab backend!\", \"status\": \"ok\"}"}"#,
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_headers_exactly_four_entries() {
        let value = serde_json::to_value(ResponseHeaders).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 4);
        for (name, expected) in RESPONSE_HEADERS {
            assert_eq!(map.get(name), Some(&Value::String(expected.to_string())));
        }
    }
}
