// 挨拶ペイロード
//
// レスポンスボディとして返す固定JSONを定義する。
// ボディはコンパイル時定数で、シリアライズ処理が失敗する余地はない。

/// レスポンスボディ（シリアライズ済みJSON）
///
/// 区切り文字は `", "` と `": "`。既存クライアントが受け取っていたバイト列と一致させる。
pub const GREETING_BODY: &str =
    r#"{"message": "Hello from Vision Lab backend!", "status": "ok"}"#;
