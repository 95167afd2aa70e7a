// 呼び出しサマリードキュメント
//
// プロキシレスポンスのボディとしてゲートウェイ経由で呼び出し元に返す
// JSONドキュメントを表現するドメイン層コンポーネント。

use serde::{Deserialize, Serialize};

/// 呼び出しサマリードキュメント
///
/// 1回の呼び出しに関する情報をまとめたレスポンスボディ。
/// 全フィールドが必須のため、シリアライズ結果が空になることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationDocument {
    /// 設定されたレスポンスメッセージ
    pub message: String,
    /// リクエストのHTTPメソッド
    pub method: String,
    /// リクエストパス
    pub path: String,
    /// Lambda実行コンテキストのリクエストID
    pub request_id: String,
    /// レスポンス生成時刻（RFC 3339形式）
    pub timestamp: String,
}

impl InvocationDocument {
    /// 新しいInvocationDocumentを作成
    pub fn new(
        message: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        request_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            method: method.into(),
            path: path.into(),
            request_id: request_id.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 全フィールドがJSONに含まれる
    #[test]
    fn test_serializes_all_fields() {
        let doc = InvocationDocument::new(
            "hello",
            "GET",
            "/",
            "req-12345",
            "2026-01-01T00:00:00+00:00",
        );

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["method"], "GET");
        assert_eq!(parsed["path"], "/");
        assert_eq!(parsed["request_id"], "req-12345");
        assert_eq!(parsed["timestamp"], "2026-01-01T00:00:00+00:00");
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }

    /// シリアライズとデシリアライズで値が保持される
    #[test]
    fn test_roundtrip() {
        let doc = InvocationDocument::new("msg", "POST", "/items", "req-1", "ts");

        let json = serde_json::to_string(&doc).unwrap();
        let restored: InvocationDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(doc, restored);
    }
}
