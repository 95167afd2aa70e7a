// プロキシリクエストハンドラー
//
// API Gatewayプロキシ統合のリクエストイベントを受け取り、
// ゲートウェイが要求する形式のレスポンスイベントを構築する。
// リクエストの形状検証は行わない（将来のビジネスロジックの責務）。

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue,
};
use chrono::Utc;
use lambda_runtime::Context;
use thiserror::Error;
use tracing::info;

use crate::domain::{InvocationDocument, ResponseConfig};

/// パスが未指定の場合に使用するデフォルトパス
const DEFAULT_PATH: &str = "/";

/// プロキシハンドラーのエラー型
///
/// ここで捕捉されなかった障害はエントリポイントから
/// Lambdaランタイムへ伝播し、呼び出し失敗として記録される。
#[derive(Debug, Error)]
pub enum ProxyHandlerError {
    /// レスポンスボディのシリアライズに失敗
    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 設定値がHTTPヘッダー値として不正
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

/// プロキシリクエストハンドラー
///
/// コールドスタート時に一度だけ構築され、同一プロセスインスタンスへの
/// 全呼び出しで再利用される。リクエストを変更せず、呼び出しごとに
/// 新しいレスポンスを構築する。
pub struct ProxyHandler {
    /// レスポンス設定
    config: ResponseConfig,
}

impl ProxyHandler {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `config` - レスポンス設定
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    /// プロキシリクエストを処理してレスポンスを生成
    ///
    /// リクエストとLambda実行コンテキストから呼び出しサマリーを構築し、
    /// HTTP 200のJSONレスポンスとして返す。
    ///
    /// # Arguments
    /// * `request` - API Gatewayから受信したプロキシリクエスト
    /// * `context` - Lambda実行コンテキスト（リクエストID、残り時間等）
    ///
    /// # Returns
    /// * `Ok(ApiGatewayProxyResponse)` - ゲートウェイが要求する形式のレスポンス
    /// * `Err(ProxyHandlerError)` - レスポンス構築に失敗した場合
    pub fn handle(
        &self,
        request: &ApiGatewayProxyRequest,
        context: &Context,
    ) -> Result<ApiGatewayProxyResponse, ProxyHandlerError> {
        let method = request.http_method.as_str();
        let path = request.path.as_deref().unwrap_or(DEFAULT_PATH);

        // アクセスログ情報を取得
        let source_ip = request
            .request_context
            .identity
            .source_ip
            .as_deref()
            .unwrap_or("unknown");
        let user_agent = request
            .request_context
            .identity
            .user_agent
            .as_deref()
            .unwrap_or("unknown");

        // 呼び出し予算（残り時間・メモリ上限）はコンテキストから読み取る
        let remaining_ms = context.deadline as i64 - Utc::now().timestamp_millis();

        info!(
            request_id = %context.request_id,
            method = method,
            path = path,
            source_ip = source_ip,
            user_agent = user_agent,
            has_body = request.body.is_some(),
            is_base64_encoded = request.is_base64_encoded,
            memory_limit_mb = context.env_config.memory,
            remaining_ms = remaining_ms,
            "プロキシリクエスト受信"
        );

        let document = self.build_document(request, context);
        let body = serde_json::to_string(&document)?;
        let headers = self.build_headers()?;

        let response = ApiGatewayProxyResponse {
            status_code: 200,
            headers,
            multi_value_headers: HeaderMap::new(),
            body: Some(Body::Text(body)),
            is_base64_encoded: false,
        };

        info!(
            request_id = %context.request_id,
            status_code = response.status_code,
            "プロキシレスポンス送信"
        );

        Ok(response)
    }

    /// 呼び出しサマリードキュメントを構築
    pub fn build_document(
        &self,
        request: &ApiGatewayProxyRequest,
        context: &Context,
    ) -> InvocationDocument {
        InvocationDocument::new(
            self.config.message.clone(),
            request.http_method.as_str(),
            request.path.as_deref().unwrap_or(DEFAULT_PATH),
            context.request_id.clone(),
            Utc::now().to_rfc3339(),
        )
    }

    /// レスポンスヘッダーを構築
    ///
    /// Content-TypeとCORSヘッダーを含むHeaderMapを返す:
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: 設定値（デフォルト: *）
    /// - Access-Control-Allow-Headers: Content-Type
    /// - Access-Control-Allow-Methods: GET, POST, OPTIONS
    fn build_headers(&self) -> Result<HeaderMap, ProxyHandlerError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // 許可オリジンは環境変数由来のため、ヘッダー値として検証する
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_str(&self.config.allow_origin)?,
        );

        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );

        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );

        Ok(headers)
    }
}
