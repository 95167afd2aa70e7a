/// API Gatewayプロキシ統合Lambdaエントリポイント
///
/// ゲートウェイがプロキシしたHTTPリクエストイベントを処理し、
/// プロキシ統合が要求する形式のレスポンスイベントを返却する。
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use proxy_handler::application::ProxyHandler;
use proxy_handler::domain::ResponseConfig;
use proxy_handler::infrastructure::init_logging;
use tokio::sync::OnceCell;
use tracing::info;

/// ProxyHandlerの静的インスタンス
///
/// コールドスタート時に一度だけ構築し、同一プロセスインスタンスへの
/// warm start呼び出しで再利用する。環境変数からの設定読み込みは
/// この初期化時にのみ行われる。
static HANDLER: OnceCell<ProxyHandler> = OnceCell::const_new();

/// ProxyHandlerを取得（初期化されていなければ初期化）
async fn get_handler() -> &'static ProxyHandler {
    HANDLER
        .get_or_init(|| async {
            info!("コールドスタート初期化: レスポンス設定を読み込み");
            ProxyHandler::new(ResponseConfig::from_env())
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("プロキシLambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. コールドスタート時のみProxyHandlerを構築（warm startでは再利用）
/// 2. プロキシリクエストを処理してレスポンスを構築
/// 3. 障害はランタイムへ伝播し、呼び出し失敗として記録される
async fn handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let proxy_handler = get_handler().await;

    let response = proxy_handler.handle(&event.payload, &event.context)?;

    Ok(response)
}
