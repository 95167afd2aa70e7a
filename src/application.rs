// アプリケーション層モジュール
pub mod expensive_operation;
pub mod proxy_handler;

// 再エクスポート
pub use expensive_operation::{ExpensiveOperation, ExpensiveOperationError, SIMULATED_LATENCY};
pub use proxy_handler::{ProxyHandler, ProxyHandlerError};
