// ドメイン層モジュール
pub mod invocation_document;
pub mod response_config;

// 再エクスポート
pub use invocation_document::InvocationDocument;
pub use response_config::ResponseConfig;
