// インフラストラクチャ層モジュール
pub mod logging;

// 再エクスポート
pub use logging::init_logging;
