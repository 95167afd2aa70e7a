// レスポンス設定
//
// プロキシレスポンスに含めるメッセージとCORS許可オリジンを型安全に保持し、
// 環境変数からの読み込みとデフォルト値を提供するドメイン層コンポーネント。

use tracing::warn;

// ===========================================
// デフォルト値定義
// ===========================================

/// レスポンスボディに含めるデフォルトメッセージ
pub const DEFAULT_MESSAGE: &str = "Hello from proxy-handler";

/// Access-Control-Allow-Originのデフォルト値（全オリジン許可）
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";

// ===========================================
// 環境変数名定義
// ===========================================

/// 環境変数名: レスポンスメッセージ
pub const ENV_MESSAGE: &str = "HANDLER_MESSAGE";

/// 環境変数名: CORS許可オリジン
pub const ENV_ALLOW_ORIGIN: &str = "HANDLER_ALLOW_ORIGIN";

/// レスポンス設定（ドメイン層）
///
/// ハンドラーが生成するレスポンスの可変部分を型安全に保持する。
/// コールドスタート時に一度だけ初期化され、以降の呼び出しでは
/// 再構築されない不変データ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// レスポンスボディに含めるメッセージ
    pub message: String,
    /// Access-Control-Allow-Originヘッダーの値
    pub allow_origin: String,
}

impl ResponseConfig {
    /// 環境変数から設定を読み込み
    ///
    /// 各フィールドは対応する環境変数から読み込まれる:
    /// - HANDLER_MESSAGE: レスポンスメッセージ
    /// - HANDLER_ALLOW_ORIGIN: CORS許可オリジン
    ///
    /// 未設定の場合はデフォルト値を使用する。空文字列はレスポンスボディが
    /// 空になることを防ぐため無効値として扱い、デフォルト値にフォールバックする。
    pub fn from_env() -> Self {
        let message = Self::read_env(ENV_MESSAGE, DEFAULT_MESSAGE);
        let allow_origin = Self::read_env(ENV_ALLOW_ORIGIN, DEFAULT_ALLOW_ORIGIN);

        Self {
            message,
            allow_origin,
        }
    }

    /// 明示的な値で新しいResponseConfigを作成（テスト用）
    pub fn new(message: impl Into<String>, allow_origin: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            allow_origin: allow_origin.into(),
        }
    }

    /// 環境変数を読み込み、未設定・空文字列の場合はデフォルト値を返す
    fn read_env(name: &str, default: &str) -> String {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => value,
            Ok(_) => {
                warn!(env_var = name, "環境変数が空のためデフォルト値を使用");
                default.to_string()
            }
            Err(_) => default.to_string(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup_env() {
        unsafe {
            remove_env(ENV_MESSAGE);
            remove_env(ENV_ALLOW_ORIGIN);
        }
    }

    /// 環境変数未設定時はデフォルト値を使用する
    #[test]
    #[serial(handler_env)]
    fn test_from_env_uses_defaults_when_unset() {
        unsafe { cleanup_env() };

        let config = ResponseConfig::from_env();

        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert_eq!(config.allow_origin, DEFAULT_ALLOW_ORIGIN);
    }

    /// 環境変数で設定した値が反映される
    #[test]
    #[serial(handler_env)]
    fn test_from_env_reflects_env_vars() {
        unsafe {
            cleanup_env();
            set_env(ENV_MESSAGE, "custom message");
            set_env(ENV_ALLOW_ORIGIN, "https://example.com");
        }

        let config = ResponseConfig::from_env();

        assert_eq!(config.message, "custom message");
        assert_eq!(config.allow_origin, "https://example.com");

        unsafe { cleanup_env() };
    }

    /// 空文字列の環境変数はデフォルト値にフォールバックする
    #[test]
    #[serial(handler_env)]
    fn test_from_env_falls_back_on_empty_value() {
        unsafe {
            cleanup_env();
            set_env(ENV_MESSAGE, "");
            set_env(ENV_ALLOW_ORIGIN, "   ");
        }

        let config = ResponseConfig::from_env();

        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert_eq!(config.allow_origin, DEFAULT_ALLOW_ORIGIN);

        unsafe { cleanup_env() };
    }

    /// Defaultとfrom_env（未設定時）は同じ値を返す
    #[test]
    #[serial(handler_env)]
    fn test_default_matches_from_env_without_vars() {
        unsafe { cleanup_env() };

        assert_eq!(ResponseConfig::default(), ResponseConfig::from_env());
    }
}
