use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/video_club";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 数値として解釈できない環境変数
    #[error("Invalid value for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// アプリケーション設定
///
/// 環境変数から読み込む。未設定の項目はデフォルト値を使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// PORT
    pub port: u16,
    /// DATABASE_MAX_CONNECTIONS
    pub max_connections: u32,
}

impl AppConfig {
    /// プロセスの環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Self {
            database_url,
            port,
            max_connections,
        })
    }

    /// サーバーのバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<N: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: N,
) -> Result<N, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
