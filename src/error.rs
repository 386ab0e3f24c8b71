//! 统一错误类型模块
//!
//! 提供 saltpass 库中可失败操作的错误类型定义。
//!
//! 核心管线（哈希派生、规则校验与重写）按约定返回 `Option` 哨兵值，
//! 不会产生错误；`Error` 只用于真正可失败的构造路径，
//! 例如从 JSON 规则表加载 [`crate::rule::RuleSet`]。

use std::fmt;

/// saltpass 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// saltpass 库的错误类型
#[derive(Debug)]
pub enum Error {
    /// 规则配置错误
    Config(ConfigError),

    /// 其他错误
    Other(String),
}

impl Error {
    /// 创建一个配置解析错误
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Config(ConfigError::ParseFailed(msg.into()))
    }
}

/// 规则配置相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 规则表解析失败
    ParseFailed(String),
    /// 无效的配置值
    InvalidValue { key: String, message: String },
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseFailed(msg) => write!(f, "rule table parse failed: {}", msg),
            ConfigError::InvalidValue { key, message } => {
                write!(f, "invalid configuration value for '{}': {}", key, message)
            }
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config(ConfigError::ParseFailed("bad json".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: rule table parse failed: bad json"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "required".to_string(),
            message: "expected a single character".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration value for 'required': expected a single character"
        );
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::ParseFailed("test".to_string());
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_parse_helper() {
        let err = Error::parse("unexpected token");
        assert!(matches!(err, Error::Config(ConfigError::ParseFailed(_))));
    }
}
