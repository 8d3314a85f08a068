//! numword Core
//!
//! 数字转自然语言读法：英语、法语、繁体 / 简体中文

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod config;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod lang;
pub mod number;

// Re-export key types
pub use config::NumWordConfig;
pub use encoder::EncodeOptions;
pub use engine::{NumWordEngine, TextChange, TextResult};
pub use error::{NumWordError, NumWordResult};
pub use lang::Locale;

/// 将数字转换为指定语言的读法
///
/// `number` 可以是数字或数字字符串（支持科学计数法）；无法解析时原样返回。
/// 无法识别的 `lang` 回退到英语。
///
/// # 示例
/// ```
/// use numword_core::{encode, EncodeOptions};
///
/// assert_eq!(encode("123", "en", &EncodeOptions::default()), "one hundred and twenty-three");
/// assert_eq!(encode(10000, "chs", &EncodeOptions::default()), "一万");
/// assert_eq!(encode("abc", "en", &EncodeOptions::default()), "abc");
/// ```
pub fn encode<N: std::fmt::Display>(number: N, lang: &str, options: &EncodeOptions) -> String {
    NumWordEngine::from_tag(lang, *options).execute(&number.to_string())
}

/// 初始化日志系统
///
/// 调试模式 (--features debug-logs): 由 NUMWORD_LOG 控制过滤级别，默认 warn
///
/// 已有全局订阅者时保留原订阅者
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("NUMWORD_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_accepts_numbers_and_strings() {
        let options = EncodeOptions::default();
        assert_eq!(encode(42, "en", &options), "forty-two");
        assert_eq!(encode(-1.5, "en", &options), "negative one point five");
        assert_eq!(encode("42", "fr", &options), "quarante-deux");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
