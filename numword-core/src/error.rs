use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumWordError {
    // 输入错误
    #[error("Unparseable numeral: {input}")]
    Unparseable { input: String },

    #[error("Exponent out of range: {exponent}")]
    ExponentOutOfRange { exponent: String },

    #[error("Too many integer digits: {digits}")]
    TooManyDigits { digits: usize },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumWordResult<T> = Result<T, NumWordError>;
