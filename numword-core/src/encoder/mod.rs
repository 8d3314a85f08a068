//! 数字编码器
//!
//! 西文（百位余数 + 数量级单位）与中文（万进制分组）两套递归编码器

pub mod chinese;
pub mod options;
pub mod western;

pub use chinese::ChineseEncoder;
pub use options::{ChineseOptions, EncodeOptions, WesternOptions};
pub use western::WesternEncoder;
