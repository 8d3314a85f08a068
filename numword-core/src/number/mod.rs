//! 数值输入模块
//!
//! 十进制 / 科学计数法数字串的解析与规范化

pub mod normalizer;

pub use normalizer::{Normalizer, NumberResult, MAX_DIGITS, MAX_EXPONENT};
