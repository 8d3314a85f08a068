//! 数值规范化模块
//!
//! 将数字字符串（含科学计数法）规范化为 `{符号, 整数位, 小数位}` 三元组

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{NumWordError, NumWordResult};

/// 科学计数法允许的最大指数绝对值
pub const MAX_EXPONENT: i64 = 1000;

/// 整数部分允许的最大位数，编码器的递归深度随位数增长
pub const MAX_DIGITS: usize = 4096;

lazy_static! {
    static ref PLAIN_RE: Regex = Regex::new(r"^([+-])?0*([0-9]+)(?:\.([0-9]+))?$").unwrap();
    static ref SCIENTIFIC_RE: Regex =
        Regex::new(r"(?i)^([+-])?0*([0-9]+)(?:\.([0-9]+))?e([+-]?[0-9]+)$").unwrap();
}

/// 规范化后的数值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberResult {
    /// 是否为负数
    pub negative: bool,
    /// 整数位（至少一位，除单个 "0" 外无前导零）
    pub integer_digits: String,
    /// 小数位（可能为空）
    pub decimal_digits: String,
}

impl NumberResult {
    /// 是否带有小数部分
    pub fn has_decimal(&self) -> bool {
        !self.decimal_digits.is_empty()
    }
}

/// 数值规范化器
pub struct Normalizer;

impl Normalizer {
    /// 规范化数字字符串
    ///
    /// # 返回
    /// - `Ok(NumberResult)`: 规范化结果
    /// - `Err`: 输入既不是十进制数也不是科学计数法，或整数部分超过 `MAX_DIGITS` 位
    ///
    /// # 示例
    /// ```
    /// # use numword_core::number::Normalizer;
    /// let result = Normalizer::normalize("-1.5e2").unwrap();
    /// assert!(result.negative);
    /// assert_eq!(result.integer_digits, "150");
    /// assert_eq!(result.decimal_digits, "");
    /// ```
    pub fn normalize(input: &str) -> NumWordResult<NumberResult> {
        let result = match Self::parse_plain(input) {
            Some(result) => result,
            None if SCIENTIFIC_RE.is_match(input) => {
                let plain = Self::scientific_to_decimal(input)?;
                Self::parse_plain(&plain).ok_or_else(|| NumWordError::Unparseable {
                    input: input.to_string(),
                })?
            }
            None => {
                return Err(NumWordError::Unparseable {
                    input: input.to_string(),
                })
            }
        };

        if result.integer_digits.len() > MAX_DIGITS {
            return Err(NumWordError::TooManyDigits {
                digits: result.integer_digits.len(),
            });
        }

        Ok(result)
    }

    /// 将科学计数法改写为普通十进制形式
    ///
    /// 例如："1.5e3" → "1500"，"12e-5" → "0.00012"
    pub fn scientific_to_decimal(input: &str) -> NumWordResult<String> {
        let caps = SCIENTIFIC_RE
            .captures(input)
            .ok_or_else(|| NumWordError::Unparseable {
                input: input.to_string(),
            })?;

        let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");
        let mut integer = caps[2].to_string();
        let mut decimal = caps.get(3).map_or(String::new(), |m| m.as_str().to_string());

        let exponent_text = &caps[4];
        let exponent: i64 = exponent_text
            .parse()
            .ok()
            .filter(|e: &i64| e.abs() <= MAX_EXPONENT)
            .ok_or_else(|| NumWordError::ExponentOutOfRange {
                exponent: exponent_text.to_string(),
            })?;
        let shift = exponent.unsigned_abs() as usize;

        if exponent > 0 {
            // 小数点右移：小数位不足时右侧补零
            let take = shift.min(decimal.len());
            integer.push_str(&decimal[..take]);
            integer.push_str(&"0".repeat(shift - take));
            decimal = decimal[take..].to_string();
        } else if exponent < 0 {
            // 小数点左移：整数位不足时左侧补零
            let start = integer.len().saturating_sub(shift);
            let moved = &integer[start..];
            let mut shifted = "0".repeat(shift - moved.len());
            shifted.push_str(moved);
            shifted.push_str(&decimal);
            decimal = shifted;
            integer.truncate(start);
        }

        if integer.is_empty() {
            integer.push('0');
        }

        let mut plain = String::with_capacity(integer.len() + decimal.len() + 2);
        if negative {
            plain.push('-');
        }
        plain.push_str(&integer);
        if !decimal.is_empty() {
            plain.push('.');
            plain.push_str(&decimal);
        }

        Ok(plain)
    }

    /// 检查文本是否为可规范化的数字
    pub fn is_numeral(text: &str) -> bool {
        Self::normalize(text).is_ok()
    }

    fn parse_plain(input: &str) -> Option<NumberResult> {
        let caps = PLAIN_RE.captures(input)?;

        Some(NumberResult {
            negative: caps.get(1).map_or(false, |m| m.as_str() == "-"),
            integer_digits: caps[2].to_string(),
            decimal_digits: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
        })
    }
}
