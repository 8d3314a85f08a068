//! 西文数字编码模块
//!
//! 将规范化后的整数位按百位余数 + 数量级单位递归展开为单词
//!
//! 数量级边界都是 10 的幂，因此商和余数都直接取数字串切片，不受定长整数范围限制

use crate::encoder::options::WesternOptions;
use crate::lang::LanguagePack;
use crate::number::NumberResult;

/// 西文数字编码器
pub struct WesternEncoder<'a> {
    pack: &'a LanguagePack,
    options: WesternOptions,
}

impl<'a> WesternEncoder<'a> {
    pub fn new(pack: &'a LanguagePack, options: WesternOptions) -> Self {
        Self { pack, options }
    }

    /// 编码完整数值（符号 + 整数 + 小数）
    ///
    /// # 示例
    /// ```
    /// # use numword_core::encoder::{WesternEncoder, WesternOptions};
    /// # use numword_core::lang::ENGLISH;
    /// # use numword_core::number::Normalizer;
    /// let number = Normalizer::normalize("-1.05").unwrap();
    /// let words = WesternEncoder::new(&ENGLISH, WesternOptions::default()).encode(&number);
    /// assert_eq!(words, "negative one point zero five");
    /// ```
    pub fn encode(&self, number: &NumberResult) -> String {
        let mut words = self.encode_integer(&number.integer_digits);

        if number.has_decimal() {
            words.push(' ');
            words.push_str(self.pack.dot_word);
            for digit in number.decimal_digits.bytes() {
                words.push(' ');
                words.push_str(self.pack.digit_word(digit - b'0'));
            }
        }

        if number.negative {
            format!("{} {}", self.pack.negative_word, words)
        } else {
            words
        }
    }

    /// 编码整数位
    pub fn encode_integer(&self, digits: &str) -> String {
        self.encode_with(digits, self.options.no_and)
    }

    fn encode_with(&self, digits: &str, no_and: bool) -> String {
        let digits = trim_leading_zeros(digits);
        tracing::trace!(digits, no_and, "western encode");

        if let Some(word) = self.pack.exception(digits) {
            return word.to_string();
        }
        if let Some(word) = self.pack.base_word(digits) {
            return word.to_string();
        }
        if digits.len() <= 2 {
            return self.encode_below_hundred(digits);
        }

        let len = digits.len();
        let remainder = trim_leading_zeros(&digits[len - 2..]);
        let has_remainder = remainder != "0";

        // 低位在前收集，最后反转
        let mut chunks = Vec::new();
        if has_remainder {
            let words = self.encode_with(remainder, no_and);
            match self.pack.unit_separator {
                Some(separator) if !no_and => chunks.push(format!("{} {}", separator, words)),
                _ => chunks.push(words),
            }
        }

        let scale = self.pack.scale(self.options.long_scale);
        let units = self.pack.units;
        for (i, unit) in units.iter().enumerate() {
            let low = scale[i];
            if len <= low {
                break;
            }

            // 最高单位的计数取剩余全部高位
            let high = if i + 1 == units.len() {
                len
            } else {
                scale[i + 1].min(len)
            };

            let count = trim_leading_zeros(&digits[len - high..len - low]);
            if count == "0" {
                continue;
            }

            let unit_word = unit.word(count, has_remainder);
            if unit.omits_count(count) {
                chunks.push(unit_word.to_string());
            } else {
                let count_words = self.encode_with(count, true);
                chunks.push(format!("{} {}", count_words, unit_word));
            }
        }

        chunks.reverse();
        chunks.join(" ")
    }

    /// 两位数：整十词 + 连接符 + 个位
    fn encode_below_hundred(&self, digits: &str) -> String {
        let bytes = digits.as_bytes();
        let (tens, ones) = match bytes {
            [t, o] => (usize::from(t - b'0'), o - b'0'),
            [o] => (0, o - b'0'),
            _ => unreachable!("encode_below_hundred called with {} digits", digits.len()),
        };

        let decade = self.pack.tens[tens];
        if ones == 0 {
            return decade.to_string();
        }

        let unit = self.encode_with(&digits[digits.len() - 1..], true);
        format!("{}{}{}", decade, self.pack.base_separator, unit)
    }
}

/// 去掉前导零，至少保留一位
pub(crate) fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
