//! 中文数字编码模块
//!
//! 将阿拉伯数字转换为中文数字表达（万进制分组）
//!
//! 支持繁体 / 简体、小写 / 大写、"十" 简读、"万万" 折叠

use crate::encoder::options::ChineseOptions;
use crate::lang::ChinesePack;
use crate::number::NumberResult;

/// 中文数字编码器
pub struct ChineseEncoder<'a> {
    pack: &'a ChinesePack,
    options: ChineseOptions,
}

impl<'a> ChineseEncoder<'a> {
    pub fn new(pack: &'a ChinesePack, options: ChineseOptions) -> Self {
        Self { pack, options }
    }

    /// 编码完整数值
    ///
    /// # 示例
    /// ```
    /// # use numword_core::encoder::{ChineseEncoder, ChineseOptions};
    /// # use numword_core::lang::CHS_SMALL;
    /// # use numword_core::number::Normalizer;
    /// let number = Normalizer::normalize("-12345.60").unwrap();
    /// let glyphs = ChineseEncoder::new(&CHS_SMALL, ChineseOptions::default()).encode(&number);
    /// assert_eq!(glyphs, "负一万二千三百四十五点六");
    /// ```
    pub fn encode(&self, number: &NumberResult) -> String {
        let mut result = String::new();
        if number.negative {
            result.push(self.pack.negative);
        }

        result.push_str(&self.fold_myriads(self.encode_integer(&number.integer_digits)));

        // 小数部分去掉末尾的零，全零时不读小数点
        let decimal = number.decimal_digits.trim_end_matches('0');
        if !decimal.is_empty() {
            result.push(self.pack.dot);
            result.extend(decimal.bytes().map(|b| self.pack.digit(b - b'0')));
        }

        result
    }

    /// 编码整数位（不做万万折叠）
    pub fn encode_integer(&self, digits: &str) -> String {
        tracing::trace!(digits, "chinese encode");
        let len = digits.len();
        let units = self.pack.units;

        if len == 1 {
            return self.pack.digit(digits.as_bytes()[0] - b'0').to_string();
        }

        let mut encoded = String::new();
        if len <= 4 {
            // 单个万组：逐位读数字，非零位后接位单位
            for (i, b) in digits.bytes().enumerate() {
                let digit = b - b'0';
                let rem = len - 1 - i;

                // 小写 "一十" 简读为 "十"
                let ten_min = self.options.ten_min && len == 2 && i == 0 && digit == 1;
                if !ten_min {
                    encoded.push(self.pack.digit(digit));
                }
                if digit != 0 && rem > 0 {
                    encoded.push(units[rem]);
                }
            }
        } else {
            // 取最高的一组，位数超出单位表时向下合并
            let mut depth = len / 4;
            let mut lead = len % 4;
            while lead == 0 || units.len() <= 3 + depth {
                lead += 4;
                depth = depth.saturating_sub(1);
            }

            let (left, rest) = digits.split_at(lead);
            let left_encoded = self.encode_integer(left);
            if !left_encoded.is_empty() {
                encoded.push_str(&left_encoded);
                encoded.push(units[3 + depth]);
            }
            if rest.starts_with('0') {
                encoded.push(self.pack.zero());
            }
            encoded.push_str(&self.encode_integer(rest));
        }

        collapse_zeros(&encoded, self.pack.zero())
    }

    /// 万万折叠：最后一个 "亿" 之前的 "亿" 改写为 "万万"
    fn fold_myriads(&self, encoded: String) -> String {
        if !self.options.ww || self.pack.units.len() <= 5 {
            return encoded;
        }
        let (Some(myriad), Some(yi)) = (self.pack.myriad(), self.pack.hundred_million()) else {
            return encoded;
        };

        match encoded.rfind(yi) {
            Some(last) => {
                let doubled: String = [myriad, myriad].iter().collect();
                let head = encoded[..last].replace(yi, &doubled);
                format!("{}{}", head, &encoded[last..])
            }
            None => encoded,
        }
    }
}

/// 连续的零合并为一个，末尾的零全部去掉
fn collapse_zeros(text: &str, zero: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_zero = false;

    for ch in text.chars() {
        let is_zero = ch == zero;
        if !(is_zero && previous_zero) {
            result.push(ch);
        }
        previous_zero = is_zero;
    }

    let trimmed_len = result.trim_end_matches(zero).len();
    result.truncate(trimmed_len);
    result
}
