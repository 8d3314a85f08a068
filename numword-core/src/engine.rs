//! 编码引擎 - 分派入口
//!
//! 按语言标签选择语言包与编码器，合并调用方选项与语言默认值

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::encoder::{ChineseEncoder, EncodeOptions, WesternEncoder};
use crate::error::NumWordResult;
use crate::lang::{Locale, LocaleFamily};
use crate::number::Normalizer;

lazy_static! {
    static ref NUMERAL_RE: Regex =
        Regex::new(r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?(?-u:\b)").unwrap();
}

/// 文本替换的变更记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// 原始文本范围（字节）
    pub original_span: Range<usize>,
    /// 原始文本
    pub original_text: String,
    /// 替换后的文本
    pub normalized_text: String,
}

/// 文本替换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    /// 替换后的文本
    pub text: String,
    /// 变更记录列表
    pub changes: Vec<TextChange>,
}

/// 数字编码引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumWordEngine {
    locale: Locale,
    options: EncodeOptions,
}

impl Default for NumWordEngine {
    fn default() -> Self {
        Self::new(Locale::English, EncodeOptions::default())
    }
}

impl NumWordEngine {
    /// 创建新的引擎
    pub fn new(locale: Locale, options: EncodeOptions) -> Self {
        Self { locale, options }
    }

    /// 按语言标签创建引擎，无法识别的标签回退到英语
    pub fn from_tag(lang: &str, options: EncodeOptions) -> Self {
        Self::new(Locale::from_tag(lang), options)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// 编码单个数字，无法解析时返回原输入
    pub fn execute(&self, input: &str) -> String {
        match self.try_execute(input) {
            Ok(words) => words,
            Err(e) => {
                tracing::debug!("Returning input unchanged: {}", e);
                input.to_string()
            }
        }
    }

    /// 编码单个数字
    ///
    /// # 返回
    /// - `Ok(String)`: 单词形式
    /// - `Err`: 输入不是十进制数或科学计数法
    pub fn try_execute(&self, input: &str) -> NumWordResult<String> {
        let number = Normalizer::normalize(input)?;

        let words = match self.locale.family() {
            LocaleFamily::Western(pack) => {
                let options = self.options.resolve_western(pack);
                WesternEncoder::new(pack, options).encode(&number)
            }
            LocaleFamily::Chinese { small, big } => {
                let options = self.options.resolve_chinese();
                let pack = if options.small_case { small } else { big };
                ChineseEncoder::new(pack, options).encode(&number)
            }
        };

        Ok(words)
    }

    /// 替换文本中的所有数字
    ///
    /// 处于 "1,000"、"12:30"、"1.2.3" 这类结构内部的数字保持原样
    pub fn process_text(&self, text: &str) -> TextResult {
        let mut result = String::with_capacity(text.len());
        let mut changes = Vec::new();
        let mut last = 0;

        for m in NUMERAL_RE.find_iter(text) {
            let mut start = m.start();
            let end = m.end();

            if Self::is_embedded(text, start, end) {
                continue;
            }

            // 前面紧跟且独立的正负号并入数字
            if let Some(sign) = text[..start].chars().next_back() {
                if (sign == '-' || sign == '+') && start > last {
                    let before = text[..start - 1].chars().next_back();
                    if before.map_or(true, |c| c.is_whitespace() || c == '(') {
                        start -= 1;
                    }
                }
            }

            let original = &text[start..end];
            let words = match self.try_execute(original) {
                Ok(words) => words,
                Err(e) => {
                    tracing::debug!("Skipping numeral {:?}: {}", original, e);
                    continue;
                }
            };

            result.push_str(&text[last..start]);
            result.push_str(&words);
            changes.push(TextChange {
                original_span: start..end,
                original_text: original.to_string(),
                normalized_text: words,
            });
            last = end;
        }

        result.push_str(&text[last..]);

        TextResult {
            text: result,
            changes,
        }
    }

    /// 数字两侧是否紧贴分隔符与其他数字
    fn is_embedded(text: &str, start: usize, end: usize) -> bool {
        const JOINERS: [char; 4] = ['.', ',', ':', '/'];

        let mut before = text[..start].chars().rev();
        let joined_before = matches!(
            (before.next(), before.next()),
            (Some(j), Some(d)) if JOINERS.contains(&j) && d.is_ascii_digit()
        );

        let mut after = text[end..].chars();
        let joined_after = matches!(
            (after.next(), after.next()),
            (Some(j), Some(d)) if JOINERS.contains(&j) && d.is_ascii_digit()
        );

        joined_before || joined_after
    }
}
