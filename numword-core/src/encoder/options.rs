//! 编码选项
//!
//! 调用方选项全部可选，未设置的字段在分派时按语言族默认值补齐

use serde::{Deserialize, Serialize};

use crate::lang::LanguagePack;

/// 调用方选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// 西文：省略两位余数前的连接词（"one hundred twenty-three"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_and: Option<bool>,
    /// 西文：覆盖语言包的长级 / 短级选择
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_scale: Option<bool>,
    /// 中文：使用小写字符包
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_case: Option<bool>,
    /// 中文小写：两位数 "一十" 读作 "十"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ten_min: Option<bool>,
    /// 中文：将较低位置的 "亿" 折叠为 "万万"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ww: Option<bool>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_and(mut self, value: bool) -> Self {
        self.no_and = Some(value);
        self
    }

    pub fn with_long_scale(mut self, value: bool) -> Self {
        self.long_scale = Some(value);
        self
    }

    pub fn with_small_case(mut self, value: bool) -> Self {
        self.small_case = Some(value);
        self
    }

    pub fn with_ten_min(mut self, value: bool) -> Self {
        self.ten_min = Some(value);
        self
    }

    pub fn with_ww(mut self, value: bool) -> Self {
        self.ww = Some(value);
        self
    }

    /// 逐字段合并：`self` 中已设置的字段优先，其余取 `fallback`
    pub fn merged_over(self, fallback: EncodeOptions) -> EncodeOptions {
        EncodeOptions {
            no_and: self.no_and.or(fallback.no_and),
            long_scale: self.long_scale.or(fallback.long_scale),
            small_case: self.small_case.or(fallback.small_case),
            ten_min: self.ten_min.or(fallback.ten_min),
            ww: self.ww.or(fallback.ww),
        }
    }

    /// 补齐西文默认值
    pub fn resolve_western(&self, pack: &LanguagePack) -> WesternOptions {
        WesternOptions {
            no_and: self.no_and.unwrap_or(false),
            long_scale: self.long_scale.unwrap_or(pack.use_long_scale),
        }
    }

    /// 补齐中文默认值
    pub fn resolve_chinese(&self) -> ChineseOptions {
        let small_case = self.small_case.unwrap_or(true);
        ChineseOptions {
            small_case,
            ten_min: self.ten_min.unwrap_or(small_case),
            ww: self.ww.unwrap_or(true),
        }
    }
}

/// 西文编码器的完整选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WesternOptions {
    pub no_and: bool,
    pub long_scale: bool,
}

/// 中文编码器的完整选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChineseOptions {
    pub small_case: bool,
    pub ten_min: bool,
    pub ww: bool,
}

impl Default for ChineseOptions {
    fn default() -> Self {
        EncodeOptions::default().resolve_chinese()
    }
}
