//! 语言包数据结构
//!
//! 西文语言包（基础词、数量级单位、例外表）与中文字符包

/// 短级数量级表（10 的幂）：hundred, thousand, million, billion = 10^9, ...
pub const SHORT_SCALE: &[usize] = &[
    2, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45, 48,
];

/// 长级数量级表（10 的幂）：hundred, thousand, million, billion = 10^12, ...
pub const LONG_SCALE: &[usize] = &[
    2, 3, 6, 12, 18, 24, 30, 36, 42, 48, 54, 60, 66, 72, 78, 84, 90,
];

/// 数量级单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleUnit {
    /// 无屈折变化的单位词（例如英语 "thousand"）
    Simple(&'static str),
    /// 有单复数变化的单位词（例如法语 "cent" / "cents"）
    Inflected {
        singular: &'static str,
        plural: Option<&'static str>,
        /// 后面还有余数时保持单数（"deux cents" 但 "deux cent trois"）
        avoid_plural_in_number: bool,
        /// 这些计数不读出前缀（"cent" 而不是 "un cent"）
        avoid_prefix_exception: &'static [&'static str],
    },
}

impl ScaleUnit {
    /// 根据计数与是否有两位余数选择单位词
    pub fn word(&self, count: &str, has_remainder: bool) -> &'static str {
        match *self {
            ScaleUnit::Simple(word) => word,
            ScaleUnit::Inflected {
                singular,
                plural,
                avoid_plural_in_number,
                ..
            } => match plural {
                Some(plural) if count != "1" && !(avoid_plural_in_number && has_remainder) => {
                    plural
                }
                _ => singular,
            },
        }
    }

    /// 该计数是否省略前缀数字
    pub fn omits_count(&self, count: &str) -> bool {
        match self {
            ScaleUnit::Simple(_) => false,
            ScaleUnit::Inflected {
                avoid_prefix_exception,
                ..
            } => avoid_prefix_exception.contains(&count),
        }
    }
}

/// 西文语言包
#[derive(Debug)]
pub struct LanguagePack {
    /// 语言标签
    pub tag: &'static str,
    /// 0 ~ 19 的基础词
    pub base: [&'static str; 20],
    /// 整十词（下标 = 十位数字，0 和 1 不使用）
    pub tens: [&'static str; 10],
    /// 十位与个位之间的连接符
    pub base_separator: &'static str,
    /// 百位以上与两位余数之间的连接词（例如 "and"）
    pub unit_separator: Option<&'static str>,
    /// 负号词
    pub negative_word: &'static str,
    /// 小数点词
    pub dot_word: &'static str,
    /// 数量级单位，按 hundred, thousand, million, ... 排列
    pub units: &'static [ScaleUnit],
    /// 不规则读法（数字串 → 词）
    pub exceptions: &'static [(&'static str, &'static str)],
    /// 默认是否使用长级
    pub use_long_scale: bool,
}

impl LanguagePack {
    /// 获取数量级表
    pub fn scale(&self, long_scale: bool) -> &'static [usize] {
        if long_scale {
            LONG_SCALE
        } else {
            SHORT_SCALE
        }
    }

    /// 查找不规则读法
    pub fn exception(&self, digits: &str) -> Option<&'static str> {
        self.exceptions
            .iter()
            .find(|(key, _)| *key == digits)
            .map(|(_, word)| *word)
    }

    /// 查找基础词（0 ~ 19 及整十）
    pub fn base_word(&self, digits: &str) -> Option<&'static str> {
        let n: usize = match digits.len() {
            1 | 2 => digits.parse().ok()?,
            _ => return None,
        };

        if n < 20 {
            Some(self.base[n])
        } else if n % 10 == 0 {
            Some(self.tens[n / 10])
        } else {
            None
        }
    }

    /// 单个数字的读法（用于小数部分）
    pub fn digit_word(&self, digit: u8) -> &'static str {
        self.base[usize::from(digit % 10)]
    }
}

/// 中文字符包
#[derive(Debug)]
pub struct ChinesePack {
    /// 数字字符（下标 = 数值）
    pub digits: [char; 10],
    /// 单位字符：个 十 百 千 万 亿
    pub units: &'static [char],
    /// 负号字符
    pub negative: char,
    /// 小数点字符
    pub dot: char,
}

impl ChinesePack {
    /// 零字符
    pub fn zero(&self) -> char {
        self.digits[0]
    }

    /// 数字字符
    pub fn digit(&self, digit: u8) -> char {
        self.digits[usize::from(digit % 10)]
    }

    /// 万
    pub fn myriad(&self) -> Option<char> {
        self.units.get(4).copied()
    }

    /// 亿
    pub fn hundred_million(&self) -> Option<char> {
        self.units.get(5).copied()
    }
}
