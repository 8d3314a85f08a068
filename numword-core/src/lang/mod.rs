//! 语言包注册表
//!
//! 静态、只读的语言包集合，按语言标签选择

pub mod chinese;
pub mod english;
pub mod french;
pub mod pack;

pub use chinese::{CHS_BIG, CHS_SMALL, CHT_BIG, CHT_SMALL};
pub use english::ENGLISH;
pub use french::FRENCH;
pub use pack::{ChinesePack, LanguagePack, ScaleUnit, LONG_SCALE, SHORT_SCALE};

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// 英语 "en"
    #[default]
    English,
    /// 法语 "fr"
    French,
    /// 繁体中文 "cht"
    TraditionalChinese,
    /// 简体中文 "chs"
    SimplifiedChinese,
}

/// 语言族（决定使用哪个编码器及其语言包）
#[derive(Debug, Clone, Copy)]
pub enum LocaleFamily {
    Western(&'static LanguagePack),
    Chinese {
        small: &'static ChinesePack,
        big: &'static ChinesePack,
    },
}

impl Locale {
    pub const ALL: [Locale; 4] = [
        Locale::English,
        Locale::French,
        Locale::TraditionalChinese,
        Locale::SimplifiedChinese,
    ];

    /// 解析语言标签，无法识别时返回 None
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// 解析语言标签，无法识别时回退到英语
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|| {
            tracing::debug!("Unknown language tag {:?}, falling back to en", tag);
            Locale::English
        })
    }

    /// 语言标签
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::TraditionalChinese => "cht",
            Locale::SimplifiedChinese => "chs",
        }
    }

    pub fn family(self) -> LocaleFamily {
        match self {
            Locale::English => LocaleFamily::Western(&ENGLISH),
            Locale::French => LocaleFamily::Western(&FRENCH),
            Locale::TraditionalChinese => LocaleFamily::Chinese {
                small: &CHT_SMALL,
                big: &CHT_BIG,
            },
            Locale::SimplifiedChinese => LocaleFamily::Chinese {
                small: &CHS_SMALL,
                big: &CHS_BIG,
            },
        }
    }

    /// 西文语言包（中文返回 None）
    pub fn language_pack(self) -> Option<&'static LanguagePack> {
        match self.family() {
            LocaleFamily::Western(pack) => Some(pack),
            LocaleFamily::Chinese { .. } => None,
        }
    }

    /// 中文字符包（西文返回 None）
    pub fn chinese_pack(self, small_case: bool) -> Option<&'static ChinesePack> {
        match self.family() {
            LocaleFamily::Chinese { small, big } => Some(if small_case { small } else { big }),
            LocaleFamily::Western(_) => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::English));
        assert_eq!(Locale::parse("FR"), Some(Locale::French));
        assert_eq!(Locale::parse("cht"), Some(Locale::TraditionalChinese));
        assert_eq!(Locale::parse("chs"), Some(Locale::SimplifiedChinese));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag("xx"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
    }

    #[test]
    fn test_family() {
        for locale in Locale::ALL {
            match (locale, locale.family()) {
                (Locale::English | Locale::French, LocaleFamily::Western(pack)) => {
                    assert_eq!(pack.tag, locale.tag());
                }
                (Locale::TraditionalChinese, LocaleFamily::Chinese { small, big }) => {
                    assert_eq!(small.myriad(), Some('萬'));
                    assert_eq!(big.digit(2), '貳');
                }
                (Locale::SimplifiedChinese, LocaleFamily::Chinese { small, big }) => {
                    assert_eq!(small.myriad(), Some('万'));
                    assert_eq!(big.digit(2), '贰');
                }
                (locale, family) => panic!("{locale} mapped to {family:?}"),
            }
        }
    }

    #[test]
    fn test_pack_selection() {
        assert_eq!(Locale::English.language_pack().unwrap().tag, "en");
        assert!(Locale::English.chinese_pack(true).is_none());
        assert!(Locale::SimplifiedChinese.language_pack().is_none());
        assert_eq!(Locale::SimplifiedChinese.chinese_pack(true).unwrap().digit(1), '一');
        assert_eq!(Locale::SimplifiedChinese.chinese_pack(false).unwrap().digit(1), '壹');
        assert_eq!(Locale::TraditionalChinese.chinese_pack(true).unwrap().myriad(), Some('萬'));
    }

    #[test]
    fn test_western_packs_have_enough_scale_entries() {
        for locale in [Locale::English, Locale::French] {
            let pack = locale.language_pack().unwrap();
            assert!(pack.scale(false).len() >= pack.units.len());
            assert!(pack.scale(true).len() >= pack.units.len());
        }
    }

    #[test]
    fn test_chinese_packs_support_folding() {
        for pack in [&CHT_SMALL, &CHT_BIG, &CHS_SMALL, &CHS_BIG] {
            assert_eq!(pack.units.len(), 6);
            assert_eq!(pack.zero(), '零');
        }
    }
}
