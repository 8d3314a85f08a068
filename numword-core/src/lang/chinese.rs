//! 中文字符包
//!
//! 繁体 / 简体 × 小写（常用字）/ 大写（财务字）

use super::pack::ChinesePack;

/// 繁体小写
pub static CHT_SMALL: ChinesePack = ChinesePack {
    digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    units: &['個', '十', '百', '千', '萬', '億'],
    negative: '負',
    dot: '點',
};

/// 繁体大写
pub static CHT_BIG: ChinesePack = ChinesePack {
    digits: ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖'],
    units: &['個', '拾', '佰', '仟', '萬', '億'],
    negative: '負',
    dot: '點',
};

/// 简体小写
pub static CHS_SMALL: ChinesePack = ChinesePack {
    digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    units: &['个', '十', '百', '千', '万', '亿'],
    negative: '负',
    dot: '点',
};

/// 简体大写
pub static CHS_BIG: ChinesePack = ChinesePack {
    digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
    units: &['个', '拾', '佰', '仟', '万', '亿'],
    negative: '负',
    dot: '点',
};
