//! 英语语言包

use super::pack::{LanguagePack, ScaleUnit};

pub static ENGLISH: LanguagePack = LanguagePack {
    tag: "en",
    base: [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
        "seventeen", "eighteen", "nineteen",
    ],
    tens: [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    base_separator: "-",
    unit_separator: Some("and"),
    negative_word: "negative",
    dot_word: "point",
    units: &[
        ScaleUnit::Simple("hundred"),
        ScaleUnit::Simple("thousand"),
        ScaleUnit::Simple("million"),
        ScaleUnit::Simple("billion"),
        ScaleUnit::Simple("trillion"),
        ScaleUnit::Simple("quadrillion"),
        ScaleUnit::Simple("quintillion"),
        ScaleUnit::Simple("sextillion"),
        ScaleUnit::Simple("septillion"),
        ScaleUnit::Simple("octillion"),
        ScaleUnit::Simple("nonillion"),
        ScaleUnit::Simple("decillion"),
        ScaleUnit::Simple("undecillion"),
        ScaleUnit::Simple("duodecillion"),
        ScaleUnit::Simple("tredecillion"),
        ScaleUnit::Simple("quattuordecillion"),
        ScaleUnit::Simple("quindecillion"),
    ],
    exceptions: &[],
    use_long_scale: false,
};
