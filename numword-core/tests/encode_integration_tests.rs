//! 编码集成测试
//!
//! 测试完整的 规范化 → 分派 → 编码 管道

use numword_core::number::MAX_DIGITS;
use numword_core::{encode, EncodeOptions, Locale, NumWordEngine, NumWordError};

fn en(number: &str) -> String {
    encode(number, "en", &EncodeOptions::default())
}

fn chs(number: &str) -> String {
    encode(number, "chs", &EncodeOptions::default())
}

#[test]
fn test_zero() {
    assert_eq!(en("0"), "zero");
    assert_eq!(chs("0"), "零");
    assert_eq!(encode("0", "fr", &EncodeOptions::default()), "zéro");
}

#[test]
fn test_english_pipeline() {
    assert_eq!(en("123"), "one hundred and twenty-three");
    assert_eq!(en("1000000"), "one million");
    assert_eq!(en("-45"), "negative forty-five");
    assert!(en("1.5").contains("point five"));
    assert_eq!(en("1.5"), "one point five");
}

#[test]
fn test_english_no_and_override() {
    let options = EncodeOptions::new().with_no_and(true);
    assert_eq!(encode("123", "en", &options), "one hundred twenty-three");
    assert_eq!(encode("123", "en", &EncodeOptions::new().with_no_and(false)), en("123"));
}

#[test]
fn test_french_exception_table() {
    let options = EncodeOptions::default();
    assert_eq!(encode("71", "fr", &options), "soixante-onze");
    assert_eq!(encode("91", "fr", &options), "quatre-vingt-onze");
    assert_eq!(encode("-200", "fr", &options), "moins deux cents");
}

#[test]
fn test_chinese_myriads() {
    assert_eq!(chs("10000"), "一万");
    assert_eq!(
        encode("100000000", "chs", &EncodeOptions::new().with_ww(true)),
        "一亿"
    );
}

#[test]
fn test_chinese_ww_folding() {
    let options = EncodeOptions::new().with_ww(true);

    // 10^12 不引入新的单位字
    let trillion = encode("1000000000000", "chs", &options);
    assert_eq!(trillion, "一万亿");
    assert!(trillion.chars().all(|c| "一万亿".contains(c)));

    // 10^16 折叠为 "万万亿"
    assert_eq!(encode("10000000000000000", "chs", &options), "一万万亿");
    assert_eq!(
        encode("10000000000000000", "chs", &EncodeOptions::new().with_ww(false)),
        "一亿亿"
    );
}

#[test]
fn test_chinese_variants() {
    let big = EncodeOptions::new().with_small_case(false);
    assert_eq!(encode("1234", "chs", &big), "壹仟贰佰叁拾肆");
    assert_eq!(encode("1234", "cht", &big), "壹仟貳佰參拾肆");
    assert_eq!(encode("-20000.5", "cht", &EncodeOptions::default()), "負二萬點五");
    assert_eq!(
        encode("10", "chs", &EncodeOptions::new().with_ten_min(false)),
        "一十"
    );
}

#[test]
fn test_unparseable_input_passes_through() {
    assert_eq!(en("abc"), "abc");
    assert_eq!(chs("12,345"), "12,345");
    assert_eq!(en(""), "");
}

#[test]
fn test_scientific_notation_is_value_preserving() {
    assert_eq!(en("1e3"), en("1000"));
    assert_eq!(en("1.5E3"), en("1500"));
    assert_eq!(en("25e-1"), en("2.5"));
    assert_eq!(chs("1e8"), chs("100000000"));
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(encode("7", "xx", &EncodeOptions::default()), "seven");
    assert_eq!(encode("7", "", &EncodeOptions::default()), "seven");
}

#[test]
fn test_very_large_magnitudes() {
    let digits = format!("9{}", "9".repeat(40));
    let words = en(&digits);
    assert!(words.starts_with("ninety-nine duodecillion"));
    assert!(words.ends_with("and ninety-nine"));
}

#[test]
fn test_oversized_integers_pass_through() {
    let huge = format!("1{}", "0".repeat(100_000));
    assert_eq!(en(&huge), huge);
    assert_eq!(chs(&huge), huge);
    assert_eq!(encode(&huge, "fr", &EncodeOptions::default()), huge);

    let engine = NumWordEngine::new(Locale::English, EncodeOptions::default());
    assert!(matches!(
        engine.try_execute(&huge),
        Err(NumWordError::TooManyDigits { digits: 100_001 })
    ));

    // 上限以内仍然逐位精确
    let largest = format!("1{}", "0".repeat(MAX_DIGITS - 1));
    assert!(chs(&largest).starts_with('一'));
    assert!(en(&largest).starts_with("one "));
}

#[test]
fn test_engine_text_replacement() {
    let engine = NumWordEngine::new(Locale::French, EncodeOptions::default());
    let result = engine.process_text("Il a 71 ans et 2 chats");
    assert_eq!(result.text, "Il a soixante-onze ans et deux chats");
    assert_eq!(result.changes.len(), 2);
    assert_eq!(result.changes[0].original_text, "71");
    assert_eq!(result.changes[0].normalized_text, "soixante-onze");
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = NumWordEngine::new(Locale::SimplifiedChinese, EncodeOptions::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || engine.execute(&format!("{}0000", i + 1)))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["一万", "二万", "三万", "四万"]);
}
