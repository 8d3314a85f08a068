//! numword 演示程序
//!
//! 演示各语言的数字读法与文本替换
//!
//! 运行：cargo run --example encode_demo

use numword_core::{encode, EncodeOptions, Locale, NumWordEngine};

fn main() {
    numword_core::init_logging();

    println!("=== numword 演示 ===\n");

    // 测试用例: (输入, 语言, 期望)
    let test_cases = vec![
        ("0", "en", "zero"),
        ("123", "en", "one hundred and twenty-three"),
        ("-45", "en", "negative forty-five"),
        ("1e3", "en", "one thousand"),
        ("71", "fr", "soixante-onze"),
        ("200", "fr", "deux cents"),
        ("10000", "chs", "一万"),
        ("3.14", "chs", "三点一四"),
        ("10000000000000000", "chs", "一万万亿"),
        ("20000", "cht", "二萬"),
        ("abc", "en", "abc"),
    ];

    println!("【测试用例】\n");
    for (i, (input, lang, expected)) in test_cases.iter().enumerate() {
        let result = encode(input, lang, &EncodeOptions::default());
        let status = if &result == expected { "✓" } else { "✗" };

        println!("#{} {} [{}] \"{}\"", i + 1, status, lang, input);
        println!("     输出: \"{}\"", result);
        println!("     期望: \"{}\"", expected);
        println!();
    }

    println!("【大写中文】\n");
    let big = EncodeOptions::new().with_small_case(false);
    for input in ["1234", "100010", "-8.05"] {
        println!("  {} → {}", input, encode(input, "chs", &big));
    }
    println!();

    println!("【文本替换】\n");
    let engine = NumWordEngine::new(Locale::English, EncodeOptions::default());
    let result = engine.process_text("Order 12 boxes at 3.5 each, ref 1,024");
    println!("  输出: \"{}\"", result.text);
    for change in &result.changes {
        println!("    - \"{}\" → \"{}\"", change.original_text, change.normalized_text);
    }
}
