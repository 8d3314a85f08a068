//! numword 命令行工具
//!
//! 将数字（或文本中的数字）转换为指定语言的读法：
//! - 参数中的每个输入单独转换
//! - 无参数时逐行读取标准输入
//! - `--text` 模式替换整段文本中的数字

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use numword_core::{EncodeOptions, NumWordConfig, NumWordEngine, NumWordResult};

#[derive(Parser, Debug)]
#[command(name = "numword")]
#[command(version, about = "Spell out numbers in English, French or Chinese")]
struct Cli {
    /// Language tag: en, fr, cht (Traditional Chinese), chs (Simplified Chinese)
    /// Falls back to the config file, then to en
    #[arg(short = 'l', long = "lang", value_name = "LANG")]
    lang: Option<String>,

    /// Omit "and" before the last two digits (Western languages)
    #[arg(long = "no-and", default_value_t = false)]
    no_and: bool,

    /// Use small-case (common) Chinese glyphs
    #[arg(long = "small-case", conflicts_with = "big_case", default_value_t = false)]
    small_case: bool,

    /// Use big-case (formal) Chinese glyphs
    #[arg(long = "big-case", default_value_t = false)]
    big_case: bool,

    /// Read a lone ten as "十" instead of "一十"
    #[arg(long = "ten-min", value_name = "BOOL")]
    ten_min: Option<bool>,

    /// Fold lower "亿" into "万万"
    #[arg(long = "ww", value_name = "BOOL")]
    ww: Option<bool>,

    /// Use the long scale (billion = 10^12)
    #[arg(long = "long-scale", value_name = "BOOL")]
    long_scale: Option<bool>,

    /// Replace every number inside the input text instead of encoding a single number
    #[arg(short = 't', long = "text", default_value_t = false)]
    text: bool,

    /// Path to a config file (defaults to ~/.config/numword/config.toml)
    #[arg(short = 'c', long = "config", value_name = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Numbers (or text with --text); reads stdin line by line when empty
    inputs: Vec<String>,
}

impl Cli {
    /// 命令行上显式给出的选项
    fn encode_options(&self) -> EncodeOptions {
        let small_case = match (self.small_case, self.big_case) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        EncodeOptions {
            no_and: self.no_and.then_some(true),
            long_scale: self.long_scale,
            small_case,
            ten_min: self.ten_min,
            ww: self.ww,
        }
    }

    fn load_config(&self) -> NumWordResult<NumWordConfig> {
        match &self.config {
            Some(path) => NumWordConfig::load_from(path),
            None => NumWordConfig::load(),
        }
    }

    /// 组合配置文件与命令行参数，命令行优先
    fn engine(&self, mut config: NumWordConfig) -> NumWordEngine {
        if let Some(lang) = &self.lang {
            config.lang = lang.clone();
        }
        config.engine(self.encode_options())
    }

    fn convert(&self, engine: &NumWordEngine, input: &str) -> String {
        if self.text {
            engine.process_text(input).text
        } else {
            engine.execute(input.trim())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("NUMWORD_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = cli.load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        NumWordConfig::default()
    });
    let engine = cli.engine(config);
    tracing::debug!("Using locale {} with {:?}", engine.locale(), engine.options());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", cli.convert(&engine, &line))?;
        }
    } else if cli.text {
        writeln!(out, "{}", cli.convert(&engine, &cli.inputs.join(" ")))?;
    } else {
        for input in &cli.inputs {
            writeln!(out, "{}", cli.convert(&engine, input))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numword_core::Locale;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("numword").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_options_are_unset() {
        let cli = parse(&["42"]);
        assert_eq!(cli.encode_options(), EncodeOptions::default());
        assert_eq!(cli.inputs, vec!["42"]);
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = parse(&["--no-and", "--big-case", "--ww", "false", "--long-scale", "true", "1"]);
        let options = cli.encode_options();
        assert_eq!(options.no_and, Some(true));
        assert_eq!(options.small_case, Some(false));
        assert_eq!(options.ww, Some(false));
        assert_eq!(options.long_scale, Some(true));
        assert_eq!(options.ten_min, None);
    }

    #[test]
    fn test_case_flags_conflict() {
        let result = Cli::try_parse_from(["numword", "--small-case", "--big-case", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lang_overrides_config() {
        let cli = parse(&["--lang", "chs", "10"]);
        let config = NumWordConfig {
            lang: "fr".to_string(),
            options: EncodeOptions::new().with_small_case(false),
        };
        let engine = cli.engine(config);
        assert_eq!(engine.locale(), Locale::SimplifiedChinese);
        assert_eq!(cli.convert(&engine, "10"), "壹拾");
    }

    #[test]
    fn test_text_mode() {
        let cli = parse(&["--text", "-l", "en"]);
        let engine = cli.engine(NumWordConfig::default());
        assert_eq!(cli.convert(&engine, "buy 2 now"), "buy two now");
    }
}
