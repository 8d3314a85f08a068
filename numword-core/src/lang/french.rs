//! 法语语言包
//!
//! 71 ~ 79、91 ~ 99 以及 "et un" 系列通过例外表给出

use super::pack::{LanguagePack, ScaleUnit};

const fn inflected(singular: &'static str, plural: &'static str) -> ScaleUnit {
    ScaleUnit::Inflected {
        singular,
        plural: Some(plural),
        avoid_plural_in_number: false,
        avoid_prefix_exception: &[],
    }
}

pub static FRENCH: LanguagePack = LanguagePack {
    tag: "fr",
    base: [
        "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
        "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize",
        "dix-sept", "dix-huit", "dix-neuf",
    ],
    tens: [
        "", "", "vingt", "trente", "quarante", "cinquante", "soixante", "soixante-dix",
        "quatre-vingt", "quatre-vingt-dix",
    ],
    base_separator: "-",
    unit_separator: None,
    negative_word: "moins",
    dot_word: "point",
    units: &[
        ScaleUnit::Inflected {
            singular: "cent",
            plural: Some("cents"),
            avoid_plural_in_number: true,
            avoid_prefix_exception: &["1"],
        },
        ScaleUnit::Inflected {
            singular: "mille",
            plural: None,
            avoid_plural_in_number: false,
            avoid_prefix_exception: &["1"],
        },
        inflected("million", "millions"),
        inflected("milliard", "milliards"),
        inflected("billion", "billions"),
        inflected("billiard", "billiards"),
        inflected("trillion", "trillions"),
        inflected("trilliard", "trilliards"),
        inflected("quadrillion", "quadrillions"),
        inflected("quadrilliard", "quadrilliards"),
        inflected("quintillion", "quintillions"),
        inflected("quintilliard", "quintilliards"),
        inflected("sextillion", "sextillions"),
        inflected("sextilliard", "sextilliards"),
        inflected("septillion", "septillions"),
        inflected("septilliard", "septilliards"),
        inflected("octillion", "octillions"),
    ],
    exceptions: &[
        ("21", "vingt et un"),
        ("31", "trente et un"),
        ("41", "quarante et un"),
        ("51", "cinquante et un"),
        ("61", "soixante et un"),
        ("71", "soixante-onze"),
        ("72", "soixante-douze"),
        ("73", "soixante-treize"),
        ("74", "soixante-quatorze"),
        ("75", "soixante-quinze"),
        ("76", "soixante-seize"),
        ("77", "soixante-dix-sept"),
        ("78", "soixante-dix-huit"),
        ("79", "soixante-dix-neuf"),
        ("80", "quatre-vingts"),
        ("91", "quatre-vingt-onze"),
        ("92", "quatre-vingt-douze"),
        ("93", "quatre-vingt-treize"),
        ("94", "quatre-vingt-quatorze"),
        ("95", "quatre-vingt-quinze"),
        ("96", "quatre-vingt-seize"),
        ("97", "quatre-vingt-dix-sept"),
        ("98", "quatre-vingt-dix-huit"),
        ("99", "quatre-vingt-dix-neuf"),
    ],
    use_long_scale: false,
};
