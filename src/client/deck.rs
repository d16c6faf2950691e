//! Built-in kana card catalogue.
//!
//! The basic gojūon table (46 hiragana) with Hepburn romanisation.  Voiced
//! rows, digraphs and katakana can be added as further const tables once the
//! quiz UI grows modes for them.

/// One quiz card: a kana and the romaji answer it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaCard {
    /// The kana shown to the learner.
    pub kana: &'static str,
    /// Expected romanised answer (Hepburn).
    pub romaji: &'static str,
}

/// The 46 basic hiragana.
pub const GOJUON: &[KanaCard] = &[
    KanaCard { kana: "あ", romaji: "a" },
    KanaCard { kana: "い", romaji: "i" },
    KanaCard { kana: "う", romaji: "u" },
    KanaCard { kana: "え", romaji: "e" },
    KanaCard { kana: "お", romaji: "o" },
    KanaCard { kana: "か", romaji: "ka" },
    KanaCard { kana: "き", romaji: "ki" },
    KanaCard { kana: "く", romaji: "ku" },
    KanaCard { kana: "け", romaji: "ke" },
    KanaCard { kana: "こ", romaji: "ko" },
    KanaCard { kana: "さ", romaji: "sa" },
    KanaCard { kana: "し", romaji: "shi" },
    KanaCard { kana: "す", romaji: "su" },
    KanaCard { kana: "せ", romaji: "se" },
    KanaCard { kana: "そ", romaji: "so" },
    KanaCard { kana: "た", romaji: "ta" },
    KanaCard { kana: "ち", romaji: "chi" },
    KanaCard { kana: "つ", romaji: "tsu" },
    KanaCard { kana: "て", romaji: "te" },
    KanaCard { kana: "と", romaji: "to" },
    KanaCard { kana: "な", romaji: "na" },
    KanaCard { kana: "に", romaji: "ni" },
    KanaCard { kana: "ぬ", romaji: "nu" },
    KanaCard { kana: "ね", romaji: "ne" },
    KanaCard { kana: "の", romaji: "no" },
    KanaCard { kana: "は", romaji: "ha" },
    KanaCard { kana: "ひ", romaji: "hi" },
    KanaCard { kana: "ふ", romaji: "fu" },
    KanaCard { kana: "へ", romaji: "he" },
    KanaCard { kana: "ほ", romaji: "ho" },
    KanaCard { kana: "ま", romaji: "ma" },
    KanaCard { kana: "み", romaji: "mi" },
    KanaCard { kana: "む", romaji: "mu" },
    KanaCard { kana: "め", romaji: "me" },
    KanaCard { kana: "も", romaji: "mo" },
    KanaCard { kana: "や", romaji: "ya" },
    KanaCard { kana: "ゆ", romaji: "yu" },
    KanaCard { kana: "よ", romaji: "yo" },
    KanaCard { kana: "ら", romaji: "ra" },
    KanaCard { kana: "り", romaji: "ri" },
    KanaCard { kana: "る", romaji: "ru" },
    KanaCard { kana: "れ", romaji: "re" },
    KanaCard { kana: "ろ", romaji: "ro" },
    KanaCard { kana: "わ", romaji: "wa" },
    KanaCard { kana: "を", romaji: "wo" },
    KanaCard { kana: "ん", romaji: "n" },
];
