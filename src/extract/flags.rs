//! Rookie and autograph flag detection.
//!
//! Stateless whole-word keyword checks over the normalized title. The two
//! flags are independent booleans; no conflict logic applies.

use crate::vocab::contains_whole_word;

static ROOKIE_TERMS: &[&str] = &[
    "rookie", "rc", "yg", "young guns", "1st bowman", "first bowman", "debut",
];

static AUTOGRAPH_TERMS: &[&str] = &[
    "auto", "autograph", "autographed", "autos", "signed",
    "on card auto", "on card autograph", "sticker auto", "sticker autograph",
];

pub fn is_rookie(normalized_title: &str) -> bool {
    ROOKIE_TERMS
        .iter()
        .any(|term| contains_whole_word(normalized_title, term))
}

pub fn is_autograph(normalized_title: &str) -> bool {
    AUTOGRAPH_TERMS
        .iter()
        .any(|term| contains_whole_word(normalized_title, term))
}
