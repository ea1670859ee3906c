//! Parallel/card-type detection.
//!
//! Parallel names collide with color words, set names, and plain English
//! ("Green", "Wave", "Chrome"), so detection runs over a priority-tiered
//! pattern table rather than an if-chain:
//!
//! - tier 2: fully-qualified compound parallels unique to a product line.
//!   The first tier-2 match wins outright and discards everything else.
//! - tier 1: two-color slash compounds, normalized to "X and Y".
//! - tier 0: single generic terms, collected additively when nothing
//!   higher matched.
//!
//! The collected label then passes through word/word-pair dedup, a fixed
//! rewrite table, and finally suppression of any token already present in
//! the extracted card set. Card set and card type together never repeat a
//! token; a fully suppressed type reverts to `"Base"`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

/// Sentinel for "no parallel detected". Never null.
pub const BASE_TYPE: &str = "Base";

// ---------------------------------------------------------------------------
// Pattern table
// ---------------------------------------------------------------------------

struct TypePattern {
    /// Whole-word substring matched against the normalized title.
    pattern: &'static str,
    /// Canonical label contributed on match.
    canonical: &'static str,
    tier: u8,
}

const fn tp(pattern: &'static str, canonical: &'static str, tier: u8) -> TypePattern {
    TypePattern {
        pattern,
        canonical,
        tier,
    }
}

static TYPE_PATTERNS: Lazy<Vec<TypePattern>> = Lazy::new(|| {
    vec![
        // -- Tier 2: product-specific compound parallels -------------------
        tp("black and green die-cut prizm", "Black and Green Die-Cut Prizm", 2),
        tp("red white and blue prizm", "Red White & Blue Prizm", 2),
        tp("red white blue prizm", "Red White & Blue Prizm", 2),
        tp("disco red prizm", "Disco Red Prizm", 2),
        tp("disco prizm", "Disco Prizm", 2),
        tp("white sparkle prizm", "White Sparkle Prizm", 2),
        tp("white sparkle", "White Sparkle", 2),
        tp("gold vinyl prizm", "Gold Vinyl Prizm", 2),
        tp("gold vinyl", "Gold Vinyl", 2),
        tp("black finite", "Black Finite", 2),
        tp("color blast", "Color Blast", 2),
        tp("genesis prizm", "Genesis Prizm", 2),
        tp("snakeskin prizm", "Snakeskin Prizm", 2),
        tp("tiger stripes prizm", "Tiger Stripes Prizm", 2),
        tp("cracked ice prizm", "Cracked Ice Prizm", 2),
        tp("cracked ice", "Cracked Ice", 2),
        tp("fast break prizm", "Fast Break Prizm", 2),
        tp("choice nebula", "Choice Nebula", 2),
        tp("galactic gems", "Galactic Gems", 2),
        tp("kaboom", "Kaboom", 2),
        tp("downtown", "Downtown", 2),
        tp("superfractor", "Superfractor", 2),
        tp("x-fractor", "X-Fractor", 2),
        tp("xfractor", "X-Fractor", 2),
        tp("gold rainbow", "Gold Rainbow", 2),
        tp("sepia refractor", "Sepia Refractor", 2),
        tp("negative refractor", "Negative Refractor", 2),
        tp("rainbow foil", "Rainbow Foil", 2),
        tp("clear cut", "Clear Cut", 2),
        tp("exclusives ice", "Exclusives Ice", 2),
        tp("stained glass", "Stained Glass", 2),
        tp("dragon scale", "Dragon Scale", 2),
        tp("planetary pursuit", "Planetary Pursuit", 2),
        tp("reactive gold", "Reactive Gold", 2),
        tp("reactive blue", "Reactive Blue", 2),
        // -- Tier 0: additive single terms ---------------------------------
        tp("refractor", "Refractor", 0),
        tp("prizm", "Prizm", 0),
        tp("holo", "Holo", 0),
        tp("mojo", "Mojo", 0),
        tp("shimmer", "Shimmer", 0),
        tp("wave", "Wave", 0),
        tp("velocity", "Velocity", 0),
        tp("hyper", "Hyper", 0),
        tp("lazer", "Lazer", 0),
        tp("laser", "Lazer", 0),
        tp("disco", "Disco", 0),
        tp("pulsar", "Pulsar", 0),
        tp("scope", "Scope", 0),
        tp("flash", "Flash", 0),
        tp("atomic", "Atomic", 0),
        tp("camo", "Camo", 0),
        tp("zebra", "Zebra", 0),
        tp("snakeskin", "Snakeskin", 0),
        tp("die-cut", "Die-Cut", 0),
        tp("die cut", "Die-Cut", 0),
        tp("sparkle", "Sparkle", 0),
        tp("ice", "Ice", 0),
        tp("chrome", "Chrome", 0),
        tp("sapphire", "Sapphire", 0),
        tp("red", "Red", 0),
        tp("blue", "Blue", 0),
        tp("green", "Green", 0),
        tp("orange", "Orange", 0),
        tp("purple", "Purple", 0),
        tp("pink", "Pink", 0),
        tp("teal", "Teal", 0),
        tp("aqua", "Aqua", 0),
        tp("gold", "Gold", 0),
        tp("silver", "Silver", 0),
        tp("bronze", "Bronze", 0),
        tp("black", "Black", 0),
        tp("white", "White", 0),
        tp("yellow", "Yellow", 0),
        tp("neon", "Neon", 0),
        tp("ruby", "Ruby", 0),
        tp("emerald", "Emerald", 0),
        tp("sepia", "Sepia", 0),
        tp("rookies", "Rookies", 0),
    ]
});

/// Color words eligible for tier-1 slash-compound normalization.
static SLASH_COLORS: &[&str] = &[
    "red", "blue", "green", "orange", "purple", "pink", "teal", "aqua",
    "gold", "silver", "bronze", "black", "white", "yellow", "neon",
];

static SLASH_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([a-z]+)/([a-z]+)\b").unwrap());

/// Post-processing rewrites applied to the assembled label. Canonicalizes
/// inconsistent orderings and merges near-duplicate spellings.
static REWRITES: &[(&str, &str)] = &[
    ("Blue Red White", "Red White & Blue"),
    ("Red White Blue", "Red White & Blue"),
    ("White Blue Red", "Red White & Blue"),
    ("Red White And Blue", "Red White & Blue"),
    ("Rookies", "Rookie"),
    ("Die Cut", "Die-Cut"),
    ("Laser", "Lazer"),
];

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// A single pattern-table hit, kept with its title position so additive
/// labels read in the order the seller wrote them.
struct TypeMatch {
    canonical: &'static str,
    tier: u8,
    pos: usize,
}

/// Detect the parallel/card-type for a normalized title.
///
/// Team names are stripped from a working copy first, the same way the set
/// extractor strips its own, so a color inside a nickname ("Red Sox",
/// "White Sox") cannot pose as a parallel. `card_set` is the Set/Brand
/// extractor's output for the same title; any detected token already
/// embedded in it is suppressed so the two fields never repeat a word.
/// Returns [`BASE_TYPE`] when nothing survives.
pub fn extract_card_type(normalized_title: &str, card_set: Option<&str>) -> String {
    let stripped = vocab::strip_team_names(normalized_title);
    let normalized_title = stripped.as_str();
    let mut matches: Vec<TypeMatch> = Vec::new();

    for pat in TYPE_PATTERNS.iter() {
        if let Some(pos) = find_whole_word(normalized_title, pat.pattern) {
            matches.push(TypeMatch {
                canonical: pat.canonical,
                tier: pat.tier,
                pos,
            });
        }
    }

    // Tier-1 slash compounds, e.g. "green/yellow" -> "Green and Yellow".
    let mut slash_labels: Vec<(String, usize)> = Vec::new();
    for cap in SLASH_PAIR.captures_iter(normalized_title) {
        let (a, b) = (&cap[1], &cap[2]);
        if SLASH_COLORS.contains(&a) && SLASH_COLORS.contains(&b) {
            let label = format!("{} and {}", title_case_word(a), title_case_word(b));
            let pos = cap.get(0).map(|m| m.start()).unwrap_or(0);
            slash_labels.push((label, pos));
        }
    }

    // A tier-2 hit wins outright; earliest in the title on multiple hits.
    if let Some(best) = matches
        .iter()
        .filter(|m| m.tier >= 2)
        .min_by_key(|m| (m.pos, std::cmp::Reverse(m.canonical.len())))
    {
        return finish(best.canonical.to_string(), card_set, normalized_title);
    }

    // Otherwise concatenate tier-0/1 hits in title order.
    let mut parts: Vec<(String, usize)> = slash_labels;
    for m in matches.iter().filter(|m| m.tier < 2) {
        parts.push((m.canonical.to_string(), m.pos));
    }
    parts.sort_by_key(|(_, pos)| *pos);

    let slash_words: Vec<String> = parts
        .iter()
        .filter(|(label, _)| label.contains(" and "))
        .flat_map(|(label, _)| label.split_whitespace().map(|w| w.to_string()).collect::<Vec<_>>())
        .collect();

    let mut words: Vec<String> = Vec::new();
    for (label, _) in &parts {
        for word in label.split_whitespace() {
            // A color consumed by a slash compound must not repeat alone.
            if !label.contains(" and ") && slash_words.iter().any(|w| w.eq_ignore_ascii_case(word)) {
                continue;
            }
            words.push(word.to_string());
        }
    }

    let deduped = dedupe_words(words);
    if deduped.is_empty() {
        return BASE_TYPE.to_string();
    }

    finish(deduped.join(" "), card_set, normalized_title)
}

/// Rewrites, then card-set suppression, then the Base fallback.
fn finish(label: String, card_set: Option<&str>, _title: &str) -> String {
    let mut label = label;
    for (from, to) in REWRITES {
        if label.eq_ignore_ascii_case(from) {
            label = to.to_string();
        } else if let Some(stripped) = replace_word_run(&label, from, to) {
            label = stripped;
        }
    }

    if let Some(set) = card_set {
        let set_lower = set.to_lowercase();
        let kept: Vec<&str> = label
            .split_whitespace()
            .filter(|w| !vocab::contains_whole_word(&set_lower, &w.to_lowercase()))
            .collect();
        label = kept.join(" ");
    }

    if label.trim().is_empty() {
        BASE_TYPE.to_string()
    } else {
        label.trim().to_string()
    }
}

/// Remove exact repeated words and repeated adjacent word pairs.
fn dedupe_words(words: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for word in words {
        if out.iter().any(|w| w.eq_ignore_ascii_case(&word)) {
            continue;
        }
        out.push(word);
    }
    // Repeated pairs ("Cracked Ice Cracked Ice") collapse once words are
    // unique, but guard against A B A B sequences that survive as A B.
    let mut i = 0;
    while i + 3 < out.len() {
        if out[i].eq_ignore_ascii_case(&out[i + 2]) && out[i + 1].eq_ignore_ascii_case(&out[i + 3]) {
            out.drain(i + 2..i + 4);
        } else {
            i += 1;
        }
    }
    out
}

/// Case-insensitive whole-word-run replacement. Returns `None` when the run
/// is absent.
fn replace_word_run(label: &str, from: &str, to: &str) -> Option<String> {
    let lower = label.to_lowercase();
    let from_lower = from.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let from_words: Vec<&str> = from_lower.split_whitespace().collect();
    if from_words.is_empty() || words.len() < from_words.len() {
        return None;
    }
    let orig: Vec<&str> = label.split_whitespace().collect();
    for start in 0..=(words.len() - from_words.len()) {
        if words[start..start + from_words.len()] == from_words[..] {
            let mut rebuilt: Vec<&str> = Vec::new();
            rebuilt.extend(&orig[..start]);
            rebuilt.push(to);
            rebuilt.extend(&orig[start + from_words.len()..]);
            return Some(rebuilt.join(" "));
        }
    }
    None
}

fn find_whole_word(haystack: &str, needle: &str) -> Option<usize> {
    if vocab::contains_whole_word(haystack, needle) {
        haystack.find(needle)
    } else {
        None
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
