//! Set/brand detection.
//!
//! A strictly ordered cascade of substring rules over the normalized,
//! team-stripped title. Most-specific products come first; the first match
//! wins. Generic single-word rules at the bottom carry `unless` guards so
//! a fully-qualified product earlier in the table can never be shadowed by
//! its generic suffix (e.g. bare "prizm" never fires on a Panini Prizm
//! product title that the qualified rule already claimed).

use once_cell::sync::Lazy;

use crate::vocab;

// ---------------------------------------------------------------------------
// SetRule
// ---------------------------------------------------------------------------

struct SetRule {
    /// Substring that must appear in the team-stripped normalized title.
    pattern: &'static str,
    /// Canonical set label.
    label: &'static str,
    /// Substrings whose presence vetoes this rule.
    unless: &'static [&'static str],
}

const fn rule(pattern: &'static str, label: &'static str) -> SetRule {
    SetRule {
        pattern,
        label,
        unless: &[],
    }
}

static SET_RULES: Lazy<Vec<SetRule>> = Lazy::new(|| {
    vec![
        // -- Panini family, qualified products first -----------------------
        rule("panini prizm monopoly wnba", "Panini Prizm Monopoly WNBA"),
        rule("panini prizm monopoly", "Panini Prizm Monopoly"),
        rule("panini prizm draft picks", "Panini Prizm Draft Picks"),
        rule("prizm draft picks", "Panini Prizm Draft Picks"),
        rule("panini prizm wnba", "Panini Prizm WNBA"),
        rule("panini prizm", "Panini Prizm"),
        rule("panini mosaic", "Panini Mosaic"),
        rule("panini select", "Panini Select"),
        rule("panini obsidian", "Panini Obsidian"),
        rule("panini national treasures", "Panini National Treasures"),
        rule("national treasures", "Panini National Treasures"),
        rule("panini immaculate", "Panini Immaculate"),
        rule("panini flawless", "Panini Flawless"),
        rule("panini spectra", "Panini Spectra"),
        rule("panini phoenix", "Panini Phoenix"),
        rule("panini absolute", "Panini Absolute"),
        rule("panini chronicles", "Panini Chronicles"),
        rule("panini contenders optic", "Panini Contenders Optic"),
        rule("panini contenders", "Panini Contenders"),
        rule("donruss optic", "Donruss Optic"),
        rule("panini donruss", "Donruss"),
        rule("donruss elite", "Donruss Elite"),
        rule("rated rookie", "Donruss"),
        rule("panini prestige", "Panini Prestige"),
        rule("panini playbook", "Panini Playbook"),
        rule("panini crown royale", "Panini Crown Royale"),
        rule("panini legacy", "Panini Legacy"),
        rule("panini luminance", "Panini Luminance"),
        rule("panini zenith", "Panini Zenith"),
        rule("panini one", "Panini One"),
        rule("panini origins", "Panini Origins"),
        rule("panini noir", "Panini Noir"),
        rule("panini limited", "Panini Limited"),
        rule("panini certified", "Panini Certified"),
        rule("panini revolution", "Panini Revolution"),
        rule("panini illusions", "Panini Illusions"),
        rule("panini score", "Score"),
        // -- Bowman family -------------------------------------------------
        rule("bowman chrome sapphire", "Bowman Chrome Sapphire"),
        rule("bowman sapphire", "Bowman Chrome Sapphire"),
        rule("bowman chrome university", "Bowman Chrome University"),
        rule("bowman chrome draft", "Bowman Chrome Draft"),
        rule("bowman chrome", "Bowman Chrome"),
        rule("bowman draft", "Bowman Draft"),
        rule("bowman sterling", "Bowman Sterling"),
        rule("bowman platinum", "Bowman Platinum"),
        rule("bowman university", "Bowman University"),
        rule("bowman inception", "Bowman Inception"),
        rule("bowman heritage", "Bowman Heritage"),
        rule("bowman best", "Bowman's Best"),
        // -- Topps family --------------------------------------------------
        rule("topps chrome sapphire", "Topps Chrome Sapphire"),
        rule("topps chrome update", "Topps Chrome Update"),
        rule("topps chrome cosmic", "Topps Chrome Cosmic"),
        rule("topps chrome black", "Topps Chrome Black"),
        rule("topps chrome", "Topps Chrome"),
        rule("topps update", "Topps Update"),
        rule("topps heritage", "Topps Heritage"),
        rule("topps stadium club", "Stadium Club"),
        rule("stadium club", "Stadium Club"),
        rule("topps gypsy queen", "Topps Gypsy Queen"),
        rule("gypsy queen", "Topps Gypsy Queen"),
        rule("allen ginter", "Allen & Ginter"),
        rule("allen and ginter", "Allen & Ginter"),
        rule("topps finest", "Topps Finest"),
        rule("topps archives", "Topps Archives"),
        rule("topps gallery", "Topps Gallery"),
        rule("topps fire", "Topps Fire"),
        rule("topps big league", "Topps Big League"),
        rule("topps opening day", "Topps Opening Day"),
        rule("topps inception", "Topps Inception"),
        rule("topps dynasty", "Topps Dynasty"),
        rule("topps definitive", "Topps Definitive"),
        rule("topps museum", "Topps Museum Collection"),
        rule("topps tribute", "Topps Tribute"),
        rule("topps tier one", "Topps Tier One"),
        rule("topps gold label", "Topps Gold Label"),
        rule("topps holiday", "Topps Holiday"),
        rule("topps pristine", "Topps Pristine"),
        rule("topps now", "Topps Now"),
        // -- Upper Deck family ---------------------------------------------
        rule("upper deck young guns", "Upper Deck Young Guns"),
        rule("upper deck sp authentic", "SP Authentic"),
        rule("sp authentic", "SP Authentic"),
        rule("upper deck spx", "SPx"),
        rule("upper deck the cup", "Upper Deck The Cup"),
        rule("upper deck ice", "Upper Deck Ice"),
        rule("upper deck exquisite", "Upper Deck Exquisite"),
        rule("upper deck", "Upper Deck"),
        // -- Fleer / Skybox / other ----------------------------------------
        rule("fleer ultra", "Fleer Ultra"),
        rule("fleer metal universe", "Metal Universe"),
        rule("metal universe", "Metal Universe"),
        rule("fleer", "Fleer"),
        rule("skybox premium", "Skybox Premium"),
        rule("skybox", "Skybox"),
        rule("nba hoops", "NBA Hoops"),
        rule("leaf metal", "Leaf Metal"),
        // -- Generic tails, guarded against their qualified parents --------
        // First-match-wins ordering already prevents shadowing; the guards
        // make the intent explicit and keep the table safe to reorder.
        SetRule {
            pattern: "prizm",
            label: "Panini Prizm",
            unless: &["panini prizm", "prizm draft picks"],
        },
        SetRule {
            pattern: "mosaic",
            label: "Panini Mosaic",
            unless: &["panini mosaic"],
        },
        SetRule {
            pattern: "optic",
            label: "Donruss Optic",
            unless: &["donruss optic", "contenders optic"],
        },
        SetRule {
            pattern: "select",
            label: "Panini Select",
            unless: &["panini select"],
        },
        SetRule {
            pattern: "donruss",
            label: "Donruss",
            unless: &["panini donruss", "donruss optic", "donruss elite"],
        },
        SetRule {
            pattern: "contenders",
            label: "Panini Contenders",
            unless: &["panini contenders"],
        },
        SetRule {
            pattern: "bowman",
            label: "Bowman",
            unless: &[
                "bowman chrome", "bowman draft", "bowman sterling",
                "bowman platinum", "bowman university", "bowman inception",
                "bowman heritage", "bowman sapphire", "bowman best",
            ],
        },
        SetRule {
            pattern: "topps",
            label: "Topps",
            unless: &[
                "topps chrome", "topps update", "topps heritage",
                "topps stadium club", "topps gypsy queen", "topps finest",
                "topps archives", "topps gallery", "topps fire",
                "topps big league", "topps opening day", "topps inception",
                "topps dynasty", "topps definitive", "topps museum",
                "topps tribute", "topps tier one", "topps gold label",
                "topps holiday", "topps pristine", "topps now",
            ],
        },
        rule("hoops", "NBA Hoops"),
        rule("score", "Score"),
        rule("leaf", "Leaf"),
    ]
});

/// Detect the canonical set/brand label for a normalized title.
///
/// Team names are stripped from a working copy first so a franchise name
/// adjacent to a set name cannot corrupt detection. Returns `None` when no
/// rule matches; the composer simply omits the set.
pub fn extract_card_set(normalized_title: &str) -> Option<&'static str> {
    let stripped = vocab::strip_team_names(normalized_title);
    for rule in SET_RULES.iter() {
        if !stripped.contains(rule.pattern) {
            continue;
        }
        if rule.unless.iter().any(|veto| stripped.contains(veto)) {
            continue;
        }
        return Some(rule.label);
    }
    None
}
