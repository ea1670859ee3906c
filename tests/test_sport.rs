//! Sport classification cascade: external lookup, reference aggregate,
//! keyword indicators, and the Unknown sentinel.

mod common;

use cardtrack::error::{CardtrackError, Result};
use cardtrack::lookup::SportLookup;
use cardtrack::reference::SetReference;
use cardtrack::sport::{SportClassifier, UNKNOWN_SPORT};

/// Canned lookup: answers for one player, misses for everyone else.
struct FixedLookup {
    player: &'static str,
    sport: &'static str,
}

impl SportLookup for FixedLookup {
    fn sport_for_player(&self, name: &str) -> Result<Option<String>> {
        if name.eq_ignore_ascii_case(self.player) {
            Ok(Some(self.sport.to_string()))
        } else {
            Ok(None)
        }
    }
}

/// Lookup that always fails, as a down service would.
struct BrokenLookup;

impl SportLookup for BrokenLookup {
    fn sport_for_player(&self, _name: &str) -> Result<Option<String>> {
        Err(CardtrackError::NotFound("service unavailable".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Stage 1: external lookup
// ---------------------------------------------------------------------------

#[test]
fn player_lookup_answer_wins() {
    let lookup = FixedLookup {
        player: "CJ Stroud",
        sport: "Football",
    };
    let classifier = SportClassifier::new(Some(&lookup as &dyn SportLookup), None);
    assert_eq!(
        classifier.classify("2023 panini prizm cj stroud", Some("CJ Stroud")),
        "Football"
    );
}

#[test]
fn lookup_failure_falls_through_to_keywords() {
    let classifier = SportClassifier::new(Some(&BrokenLookup as &dyn SportLookup), None);
    // Keyword stage catches "texans".
    assert_eq!(
        classifier.classify("2023 prizm cj stroud texans", Some("CJ Stroud")),
        "Football"
    );
}

#[test]
fn lookup_skipped_without_player_name() {
    let lookup = FixedLookup {
        player: "CJ Stroud",
        sport: "Football",
    };
    let classifier = SportClassifier::new(Some(&lookup as &dyn SportLookup), None);
    assert_eq!(classifier.classify("2023 panini prizm", None), UNKNOWN_SPORT);
}

// ---------------------------------------------------------------------------
// Stage 2: reference aggregate
// ---------------------------------------------------------------------------

#[test]
fn reference_aggregate_matches_set_name_in_title() {
    let (ct, _tmp) = common::setup_engine();
    let reference = ct.reference();
    let classifier = SportClassifier::new(None, Some(&reference as &dyn SetReference));
    assert_eq!(
        classifier.classify("2021 donruss optic downtown", None),
        "Football"
    );
}

#[test]
fn reference_aggregate_tie_breaks_lexicographically() {
    let (ct, _tmp) = common::setup_engine();
    let reference = ct.reference();
    let classifier = SportClassifier::new(None, Some(&reference as &dyn SetReference));
    // One Baseball row and one Hockey row both match; Baseball sorts first.
    assert_eq!(
        classifier.classify("topps chrome young guns mashup", None),
        "Baseball"
    );
}

#[test]
fn reference_miss_falls_through_to_keywords() {
    let (ct, _tmp) = common::setup_engine();
    let reference = ct.reference();
    let classifier = SportClassifier::new(None, Some(&reference as &dyn SetReference));
    assert_eq!(
        classifier.classify("2023 prizm pikachu holo", None),
        "Pokemon"
    );
}

// ---------------------------------------------------------------------------
// Stage 3: keyword indicators
// ---------------------------------------------------------------------------

#[test]
fn keyword_priority_order_is_fixed() {
    let classifier = SportClassifier::new(None, None);
    // "wwe" (Wrestling) outranks the football team word in the same title.
    assert_eq!(
        classifier.classify("wwe superstar bears tribute", None),
        "Wrestling"
    );
}

#[test]
fn keyword_whole_word_only() {
    let classifier = SportClassifier::new(None, None);
    // "golfer" must not match the "golf" keyword as a substring.
    assert_eq!(classifier.classify("some golfer story", None), UNKNOWN_SPORT);
}

// ---------------------------------------------------------------------------
// Stage 4: sentinel
// ---------------------------------------------------------------------------

#[test]
fn everything_misses_yields_unknown() {
    let classifier = SportClassifier::new(None, None);
    assert_eq!(
        classifier.classify("1989 regional oddball issue", None),
        UNKNOWN_SPORT
    );
}
