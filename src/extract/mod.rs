//! Field extractors.
//!
//! Each submodule is an independent, order-insensitive extractor over the
//! listing title. The only cross-extractor dependency is explicit in the
//! card-type signature: it receives the set extractor's output so the two
//! fields never repeat a token.

pub mod card_type;
pub mod flags;
pub mod number;
pub mod player;
pub mod set;
pub mod year;

pub use card_type::{extract_card_type, BASE_TYPE};
pub use flags::{is_autograph, is_rookie};
pub use number::{extract_card_number, extract_print_run};
pub use player::{extract_player_name, repair_player_name};
pub use set::extract_card_set;
pub use year::{extract_year, YearExtraction};
