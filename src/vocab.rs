//! Shared vocabulary tables used across the extractors.
//!
//! All tables are immutable statics loaded once at first use and shared by
//! reference, so cross-extractor invariants (a card-type token never repeats
//! a card-set token, team names never leak into player names) can be tested
//! as pure functions of the same data every extractor sees.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Team names
// ---------------------------------------------------------------------------

/// Franchise nicknames for the major North American leagues plus a handful
/// of common soccer club tokens. Stripped before set detection and player
/// name extraction so a team adjacent to a set or surname cannot corrupt
/// either.
pub static TEAM_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // NFL
        "cardinals", "falcons", "ravens", "bills", "panthers", "bears",
        "bengals", "browns", "cowboys", "broncos", "lions", "packers",
        "texans", "colts", "jaguars", "chiefs", "raiders", "chargers",
        "rams", "dolphins", "vikings", "patriots", "saints", "giants",
        "jets", "eagles", "steelers", "49ers", "niners", "seahawks",
        "buccaneers", "bucs", "titans", "commanders", "redskins",
        // MLB
        "diamondbacks", "braves", "orioles", "red sox", "cubs",
        "white sox", "reds", "guardians", "indians", "rockies", "tigers",
        "astros", "royals", "angels", "dodgers", "marlins", "brewers",
        "twins", "mets", "yankees", "athletics", "phillies", "pirates",
        "padres", "mariners", "nationals", "rays", "rangers", "blue jays",
        // NBA
        "hawks", "celtics", "nets", "hornets", "bulls", "cavaliers",
        "cavs", "mavericks", "mavs", "nuggets", "pistons", "warriors",
        "rockets", "pacers", "clippers", "lakers", "grizzlies", "heat",
        "bucks", "timberwolves", "wolves", "pelicans", "knicks", "thunder",
        "magic", "76ers", "sixers", "suns", "trail blazers", "blazers",
        "kings", "spurs", "raptors", "jazz", "wizards",
        // NHL
        "ducks", "coyotes", "bruins", "sabres", "flames", "hurricanes",
        "blackhawks", "avalanche", "blue jackets", "stars", "red wings",
        "oilers", "kraken", "canadiens", "predators", "devils",
        "islanders", "senators", "flyers", "penguins", "sharks", "blues",
        "lightning", "maple leafs", "canucks", "golden knights", "capitals",
        "wild", "jets",
        // Soccer
        "united", "arsenal", "chelsea", "liverpool", "barcelona",
        "real madrid", "juventus", "psg", "inter miami",
    ])
});

// ---------------------------------------------------------------------------
// Card jargon
// ---------------------------------------------------------------------------

/// Brand, product-line, and descriptor tokens that can never be part of a
/// player's name. Consulted by the player name extractor after the numeric
/// and grading strips.
pub static CARD_JARGON: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Brands and product lines
        "topps", "panini", "bowman", "donruss", "fleer", "upper", "deck",
        "leaf", "score", "select", "prizm", "mosaic", "optic", "chrome",
        "heritage", "stadium", "club", "gypsy", "queen", "allen",
        "ginter", "finest", "sapphire", "contenders", "immaculate",
        "national", "treasures", "obsidian", "phoenix", "absolute",
        "spectra", "certified", "elite", "prestige", "playbook", "crown",
        "royale", "chronicles", "illusions", "legacy", "luminance",
        "majestic", "origins", "noir", "one", "flawless", "impeccable",
        "limited", "revolution", "status", "torque", "totally", "unparalleled",
        "zenith", "classics", "clearly", "rated", "sp", "spx", "exquisite",
        "pokemon", "skybox", "hoops", "metal", "universe", "premier",
        "update", "series", "archives", "big", "league", "fire", "gallery",
        "inception", "dynasty", "definitive", "museum", "tribute",
        "tier", "gold", "label", "holiday", "opening", "day", "chrome",
        "platinum", "anniversary", "wwe", "ufc", "draft", "picks", "prospects",
        "prospect", "1st", "edition", "collection", "young", "guns", "canvas",
        // Parallel and finish words
        "refractor", "holo", "foil", "lazer", "laser", "wave", "velocity",
        "hyper", "disco", "shimmer", "cracked", "ice", "scope", "pulsar",
        "snakeskin", "camo", "tiger", "zebra", "dragon", "choice",
        "nebula", "galactic", "fast", "break", "reactive", "flash",
        "red", "blue", "green", "orange", "purple", "pink", "teal",
        "bronze", "silver", "black", "white", "yellow", "aqua", "neon",
        "fuchsia", "magenta", "ruby", "emerald", "sepia", "atomic",
        "xfractor", "x-fractor", "superfractor", "die-cut", "diecut",
        // Generic descriptors
        "rookie", "rc", "auto", "autograph", "autographed", "signed",
        "signature", "patch", "relic", "jersey", "insert", "parallel",
        "variation", "ssp", "sp", "case", "hit", "card", "hot", "box",
        "hobby", "retail", "mega", "blaster", "numbered", "graded",
        "base", "rare", "invest", "mint", "gem", "psa", "bgs", "sgc",
        "cgc", "pop", "low", "hof", "goat", "nm", "vintage", "rare",
        "sealed", "pack", "fresh", "qty", "ct", "lot",
    ])
});

// ---------------------------------------------------------------------------
// Grading noise
// ---------------------------------------------------------------------------

/// Tokens the normalizer strips outright, with or without trailing digits.
pub static GRADING_TERMS: &[&str] = &[
    "psa", "bgs", "sgc", "cgc", "csg", "hga", "gma",
    "gem", "mint", "mt", "nm", "nrmt", "graded", "grade", "pop",
];

// ---------------------------------------------------------------------------
// Composer stoplist
// ---------------------------------------------------------------------------

/// Whole words removed from the composed summary title as a final cleanup:
/// sport names (the set label already implies them), leftover grading
/// jargon, and a small list of team abbreviations that survive extraction.
pub static UNWANTED_SUMMARY_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "football", "baseball", "basketball", "hockey", "soccer", "golf",
        "wrestling", "racing", "gem", "mint", "psa", "bgs", "sgc", "pop",
        "nfl", "mlb", "nba", "nhl", "hou", "dal", "lad", "nyy", "bos",
        "phi", "kc", "sf", "gb", "ne", "lv", "lac", "tb",
    ])
});

// ---------------------------------------------------------------------------
// Player-name repair denylist
// ---------------------------------------------------------------------------

/// Single-token extractor outputs observed to be wrong (usually a given name
/// left behind after a team name swallowed the surname, or jargon that made
/// it through the filters). The repair pass discards these and re-extracts.
/// Curated by hand as bad outputs are noticed; not self-correcting.
pub static REPAIR_DENYLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "anthony", "justin", "michael", "chris", "josh", "jordan",
        "victor", "jayden", "marvin", "bryce", "caleb", "drake",
        "downtown", "kaboom", "genesis", "velocity", "emergent",
        "essentials", "premium", "collegiate", "luck", "lottery",
    ])
});

// ---------------------------------------------------------------------------
// Sport keyword indicators
// ---------------------------------------------------------------------------

/// Indicator table for one sport: any whole-word match classifies the title.
pub struct SportIndicators {
    pub sport: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keyword-indicator tables, checked in fixed priority order. Earlier tables
/// win because their vocabularies are the most distinctive; the big-three
/// ball sports come after Wrestling/Pokemon/Racing so that e.g. a WWE card
/// mentioning a "champion" never lands in Football.
pub static SPORT_INDICATORS: &[SportIndicators] = &[
    SportIndicators {
        sport: "Wrestling",
        keywords: &[
            "wwe", "wwf", "aew", "wcw", "wrestling", "wrestlemania",
            "undertaker", "hulk hogan", "ric flair", "john cena",
            "roman reigns", "cody rhodes", "rey mysterio",
        ],
    },
    SportIndicators {
        sport: "Pokemon",
        keywords: &[
            "pokemon", "pikachu", "charizard", "blastoise", "venusaur",
            "eevee", "mewtwo", "mew", "gengar", "snorlax", "rayquaza",
            "umbreon", "sylveon", "gx", "vmax", "vstar", "trainer",
        ],
    },
    SportIndicators {
        sport: "Racing",
        keywords: &[
            "nascar", "formula 1", "formula one", "f1", "grand prix",
            "verstappen", "hamilton", "leclerc", "norris", "daytona",
            "earnhardt", "indycar", "moto gp",
        ],
    },
    SportIndicators {
        sport: "Football",
        keywords: &[
            "football", "nfl", "quarterback", "qb", "wide receiver",
            "running back", "linebacker", "touchdown", "super bowl",
            "mahomes", "brady", "burrow", "stroud", "allen", "herbert",
            "jefferson", "chase", "lamb", "daniels", "nix", "maye",
            "cardinals", "falcons", "bills", "bears", "bengals", "cowboys",
            "broncos", "packers", "texans", "colts", "jaguars", "chiefs",
            "chargers", "dolphins", "vikings", "patriots", "saints",
            "eagles", "steelers", "49ers", "seahawks", "buccaneers",
            "titans", "commanders",
        ],
    },
    SportIndicators {
        sport: "Basketball",
        keywords: &[
            "basketball", "nba", "wnba", "point guard", "dunk", "hoops",
            "lebron", "curry", "durant", "giannis", "luka", "doncic",
            "jokic", "wembanyama", "morant", "tatum", "booker", "caitlin",
            "clark", "celtics", "lakers", "warriors", "bulls", "knicks",
            "nets", "bucks", "suns", "spurs", "mavericks", "nuggets",
            "pistons", "raptors", "76ers", "grizzlies", "timberwolves",
            "pelicans", "thunder",
        ],
    },
    SportIndicators {
        sport: "Baseball",
        keywords: &[
            "baseball", "mlb", "pitcher", "shortstop", "home run",
            "world series", "ohtani", "trout", "judge", "soto", "acuna",
            "betts", "witt", "skenes", "elly", "de la cruz", "gunnar",
            "henderson", "yankees", "dodgers", "braves", "astros", "mets",
            "cubs", "red sox", "white sox", "orioles", "padres", "phillies",
            "mariners", "guardians", "royals", "pirates", "reds", "rays",
            "twins", "brewers", "diamondbacks", "rockies", "marlins",
            "nationals", "athletics", "blue jays", "tigers", "angels",
        ],
    },
    SportIndicators {
        sport: "Hockey",
        keywords: &[
            "hockey", "nhl", "goalie", "young guns", "mcdavid", "crosby",
            "ovechkin", "bedard", "matthews", "makar", "gretzky",
            "maple leafs", "canadiens", "bruins", "blackhawks", "oilers",
            "flames", "canucks", "avalanche", "penguins", "capitals",
            "red wings", "sabres", "islanders", "kraken", "predators",
            "senators", "flyers", "lightning", "golden knights",
        ],
    },
    SportIndicators {
        sport: "Soccer",
        keywords: &[
            "soccer", "fifa", "premier league", "la liga", "uefa", "mls",
            "messi", "ronaldo", "mbappe", "haaland", "bellingham", "yamal",
            "striker", "midfielder", "barcelona", "real madrid", "arsenal",
            "chelsea", "liverpool", "manchester", "juventus",
        ],
    },
    SportIndicators {
        sport: "Golf",
        keywords: &[
            "golf", "pga", "masters", "tiger woods", "scheffler", "mcilroy",
            "open championship", "ryder cup",
        ],
    },
    SportIndicators {
        sport: "TCG",
        keywords: &[
            "magic the gathering", "mtg", "yugioh", "yu-gi-oh", "lorcana",
            "flesh and blood", "one piece card", "dragon ball super",
            "metazoo", "digimon",
        ],
    },
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Remove every team-name occurrence from `text` (already lower-cased).
/// Multi-word nicknames are removed as phrases before single words.
pub fn strip_team_names(text: &str) -> String {
    let mut out = text.to_string();
    // Phrases first so "red sox" does not leave a dangling "red".
    let mut phrases: Vec<&&str> = TEAM_NAMES.iter().filter(|t| t.contains(' ')).collect();
    phrases.sort();
    for phrase in phrases {
        out = remove_whole_phrase(&out, phrase);
    }
    let tokens: Vec<String> = out
        .split_whitespace()
        .filter(|tok| !TEAM_NAMES.contains(*tok))
        .map(|t| t.to_string())
        .collect();
    tokens.join(" ")
}

/// Remove a whole-word phrase from `text`, collapsing the hole.
pub fn remove_whole_phrase(text: &str, phrase: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        match find_whole(rest, phrase) {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                rest = &rest[pos + phrase.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Find `needle` in `haystack` at word boundaries only.
fn find_whole(haystack: &str, needle: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(rel) = haystack[start..].find(needle) {
        let pos = start + rel;
        let before_ok = pos == 0
            || !haystack[..pos]
                .chars()
                .next_back()
                .map(|c| c.is_alphanumeric())
                .unwrap_or(false);
        let after = pos + needle.len();
        let after_ok = after >= haystack.len()
            || !haystack[after..]
                .chars()
                .next()
                .map(|c| c.is_alphanumeric())
                .unwrap_or(false);
        if before_ok && after_ok {
            return Some(pos);
        }
        start = pos + needle.len().max(1);
    }
    None
}

/// Whole-word containment test against an already lower-cased haystack.
pub fn contains_whole_word(haystack: &str, word: &str) -> bool {
    find_whole(haystack, word).is_some()
}
