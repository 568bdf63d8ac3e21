//! Static per-sport team alias tables and name resolution.
//!
//! Tables are definition-ordered slices, loaded once and never mutated.
//! Resolution is deterministic: the first entry that matches wins, so
//! reordering the table changes results.

use strsim::normalized_damerau_levenshtein;

pub const NFL: &str = "americanfootball_nfl";
pub const MLB: &str = "baseball_mlb";
pub const NBA: &str = "basketball_nba";
pub const NHL: &str = "icehockey_nhl";
pub const NCAAF: &str = "americanfootball_ncaaf";
pub const UNKNOWN_SPORT: &str = "unknown";

/// How a name matched an alias set. `Partial` covers the loose
/// substring/fuzzy tier; callers that need precision can reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConfidence {
    Exact,
    Partial,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMatch {
    pub canonical: &'static str,
    pub confidence: MatchConfidence,
}

struct AliasEntry {
    sport: &'static str,
    canonical: &'static str,
    aliases: &'static [&'static str],
}

const SUFFIXES: &[&str] = &[
    " fc",
    " football club",
    " soccer club",
    " sc",
    " basketball",
    " baseball",
    " hockey",
    " football",
    " university",
    " college",
    " state",
    " tech",
];

// Fuzzy matching on abbreviations produces noise; only full names qualify.
const FUZZY_MIN_ALIAS_LEN: usize = 5;
const FUZZY_THRESHOLD: f64 = 0.85;

static TEAM_ALIASES: &[AliasEntry] = &[
    // NFL
    AliasEntry { sport: NFL, canonical: "patriots", aliases: &["new england patriots", "ne patriots", "ne", "new england", "patriots"] },
    AliasEntry { sport: NFL, canonical: "bills", aliases: &["buffalo bills", "buf", "buffalo", "bills"] },
    AliasEntry { sport: NFL, canonical: "dolphins", aliases: &["miami dolphins", "mia", "miami", "dolphins"] },
    AliasEntry { sport: NFL, canonical: "jets", aliases: &["new york jets", "ny jets", "nyj", "jets"] },
    AliasEntry { sport: NFL, canonical: "steelers", aliases: &["pittsburgh steelers", "pit", "pittsburgh", "steelers"] },
    AliasEntry { sport: NFL, canonical: "ravens", aliases: &["baltimore ravens", "bal", "baltimore", "ravens"] },
    AliasEntry { sport: NFL, canonical: "browns", aliases: &["cleveland browns", "cle", "cleveland", "browns"] },
    AliasEntry { sport: NFL, canonical: "bengals", aliases: &["cincinnati bengals", "cin", "cincinnati", "bengals"] },
    AliasEntry { sport: NFL, canonical: "texans", aliases: &["houston texans", "hou", "houston", "texans"] },
    AliasEntry { sport: NFL, canonical: "colts", aliases: &["indianapolis colts", "ind", "indianapolis", "colts"] },
    AliasEntry { sport: NFL, canonical: "jaguars", aliases: &["jacksonville jaguars", "jax", "jacksonville", "jaguars"] },
    AliasEntry { sport: NFL, canonical: "titans", aliases: &["tennessee titans", "ten", "tennessee", "titans"] },
    AliasEntry { sport: NFL, canonical: "chiefs", aliases: &["kansas city chiefs", "kc", "kansas city", "chiefs"] },
    AliasEntry { sport: NFL, canonical: "raiders", aliases: &["las vegas raiders", "lv", "las vegas", "oakland raiders", "raiders"] },
    AliasEntry { sport: NFL, canonical: "chargers", aliases: &["los angeles chargers", "lac", "la chargers", "chargers"] },
    AliasEntry { sport: NFL, canonical: "broncos", aliases: &["denver broncos", "den", "denver", "broncos"] },
    AliasEntry { sport: NFL, canonical: "cowboys", aliases: &["dallas cowboys", "dal", "dallas", "cowboys"] },
    AliasEntry { sport: NFL, canonical: "giants", aliases: &["new york giants", "ny giants", "nyg", "giants"] },
    AliasEntry { sport: NFL, canonical: "eagles", aliases: &["philadelphia eagles", "phi", "philadelphia", "eagles"] },
    AliasEntry { sport: NFL, canonical: "commanders", aliases: &["washington commanders", "was", "washington", "wft", "commanders"] },
    AliasEntry { sport: NFL, canonical: "packers", aliases: &["green bay packers", "gb", "green bay", "packers"] },
    AliasEntry { sport: NFL, canonical: "lions", aliases: &["detroit lions", "det", "detroit", "lions"] },
    AliasEntry { sport: NFL, canonical: "bears", aliases: &["chicago bears", "chi", "chicago", "bears"] },
    AliasEntry { sport: NFL, canonical: "vikings", aliases: &["minnesota vikings", "min", "minnesota", "vikings"] },
    AliasEntry { sport: NFL, canonical: "falcons", aliases: &["atlanta falcons", "atl", "atlanta", "falcons"] },
    AliasEntry { sport: NFL, canonical: "panthers", aliases: &["carolina panthers", "car", "carolina", "panthers"] },
    AliasEntry { sport: NFL, canonical: "saints", aliases: &["new orleans saints", "no", "new orleans", "saints"] },
    AliasEntry { sport: NFL, canonical: "buccaneers", aliases: &["tampa bay buccaneers", "tb", "tampa bay", "tampa", "buccaneers"] },
    AliasEntry { sport: NFL, canonical: "cardinals", aliases: &["arizona cardinals", "ari", "arizona", "cardinals"] },
    AliasEntry { sport: NFL, canonical: "rams", aliases: &["los angeles rams", "lar", "la rams", "rams"] },
    AliasEntry { sport: NFL, canonical: "seahawks", aliases: &["seattle seahawks", "sea", "seattle", "seahawks"] },
    AliasEntry { sport: NFL, canonical: "49ers", aliases: &["san francisco 49ers", "sf", "san francisco", "49ers", "niners"] },
    // MLB
    AliasEntry { sport: MLB, canonical: "yankees", aliases: &["new york yankees", "ny yankees", "nyy", "yankees"] },
    AliasEntry { sport: MLB, canonical: "red sox", aliases: &["boston red sox", "bos", "boston", "red sox"] },
    AliasEntry { sport: MLB, canonical: "blue jays", aliases: &["toronto blue jays", "tor", "toronto", "blue jays"] },
    AliasEntry { sport: MLB, canonical: "orioles", aliases: &["baltimore orioles", "bal", "baltimore", "orioles"] },
    AliasEntry { sport: MLB, canonical: "rays", aliases: &["tampa bay rays", "tb", "tampa bay", "tampa", "rays"] },
    AliasEntry { sport: MLB, canonical: "astros", aliases: &["houston astros", "hou", "houston", "astros"] },
    AliasEntry { sport: MLB, canonical: "angels", aliases: &["los angeles angels", "laa", "la angels", "anaheim angels", "angels"] },
    AliasEntry { sport: MLB, canonical: "athletics", aliases: &["oakland athletics", "oak", "oakland", "a's", "athletics"] },
    AliasEntry { sport: MLB, canonical: "rangers", aliases: &["texas rangers", "tex", "texas", "rangers"] },
    AliasEntry { sport: MLB, canonical: "twins", aliases: &["minnesota twins", "min", "minnesota", "twins"] },
    AliasEntry { sport: MLB, canonical: "royals", aliases: &["kansas city royals", "kc", "kansas city", "royals"] },
    AliasEntry { sport: MLB, canonical: "tigers", aliases: &["detroit tigers", "det", "detroit", "tigers"] },
    AliasEntry { sport: MLB, canonical: "guardians", aliases: &["cleveland guardians", "cle", "cleveland", "guardians", "cleveland indians"] },
    AliasEntry { sport: MLB, canonical: "white sox", aliases: &["chicago white sox", "cws", "chicago", "white sox"] },
    AliasEntry { sport: MLB, canonical: "mariners", aliases: &["seattle mariners", "sea", "seattle", "mariners"] },
    AliasEntry { sport: MLB, canonical: "braves", aliases: &["atlanta braves", "atl", "atlanta", "braves"] },
    AliasEntry { sport: MLB, canonical: "marlins", aliases: &["miami marlins", "mia", "miami", "marlins"] },
    AliasEntry { sport: MLB, canonical: "mets", aliases: &["new york mets", "ny mets", "nym", "mets"] },
    AliasEntry { sport: MLB, canonical: "phillies", aliases: &["philadelphia phillies", "phi", "philadelphia", "phillies"] },
    AliasEntry { sport: MLB, canonical: "nationals", aliases: &["washington nationals", "was", "washington", "nationals"] },
    AliasEntry { sport: MLB, canonical: "cubs", aliases: &["chicago cubs", "chc", "chicago", "cubs"] },
    AliasEntry { sport: MLB, canonical: "reds", aliases: &["cincinnati reds", "cin", "cincinnati", "reds"] },
    AliasEntry { sport: MLB, canonical: "brewers", aliases: &["milwaukee brewers", "mil", "milwaukee", "brewers"] },
    AliasEntry { sport: MLB, canonical: "pirates", aliases: &["pittsburgh pirates", "pit", "pittsburgh", "pirates"] },
    AliasEntry { sport: MLB, canonical: "cardinals", aliases: &["st. louis cardinals", "stl", "st louis", "cardinals"] },
    AliasEntry { sport: MLB, canonical: "diamondbacks", aliases: &["arizona diamondbacks", "ari", "arizona", "diamondbacks", "dbacks"] },
    AliasEntry { sport: MLB, canonical: "dodgers", aliases: &["los angeles dodgers", "lad", "la dodgers", "dodgers"] },
    AliasEntry { sport: MLB, canonical: "giants", aliases: &["san francisco giants", "sf", "san francisco", "giants"] },
    AliasEntry { sport: MLB, canonical: "padres", aliases: &["san diego padres", "sd", "san diego", "padres"] },
    AliasEntry { sport: MLB, canonical: "rockies", aliases: &["colorado rockies", "col", "colorado", "rockies"] },
    // NBA
    AliasEntry { sport: NBA, canonical: "celtics", aliases: &["boston celtics", "bos", "boston", "celtics"] },
    AliasEntry { sport: NBA, canonical: "nets", aliases: &["brooklyn nets", "bkn", "brooklyn", "nets"] },
    AliasEntry { sport: NBA, canonical: "knicks", aliases: &["new york knicks", "nyk", "knicks"] },
    AliasEntry { sport: NBA, canonical: "76ers", aliases: &["philadelphia 76ers", "phi", "philadelphia", "sixers", "76ers"] },
    AliasEntry { sport: NBA, canonical: "raptors", aliases: &["toronto raptors", "tor", "toronto", "raptors"] },
    AliasEntry { sport: NBA, canonical: "bulls", aliases: &["chicago bulls", "chi", "chicago", "bulls"] },
    AliasEntry { sport: NBA, canonical: "cavaliers", aliases: &["cleveland cavaliers", "cle", "cleveland", "cavs", "cavaliers"] },
    AliasEntry { sport: NBA, canonical: "pistons", aliases: &["detroit pistons", "det", "detroit", "pistons"] },
    AliasEntry { sport: NBA, canonical: "pacers", aliases: &["indiana pacers", "ind", "indiana", "pacers"] },
    AliasEntry { sport: NBA, canonical: "bucks", aliases: &["milwaukee bucks", "mil", "milwaukee", "bucks"] },
    AliasEntry { sport: NBA, canonical: "hawks", aliases: &["atlanta hawks", "atl", "atlanta", "hawks"] },
    AliasEntry { sport: NBA, canonical: "hornets", aliases: &["charlotte hornets", "cha", "charlotte", "hornets"] },
    AliasEntry { sport: NBA, canonical: "heat", aliases: &["miami heat", "mia", "miami", "heat"] },
    AliasEntry { sport: NBA, canonical: "magic", aliases: &["orlando magic", "orl", "orlando", "magic"] },
    AliasEntry { sport: NBA, canonical: "wizards", aliases: &["washington wizards", "was", "washington", "wizards"] },
    AliasEntry { sport: NBA, canonical: "nuggets", aliases: &["denver nuggets", "den", "denver", "nuggets"] },
    AliasEntry { sport: NBA, canonical: "timberwolves", aliases: &["minnesota timberwolves", "min", "minnesota", "wolves", "timberwolves"] },
    AliasEntry { sport: NBA, canonical: "thunder", aliases: &["oklahoma city thunder", "okc", "oklahoma city", "thunder"] },
    AliasEntry { sport: NBA, canonical: "trail blazers", aliases: &["portland trail blazers", "por", "portland", "blazers", "trail blazers"] },
    AliasEntry { sport: NBA, canonical: "jazz", aliases: &["utah jazz", "uta", "utah", "jazz"] },
    AliasEntry { sport: NBA, canonical: "warriors", aliases: &["golden state warriors", "gsw", "golden state", "gs", "warriors"] },
    AliasEntry { sport: NBA, canonical: "clippers", aliases: &["los angeles clippers", "lac", "la clippers", "clippers"] },
    AliasEntry { sport: NBA, canonical: "lakers", aliases: &["los angeles lakers", "lal", "la lakers", "lakers"] },
    AliasEntry { sport: NBA, canonical: "suns", aliases: &["phoenix suns", "phx", "phoenix", "suns"] },
    AliasEntry { sport: NBA, canonical: "kings", aliases: &["sacramento kings", "sac", "sacramento", "kings"] },
    AliasEntry { sport: NBA, canonical: "mavericks", aliases: &["dallas mavericks", "dal", "dallas", "mavs", "mavericks"] },
    AliasEntry { sport: NBA, canonical: "rockets", aliases: &["houston rockets", "hou", "houston", "rockets"] },
    AliasEntry { sport: NBA, canonical: "grizzlies", aliases: &["memphis grizzlies", "mem", "memphis", "grizzlies"] },
    AliasEntry { sport: NBA, canonical: "pelicans", aliases: &["new orleans pelicans", "no", "new orleans", "pelicans"] },
    AliasEntry { sport: NBA, canonical: "spurs", aliases: &["san antonio spurs", "sa", "san antonio", "spurs"] },
    // NHL
    AliasEntry { sport: NHL, canonical: "bruins", aliases: &["boston bruins", "bos", "boston", "bruins"] },
    AliasEntry { sport: NHL, canonical: "sabres", aliases: &["buffalo sabres", "buf", "buffalo", "sabres"] },
    AliasEntry { sport: NHL, canonical: "red wings", aliases: &["detroit red wings", "det", "detroit", "red wings"] },
    AliasEntry { sport: NHL, canonical: "panthers", aliases: &["florida panthers", "fla", "florida", "panthers"] },
    AliasEntry { sport: NHL, canonical: "canadiens", aliases: &["montreal canadiens", "mtl", "montreal", "habs", "canadiens"] },
    AliasEntry { sport: NHL, canonical: "senators", aliases: &["ottawa senators", "ott", "ottawa", "senators"] },
    AliasEntry { sport: NHL, canonical: "lightning", aliases: &["tampa bay lightning", "tb", "tampa bay", "tampa", "lightning"] },
    AliasEntry { sport: NHL, canonical: "maple leafs", aliases: &["toronto maple leafs", "tor", "toronto", "leafs", "maple leafs"] },
    AliasEntry { sport: NHL, canonical: "hurricanes", aliases: &["carolina hurricanes", "car", "carolina", "hurricanes"] },
    AliasEntry { sport: NHL, canonical: "blue jackets", aliases: &["columbus blue jackets", "cbj", "columbus", "blue jackets"] },
    AliasEntry { sport: NHL, canonical: "devils", aliases: &["new jersey devils", "nj", "new jersey", "devils"] },
    AliasEntry { sport: NHL, canonical: "islanders", aliases: &["new york islanders", "nyi", "islanders"] },
    AliasEntry { sport: NHL, canonical: "rangers", aliases: &["new york rangers", "nyr", "rangers"] },
    AliasEntry { sport: NHL, canonical: "flyers", aliases: &["philadelphia flyers", "phi", "philadelphia", "flyers"] },
    AliasEntry { sport: NHL, canonical: "penguins", aliases: &["pittsburgh penguins", "pit", "pittsburgh", "penguins"] },
    AliasEntry { sport: NHL, canonical: "capitals", aliases: &["washington capitals", "was", "washington", "caps", "capitals"] },
    AliasEntry { sport: NHL, canonical: "blackhawks", aliases: &["chicago blackhawks", "chi", "chicago", "blackhawks"] },
    AliasEntry { sport: NHL, canonical: "avalanche", aliases: &["colorado avalanche", "col", "colorado", "avs", "avalanche"] },
    AliasEntry { sport: NHL, canonical: "stars", aliases: &["dallas stars", "dal", "dallas", "stars"] },
    AliasEntry { sport: NHL, canonical: "wild", aliases: &["minnesota wild", "min", "minnesota", "wild"] },
    AliasEntry { sport: NHL, canonical: "predators", aliases: &["nashville predators", "nsh", "nashville", "predators"] },
    AliasEntry { sport: NHL, canonical: "blues", aliases: &["st. louis blues", "stl", "st louis", "blues"] },
    AliasEntry { sport: NHL, canonical: "jets", aliases: &["winnipeg jets", "wpg", "winnipeg", "jets"] },
    AliasEntry { sport: NHL, canonical: "flames", aliases: &["calgary flames", "cgy", "calgary", "flames"] },
    AliasEntry { sport: NHL, canonical: "oilers", aliases: &["edmonton oilers", "edm", "edmonton", "oilers"] },
    AliasEntry { sport: NHL, canonical: "kings", aliases: &["los angeles kings", "lak", "la kings", "kings"] },
    AliasEntry { sport: NHL, canonical: "ducks", aliases: &["anaheim ducks", "ana", "anaheim", "ducks"] },
    AliasEntry { sport: NHL, canonical: "coyotes", aliases: &["arizona coyotes", "ari", "arizona", "coyotes"] },
    AliasEntry { sport: NHL, canonical: "sharks", aliases: &["san jose sharks", "sjs", "san jose", "sharks"] },
    AliasEntry { sport: NHL, canonical: "kraken", aliases: &["seattle kraken", "sea", "seattle", "kraken"] },
    AliasEntry { sport: NHL, canonical: "golden knights", aliases: &["vegas golden knights", "vgk", "vegas", "knights", "golden knights"] },
    AliasEntry { sport: NHL, canonical: "canucks", aliases: &["vancouver canucks", "van", "vancouver", "canucks"] },
    // NCAAF
    AliasEntry { sport: NCAAF, canonical: "huskies", aliases: &["washington huskies", "uw huskies", "huskies", "washington", "uw"] },
    AliasEntry { sport: NCAAF, canonical: "ducks", aliases: &["oregon ducks", "oregon", "ducks", "uo"] },
];

/// Designated home-market teams, one per sport, for the local-pick filter.
static LOCAL_TEAMS: &[AliasEntry] = &[
    AliasEntry { sport: NFL, canonical: "seahawks", aliases: &["seattle seahawks", "seahawks", "sea", "seattle"] },
    AliasEntry { sport: MLB, canonical: "mariners", aliases: &["seattle mariners", "mariners", "sea", "seattle"] },
    AliasEntry { sport: NHL, canonical: "kraken", aliases: &["seattle kraken", "kraken", "sea", "seattle"] },
    AliasEntry { sport: "soccer", canonical: "sounders", aliases: &["seattle sounders", "sounders", "sea", "seattle"] },
    AliasEntry { sport: "wnba", canonical: "storm", aliases: &["seattle storm", "storm", "sea", "seattle"] },
    AliasEntry { sport: NCAAF, canonical: "huskies", aliases: &["washington huskies", "uw huskies", "huskies", "washington", "uw"] },
];

/// Lowercase, collapse whitespace, and strip trailing sport/organization
/// suffixes. Stripping repeats until the name is stable, so the function is
/// idempotent.
pub fn normalize_team_name(name: &str) -> String {
    let mut normalized = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    loop {
        let mut stripped = false;
        for suffix in SUFFIXES {
            if let Some(rest) = normalized.strip_suffix(suffix) {
                normalized = rest.trim_end().to_string();
                stripped = true;
            }
        }
        if !stripped {
            break;
        }
    }

    normalized
}

fn alias_tier_matches(aliases: &[&str], normalized: &str, confidence: MatchConfidence) -> bool {
    match confidence {
        MatchConfidence::Exact => aliases.contains(&normalized),
        MatchConfidence::Partial => aliases.iter().any(|alias| {
            normalized.contains(alias)
                || (alias.len() >= FUZZY_MIN_ALIAS_LEN
                    && normalized_damerau_levenshtein(alias, normalized) > FUZZY_THRESHOLD)
        }),
    }
}

/// Resolve a free-text team name to a canonical id for the given sport.
///
/// Exact alias-set membership is searched first across the whole table;
/// only when that fails does the loose substring/fuzzy tier run. The loose
/// tier tolerates partial names ("Seattle", "Will Seattle Seahawks") at the
/// cost of known ambiguity on short city fragments.
pub fn resolve_team(name: &str, sport: &str) -> Option<TeamMatch> {
    let normalized = normalize_team_name(name);
    if normalized.is_empty() {
        return None;
    }

    for confidence in [MatchConfidence::Exact, MatchConfidence::Partial] {
        for entry in TEAM_ALIASES.iter().chain(LOCAL_TEAMS.iter()) {
            if entry.sport != sport {
                continue;
            }
            if alias_tier_matches(entry.aliases, &normalized, confidence) {
                return Some(TeamMatch {
                    canonical: entry.canonical,
                    confidence,
                });
            }
        }
    }

    None
}

/// Resolution accepting both confidence tiers.
pub fn find_team_match(name: &str, sport: &str) -> Option<&'static str> {
    resolve_team(name, sport).map(|m| m.canonical)
}

/// Whether the name is the designated home-market team for the sport.
pub fn is_local_team(name: &str, sport: &str) -> bool {
    let normalized = normalize_team_name(name);
    LOCAL_TEAMS
        .iter()
        .filter(|entry| entry.sport == sport)
        .any(|entry| entry.aliases.contains(&normalized.as_str()))
}
