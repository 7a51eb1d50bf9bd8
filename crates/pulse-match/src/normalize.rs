//! Title normalization.
//!
//! Produces a canonical key so that spelling variants of the same title
//! collapse: case, punctuation, diacritics and whitespace are removed, common
//! abbreviations are expanded, and seniority decorations (`Sr.`, `Jr`,
//! trailing roman numerals) are pulled out into a [`SeniorityHint`] and then
//! re-emitted in one canonical spelling. A decorated title therefore never
//! shares a key with its undecorated form.

use pulse_core::enums::SeniorityLevel;
use serde::{Deserialize, Serialize};

/// Seniority decoration stripped from a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityHint {
    Junior,
    Senior,
    /// Trailing level marker, `II` / `2` -> `Level(2)`.
    Level(u8),
}

impl SeniorityHint {
    #[must_use]
    pub const fn level(self) -> SeniorityLevel {
        match self {
            Self::Junior | Self::Level(0 | 1) => SeniorityLevel::Junior,
            Self::Level(2) => SeniorityLevel::Mid,
            Self::Senior | Self::Level(3) => SeniorityLevel::Senior,
            Self::Level(_) => SeniorityLevel::Lead,
        }
    }
}

/// A title split into its base words and an optional seniority hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    /// Base title without decorations, e.g. `"software engineer"`.
    pub base: String,
    pub hint: Option<SeniorityHint>,
    /// Canonical lookup key, e.g. `"senior software engineer"`.
    pub key: String,
}

impl NormalizedTitle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Normalize a free-text title.
#[must_use]
pub fn normalize(title: &str) -> NormalizedTitle {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if let Some(letters) = fold_ligature(c) {
            cleaned.push_str(letters);
            continue;
        }
        let c = fold_diacritic(c);
        cleaned.push(if c.is_alphanumeric() || c == '+' || c == '#' { c } else { ' ' });
    }

    let mut tokens: Vec<&str> = cleaned
        .split_whitespace()
        .map(expand_abbreviation)
        .collect();

    let mut hint = None;

    // Leading/trailing junior-senior markers: "sr eng", "engineer sr".
    if tokens.len() > 1 {
        if let Some(h) = tokens.first().and_then(|t| prefix_hint(t)) {
            hint = Some(h);
            tokens.remove(0);
        }
    }
    if tokens.len() > 1 {
        if let Some(h) = tokens.last().and_then(|t| suffix_hint(t)) {
            // An explicit "senior" wins over a trailing level marker.
            hint = hint.or(Some(h));
            tokens.pop();
        }
    }

    let base = tokens.join(" ");
    let key = match hint {
        Some(SeniorityHint::Senior) => format!("senior {base}"),
        Some(SeniorityHint::Junior) => format!("junior {base}"),
        Some(SeniorityHint::Level(n)) => format!("{base} {}", roman(n)),
        None => base.clone(),
    };

    NormalizedTitle { base, hint, key }
}

fn prefix_hint(token: &str) -> Option<SeniorityHint> {
    match token {
        "sr" | "senior" | "snr" => Some(SeniorityHint::Senior),
        "jr" | "junior" | "jnr" => Some(SeniorityHint::Junior),
        _ => None,
    }
}

fn suffix_hint(token: &str) -> Option<SeniorityHint> {
    match token {
        "i" | "1" => Some(SeniorityHint::Level(1)),
        "ii" | "2" => Some(SeniorityHint::Level(2)),
        "iii" | "3" => Some(SeniorityHint::Level(3)),
        "iv" | "4" => Some(SeniorityHint::Level(4)),
        "v" | "5" => Some(SeniorityHint::Level(5)),
        _ => prefix_hint(token),
    }
}

const fn roman(n: u8) -> &'static str {
    match n {
        1 => "i",
        2 => "ii",
        3 => "iii",
        4 => "iv",
        _ => "v",
    }
}

fn expand_abbreviation(token: &str) -> &str {
    match token {
        "mgr" | "mngr" => "manager",
        "dev" => "developer",
        "engr" => "engineer",
        "admin" => "administrator",
        "asst" => "assistant",
        "assoc" => "associate",
        "dir" => "director",
        "coord" => "coordinator",
        "rep" => "representative",
        "spec" => "specialist",
        "sw" => "software",
        "mktg" => "marketing",
        "ops" => "operations",
        "svc" => "service",
        other => other,
    }
}

/// Letters that fold to two ASCII letters.
const fn fold_ligature(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ĳ' => Some("ij"),
        _ => None,
    }
}

/// Map common Latin accented letters to their ASCII base letter.
const fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ł' => 'l',
        other => other,
    }
}
