//! Name transformations: case conversion and English noun singularization.
//!
//! All functions are pure and total: any input produces an output, and
//! unrecognised shapes come back unchanged.
//!
//! Singularization walks [`SINGULAR_RULES`] top to bottom and applies the first
//! rule whose guard matches. The order is load-bearing: the irregular table
//! must be consulted before the suffix rules would mangle words like `people`.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::naming::{to_pascal_case, to_singular};
//!
//! assert_eq!(to_pascal_case("user-profile_data"), "UserProfileData");
//! assert_eq!(to_singular("categories"), "category");
//! assert_eq!(to_singular("People"), "Person");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular plural to singular mappings (lowercase).
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("analyses", "analysis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
];

/// Singular nouns ending in `s` that the suffix rules would otherwise clip.
const FIXED_SINGULARS: &[&str] = &[
    "bus", "status", "campus", "census", "virus", "bonus", "alias", "canvas", "axis", "basis",
    "crisis", "thesis", "diagnosis",
];

static IRREGULAR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

/// Case variants derivable from an identifier.
///
/// Variants are computed on demand and never stored.
///
/// # Examples
///
/// ```
/// use scaffold_core::naming::CaseVariant;
///
/// assert_eq!(CaseVariant::Pascal.apply("user_profile"), "UserProfile");
/// assert_eq!(CaseVariant::Lower.apply("UserProfile"), "userprofile");
/// assert_eq!(CaseVariant::Original.apply("UserProfile"), "UserProfile");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseVariant {
    /// `user-profile` → `UserProfile`
    Pascal,
    /// `UserProfile` → `userprofile`
    Lower,
    /// Unchanged.
    Original,
}

impl CaseVariant {
    /// Applies this variant to `identifier`.
    #[must_use]
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Self::Pascal => to_pascal_case(identifier),
            Self::Lower => to_lower_case(identifier),
            Self::Original => identifier.to_string(),
        }
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Converts an identifier to `PascalCase`.
///
/// Splits on `-` and `_` only; existing word boundaries inside a segment are
/// not detected, so `UserProfile` becomes `Userprofile`.
///
/// # Examples
///
/// ```
/// use scaffold_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case(""), "");
/// assert_eq!(to_pascal_case("a"), "A");
/// assert_eq!(to_pascal_case("api_v2_client"), "ApiV2Client");
/// assert_eq!(to_pascal_case("UserProfile"), "Userprofile");
/// ```
#[must_use]
pub fn to_pascal_case(identifier: &str) -> String {
    identifier.split(['-', '_']).map(capitalize).collect()
}

/// Converts an identifier to lowercase.
#[must_use]
pub fn to_lower_case(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// One guarded transformation in the singularization chain.
#[derive(Debug, Clone, Copy)]
pub struct SingularRule {
    /// Short rule name, reported by [`singular_rule_for`].
    pub name: &'static str,
    applies: fn(&str) -> bool,
    transform: fn(&str) -> String,
}

impl SingularRule {
    /// Returns `true` if this rule's guard matches `word`.
    #[must_use]
    pub fn applies(&self, word: &str) -> bool {
        (self.applies)(word)
    }

    /// Applies the transformation unconditionally.
    #[must_use]
    pub fn transform(&self, word: &str) -> String {
        (self.transform)(word)
    }
}

/// Singularization rules, evaluated top to bottom; first match wins.
pub static SINGULAR_RULES: [SingularRule; 7] = [
    SingularRule {
        name: "irregular",
        applies: |w| IRREGULAR_TABLE.contains_key(w.to_lowercase().as_str()),
        transform: irregular_singular,
    },
    SingularRule {
        name: "irregular-singular",
        applies: |w| {
            let lower = w.to_lowercase();
            IRREGULAR_PLURALS.iter().any(|(_, singular)| *singular == lower)
                || FIXED_SINGULARS.contains(&lower.as_str())
        },
        transform: str::to_string,
    },
    SingularRule {
        name: "ies",
        applies: |w| w.chars().count() > 3 && ends_with_ignore_case(w, "ies"),
        transform: |w| replace_suffix(w, 3, "y"),
    },
    SingularRule {
        name: "ves",
        applies: |w| ends_with_ignore_case(w, "ves"),
        transform: ves_singular,
    },
    SingularRule {
        name: "es",
        applies: |w| {
            ["ses", "xes", "zes", "ches", "shes"]
                .iter()
                .any(|suffix| ends_with_ignore_case(w, suffix))
        },
        transform: |w| replace_suffix(w, 2, ""),
    },
    SingularRule {
        name: "s",
        applies: |w| {
            w.len() > 1 && ends_with_ignore_case(w, "s") && !ends_with_ignore_case(w, "ss")
        },
        transform: |w| replace_suffix(w, 1, ""),
    },
    SingularRule {
        name: "unchanged",
        applies: |_| true,
        transform: str::to_string,
    },
];

/// Returns the name of the rule that [`to_singular`] applies to `word`.
///
/// # Examples
///
/// ```
/// use scaffold_core::naming::singular_rule_for;
///
/// assert_eq!(singular_rule_for("people"), Some("irregular"));
/// assert_eq!(singular_rule_for("glasses"), Some("es"));
/// assert_eq!(singular_rule_for("user"), Some("unchanged"));
/// assert_eq!(singular_rule_for(""), None);
/// ```
#[must_use]
pub fn singular_rule_for(word: &str) -> Option<&'static str> {
    if word.is_empty() {
        return None;
    }
    SINGULAR_RULES
        .iter()
        .find(|rule| rule.applies(word))
        .map(|rule| rule.name)
}

/// Singularizes an English plural noun.
///
/// A best-effort heuristic, not an inverse of pluralization. Words no rule
/// recognises are returned unchanged. Singulars from the irregular and fixed
/// tables are returned as-is, so realistic plurals singularize once.
///
/// # Examples
///
/// ```
/// use scaffold_core::naming::to_singular;
///
/// assert_eq!(to_singular("users"), "user");
/// assert_eq!(to_singular("glasses"), "glass");
/// assert_eq!(to_singular("boxes"), "box");
/// assert_eq!(to_singular("knives"), "knife");
/// assert_eq!(to_singular("wolves"), "wolf");
/// assert_eq!(to_singular("PEOPLE"), "PERSON");
/// assert_eq!(to_singular(""), "");
/// ```
#[must_use]
pub fn to_singular(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    SINGULAR_RULES
        .iter()
        .find(|rule| rule.applies(word))
        .map_or_else(|| word.to_string(), |rule| rule.transform(word))
}

/// Looks up the irregular singular and re-cases it like the input.
///
/// Recognised styles are all-lowercase, all-uppercase and capitalized; any
/// other mix falls back to the canonical lowercase form.
fn irregular_singular(word: &str) -> String {
    let lower = word.to_lowercase();
    let Some(singular) = IRREGULAR_TABLE.get(lower.as_str()) else {
        return word.to_string();
    };

    if word == lower {
        (*singular).to_string()
    } else if word == word.to_uppercase() {
        singular.to_uppercase()
    } else if word == capitalize(word) {
        capitalize(singular)
    } else {
        (*singular).to_string()
    }
}

/// `-ves` → `-fe` for the `knife`, `wife` and `life` stems, otherwise `-f`
/// (`wolves`, and also `drives` → `drif`).
fn ves_singular(word: &str) -> String {
    let stem = word[..word.len() - 3].to_ascii_lowercase();
    if stem.ends_with("kni") || stem.ends_with("wi") || stem == "li" {
        replace_suffix(word, 3, "fe")
    } else {
        replace_suffix(word, 3, "f")
    }
}

fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len()
        && word.is_char_boundary(word.len() - suffix.len())
        && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Replaces the last `len` ASCII bytes of `word`, matching the case of the
/// removed suffix when it was entirely uppercase.
fn replace_suffix(word: &str, len: usize, replacement: &str) -> String {
    let (stem, suffix) = word.split_at(word.len() - len);
    let uppercase = suffix.chars().any(|c| c.is_ascii_alphabetic())
        && suffix.chars().all(|c| c.is_ascii_uppercase());
    if uppercase {
        format!("{stem}{}", replacement.to_ascii_uppercase())
    } else {
        format!("{stem}{replacement}")
    }
}
