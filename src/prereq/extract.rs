//! Free-text prerequisite mining.
//!
//! Turns catalog-style prose ("Prerequisite: CPTS 121 or 131, and MATH 171")
//! into ordered OR-groups of canonical course codes.
//!
//! # Algorithm
//!
//! 1. Scan for tokens: `PREFIX NUM` (2–6 letters starting with a capital,
//!    3 digits) or a bare 3-digit number. Prefixes are upper-cased, so
//!    "CptS 121" and "CPTS 121" name the same course. A capitalized
//!    connective ("Or 131") is not a prefix; its number is treated as bare.
//! 2. A bare number inherits the prefix of the preceding token when the gap
//!    is at most [`INHERIT_WINDOW`] characters and contains a conjunction or
//!    separator. Otherwise it is discarded.
//! 3. Consecutive tokens separated by "or" / "/" share a group; any other
//!    separator starts a new group.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum gap (characters) across which a bare number inherits a prefix.
pub const INHERIT_WINDOW: usize = 80;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:([A-Z][A-Za-z]{1,5})\s*(\d{3})|(\d{3}))\b").expect("token pattern is valid")
});

/// Capitalized words that can sit right before a number without naming a
/// department.
const NON_PREFIX_WORDS: &[&str] = &[
    "AND", "ANY", "AT", "BY", "FROM", "IN", "OF", "OR", "TAKE", "THE", "TO", "WITH",
];

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z]{2,6})\s*(\d{3})\s*$").expect("code pattern is valid")
});

/// Cues that let a bare number borrow the preceding prefix.
static JOINER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:or|and)\b|[,;/]").expect("joiner pattern is valid"));

/// Cues that keep two codes in the same OR-group.
static ALTERNATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bor\b|/").expect("alternation pattern is valid"));

/// Ordered prerequisite groups: OR within a group, AND across groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrereqGroups(Vec<Vec<String>>);

impl PrereqGroups {
    /// Creates an empty group set (no prerequisites).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds groups, dropping empty ones.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Self {
        Self(groups.into_iter().filter(|g| !g.is_empty()).collect())
    }

    /// One singleton group per code.
    pub fn singletons(codes: impl IntoIterator<Item = String>) -> Self {
        Self(codes.into_iter().map(|c| vec![c]).collect())
    }

    /// Groups in order.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.0
    }

    /// Whether no group is recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every code mentioned in any group.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flatten().map(String::as_str)
    }

    /// Removes a code from every group, dropping groups left empty.
    pub fn without(mut self, code: &str) -> Self {
        for group in &mut self.0 {
            group.retain(|c| c != code);
        }
        self.0.retain(|g| !g.is_empty());
        self
    }

    /// Groups with no member in `completed`.
    pub fn unmet<'a>(&'a self, completed: &'a HashSet<String>) -> impl Iterator<Item = &'a [String]> {
        self.0
            .iter()
            .filter(move |g| !g.iter().any(|c| completed.contains(c)))
            .map(Vec::as_slice)
    }

    /// Whether every group has a member in `completed`.
    pub fn is_satisfied_by(&self, completed: &HashSet<String>) -> bool {
        self.unmet(completed).next().is_none()
    }
}

/// Canonicalizes a course code to `"PREFIX NUM"`.
///
/// Returns `None` when the input is not a prefix + 3-digit number.
pub fn canonicalize_code(code: &str) -> Option<String> {
    let caps = CODE_RE.captures(code)?;
    Some(format!("{} {}", caps[1].to_uppercase(), &caps[2]))
}

#[derive(Debug)]
struct Token {
    prefix: String,
    number: String,
    start: usize,
    end: usize,
}

impl Token {
    fn code(&self) -> String {
        format!("{} {}", self.prefix, self.number)
    }
}

/// Mines prerequisite groups from free text.
///
/// Unparseable or empty text yields no groups.
pub fn extract_groups(text: &str) -> PrereqGroups {
    let tokens = scan_tokens(text);
    let mut groups: Vec<Vec<String>> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let code = token.code();
        let joins_previous = i > 0 && {
            let gap = &text[tokens[i - 1].end..token.start];
            ALTERNATION_RE.is_match(gap)
        };

        match groups.last_mut() {
            Some(group) if joins_previous => {
                if !group.contains(&code) {
                    group.push(code);
                }
            }
            _ => groups.push(vec![code]),
        }
    }

    PrereqGroups::from_groups(groups)
}

fn scan_tokens(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for caps in TOKEN_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        let prefixed = caps
            .get(1)
            .zip(caps.get(2))
            .filter(|(prefix, _)| !is_non_prefix_word(prefix.as_str()));
        if let Some((prefix, number)) = prefixed {
            tokens.push(Token {
                prefix: prefix.as_str().to_uppercase(),
                number: number.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            });
            continue;
        }

        let Some(number) = caps.get(2).or_else(|| caps.get(3)) else { continue };
        let Some(previous) = tokens.last() else { continue };
        let gap = &text[previous.end..number.start()];
        if gap.chars().count() <= INHERIT_WINDOW && JOINER_RE.is_match(gap) {
            let prefix = previous.prefix.clone();
            tokens.push(Token {
                prefix,
                number: number.as_str().to_string(),
                start: number.start(),
                end: number.end(),
            });
        }
    }

    tokens
}

fn is_non_prefix_word(word: &str) -> bool {
    NON_PREFIX_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(text: &str) -> Vec<Vec<String>> {
        extract_groups(text).groups().to_vec()
    }

    fn g(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_prerequisite() {
        assert_eq!(groups("Prerequisite: CPTS 121"), vec![g(&["CPTS 121"])]);
    }

    #[test]
    fn test_and_groups() {
        assert_eq!(
            groups("CPTS 122 and MATH 216"),
            vec![g(&["CPTS 122"]), g(&["MATH 216"])]
        );
    }

    #[test]
    fn test_or_group_with_inherited_prefix() {
        assert_eq!(
            groups("Prereq CPTS 121 or 131; MATH 171"),
            vec![g(&["CPTS 121", "CPTS 131"]), g(&["MATH 171"])]
        );
    }

    #[test]
    fn test_slash_alternation() {
        assert_eq!(groups("MATH 171/172"), vec![g(&["MATH 171", "MATH 172"])]);
    }

    #[test]
    fn test_comma_list_inherits_as_and() {
        assert_eq!(
            groups("CPTS 121, 122, 223"),
            vec![g(&["CPTS 121"]), g(&["CPTS 122"]), g(&["CPTS 223"])]
        );
    }

    #[test]
    fn test_bare_number_without_cue_is_dropped() {
        assert_eq!(groups("CPTS 121 minimum grade 250"), vec![g(&["CPTS 121"])]);
    }

    #[test]
    fn test_bare_number_too_far_is_dropped() {
        let filler = "x".repeat(INHERIT_WINDOW + 5);
        let text = format!("CPTS 121 {filler} and 131");
        assert_eq!(groups(&text), vec![g(&["CPTS 121"])]);
    }

    #[test]
    fn test_leading_bare_number_is_dropped() {
        assert_eq!(groups("Requires 300 or CPTS 360"), vec![g(&["CPTS 360"])]);
    }

    #[test]
    fn test_compact_code() {
        assert_eq!(groups("needs EE214"), vec![g(&["EE 214"])]);
    }

    #[test]
    fn test_mixed_case_prefixes() {
        assert_eq!(groups("Prerequisite: Math 171"), vec![g(&["MATH 171"])]);
        assert_eq!(groups("CptS 121 or 131"), vec![g(&["CPTS 121", "CPTS 131"])]);
        assert_eq!(
            groups("Stat 212 and Math 171"),
            vec![g(&["STAT 212"]), g(&["MATH 171"])]
        );
    }

    #[test]
    fn test_capitalized_connective_is_not_a_prefix() {
        assert_eq!(groups("Math 171 Or 172"), vec![g(&["MATH 171", "MATH 172"])]);
        assert_eq!(groups("CPTS 121. And 122"), vec![g(&["CPTS 121"]), g(&["CPTS 122"])]);
        assert!(extract_groups("Take 300 level courses").is_empty());
    }

    #[test]
    fn test_dedup_within_group() {
        assert_eq!(groups("CPTS 121 or CPTS 121"), vec![g(&["CPTS 121"])]);
    }

    #[test]
    fn test_lowercase_words_are_not_prefixes() {
        assert!(extract_groups("and 121 credits").is_empty());
        assert!(extract_groups("").is_empty());
        assert!(extract_groups("No prerequisites.").is_empty());
    }

    #[test]
    fn test_four_digit_numbers_ignored() {
        assert!(extract_groups("Offered 2024 only").is_empty());
    }

    #[test]
    fn test_canonicalize_code() {
        assert_eq!(canonicalize_code(" cpts121 "), Some("CPTS 121".into()));
        assert_eq!(canonicalize_code("Math  171"), Some("MATH 171".into()));
        assert_eq!(canonicalize_code("Elective"), None);
    }

    #[test]
    fn test_without_and_satisfaction() {
        let groups = extract_groups("CPTS 121 or CPTS 131 and CPTS 132").without("CPTS 132");
        assert_eq!(groups.len(), 1);

        let mut done = HashSet::new();
        assert!(!groups.is_satisfied_by(&done));
        done.insert("CPTS 131".to_string());
        assert!(groups.is_satisfied_by(&done));
    }
}
