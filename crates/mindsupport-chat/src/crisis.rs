//! Keyword-based crisis detection.
//!
//! [`CrisisDetector::detect`] lowercases the input and reports whether any
//! configured phrase occurs in it as a substring. This is a heuristic:
//!
//! - false negatives are expected, since no phrase list covers every way
//!   distress is expressed;
//! - false positives happen too ("jump" matches "jumper").
//!
//! A positive result should surface help resources, nothing more.

/// Phrases the portal treats as crisis indicators.
pub const DEFAULT_CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "self harm",
    "want to die",
    "better off dead",
    "no point living",
    "hopeless",
    "cutting",
    "overdose",
    "jump",
    "hanging",
];

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    /// Lowercased, trimmed, non-empty, unique.
    keywords: Vec<String>,
}

impl CrisisDetector {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The first configured keyword contained in `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lower.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn detect(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CRISIS_KEYWORDS)
    }
}
