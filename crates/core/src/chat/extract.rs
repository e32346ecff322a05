use regex::Regex;
use std::sync::LazyLock;

/// Introductions followed by one or two capitalized words ("I'm Jane Doe").
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:\bmy name is|\bi['’]m|\bi am)\s+([A-Z][a-zA-Z'-]+(?:\s+[A-Z][a-zA-Z'-]+)?)")
        .unwrap()
});

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap()
});

/// Company cue followed by a run of alphanumerics, spaces and ampersands.
/// Sentence punctuation ends the run because it is outside the class.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static COMPANY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:work at|company is|from|at)\s+([a-z0-9&][a-z0-9& ]*)").unwrap()
});

/// Words that end a company name ("Acme and we need ...").
const COMPANY_STOP_WORDS: &[&str] = &["and", "pain", "my", "our", "we", "i"];

/// Contact details found in a chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl ExtractedContact {
    /// A lead is only worth creating when we know who is talking.
    #[must_use]
    pub const fn identifies_someone(&self) -> bool {
        self.name.is_some() || self.email.is_some()
    }
}

#[must_use]
pub fn extract_contact(text: &str) -> ExtractedContact {
    ExtractedContact {
        name: extract_name(text),
        email: extract_email(text),
        company: extract_company(text),
    }
}

#[must_use]
pub fn extract_name(text: &str) -> Option<String> {
    NAME_REGEX.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str().to_owned())
}

#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_REGEX.find(text).map(|m| m.as_str().to_owned())
}

#[must_use]
pub fn extract_company(text: &str) -> Option<String> {
    let raw = COMPANY_REGEX.captures(text)?.get(1)?.as_str();
    let company = raw
        .split_whitespace()
        .take_while(|word| !COMPANY_STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    (!company.is_empty()).then_some(company)
}
