//! Fixed choices offered to the user, plus role-name normalization.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Urdu,
    Chinese,
    French,
    Arabic,
    Japanese,
    Persian,
    Korean,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Urdu,
        Language::Chinese,
        Language::French,
        Language::Arabic,
        Language::Japanese,
        Language::Persian,
        Language::Korean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Chinese => "Chinese",
            Language::French => "French",
            Language::Arabic => "Arabic",
            Language::Japanese => "Japanese",
            Language::Persian => "Persian",
            Language::Korean => "Korean",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedLanguage(s.to_owned()))
    }
}

/// Roles offered for role-play.
pub const PROFESSIONS: [&str; 11] = [
    "Doctor",
    "Lawyer",
    "Teacher",
    "Therapist",
    "Chef",
    "Tech Support",
    "Artist",
    "Historian",
    "Engineer",
    "Scientist",
    "Customer Support Agent",
];

/// Case-insensitive lookup in [`PROFESSIONS`]; returns the canonical spelling.
pub fn find_profession(role: &str) -> Option<&'static str> {
    let role = role.trim();
    PROFESSIONS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(role))
}

/// A role name in its two rendered forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleName {
    /// Lower-cased, used inside sentences ("a professional doctor").
    pub lower: String,
    /// First letter upper-cased, rest lower, used for the speaker cue.
    pub title: String,
}

impl RoleName {
    /// `"Doctor"`, `"doctor"` and `" DOCTOR "` all normalize identically.
    pub fn normalize(role: &str) -> Self {
        let lower = role.trim().to_lowercase();
        let title = capitalize(&lower);
        Self { lower, title }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
