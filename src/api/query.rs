use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gender constraint applied to the character listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    /// No constraint.
    #[default]
    All,
    Male,
    Female,
    Genderless,
    Unknown,
}

impl GenderFilter {
    /// Every filter in picker order.
    pub const ALL: [GenderFilter; 5] = [
        GenderFilter::All,
        GenderFilter::Male,
        GenderFilter::Female,
        GenderFilter::Genderless,
        GenderFilter::Unknown,
    ];

    /// Value sent as the `gender` query parameter, `None` for no constraint.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            GenderFilter::All => None,
            GenderFilter::Male => Some("male"),
            GenderFilter::Female => Some("female"),
            GenderFilter::Genderless => Some("genderless"),
            GenderFilter::Unknown => Some("unknown"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
            GenderFilter::Genderless => "Genderless",
            GenderFilter::Unknown => "Unknown",
        }
    }

    /// Next filter in picker order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Filter at a picker position (0 = All).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value().unwrap_or("all"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown gender filter '{0}' (expected all, male, female, genderless or unknown)")]
pub struct ParseGenderFilterError(String);

impl FromStr for GenderFilter {
    type Err = ParseGenderFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(GenderFilter::All),
            "male" => Ok(GenderFilter::Male),
            "female" => Ok(GenderFilter::Female),
            "genderless" => Ok(GenderFilter::Genderless),
            "unknown" => Ok(GenderFilter::Unknown),
            _ => Err(ParseGenderFilterError(s.to_string())),
        }
    }
}

/// Request for one page of the character listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub filter: GenderFilter,
}

impl PageQuery {
    pub fn new(page: u32, filter: GenderFilter) -> Self {
        Self { page, filter }
    }

    /// Path and query relative to the API base, e.g. `/character/?page=2&gender=female`.
    pub fn path_and_query(&self) -> String {
        let mut path = format!("/character/?page={}", self.page);
        if let Some(gender) = self.filter.query_value() {
            path.push_str("&gender=");
            path.push_str(gender);
        }
        path
    }

    /// Full request URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }
}
