//! The portfolio owner's profile.
//!
//! A [`ProfileData`] is read once at start-up, from a JSON file or from the
//! copy bundled into the binary, and never mutated afterwards. Collections
//! that the site keys by name (employers, institutions, papers, awards,
//! skill categories) are stored as arrays so their order is explicit and
//! rendering is deterministic.

use std::{fmt, fs, path::Path};

use chrono::Datelike as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_PROFILE: &str = include_str!("../data/profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("couldn’t read profile `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn’t parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub identity: Identity,
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Employer>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub research: Vec<Research>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    /// Frozen at load time; derived from `birth_year` when that is set.
    #[serde(default)]
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    /// Written as `subject/object`, e.g. `she/her`.
    pub pronoun: String,
    #[serde(default)]
    pub headline: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub intro: String,
    pub expertise: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
    pub website: String,
    pub roles: Vec<EmploymentRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRole {
    pub position: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub location: String,
    pub duration: String,
    pub grade: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub extra_curriculars: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<Supervisor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    pub name: String,
    pub designation: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub collaborators: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub kind: AwardKind,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwardKind {
    Certification,
    Specialization,
    SkillTrack,
    Award,
}

impl fmt::Display for AwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardKind::Certification => write!(f, "certification"),
            AwardKind::Specialization => write!(f, "specialization"),
            AwardKind::SkillTrack => write!(f, "skill-track"),
            AwardKind::Award => write!(f, "award"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

impl ProfileData {
    /// The profile compiled into the binary.
    pub fn bundled() -> Result<Self, ProfileError> {
        Self::from_json_str(BUNDLED_PROFILE)
    }

    /// Read and parse a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a profile and freeze its age against the current UTC year.
    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        let profile: ProfileData = serde_json::from_str(raw)?;
        Ok(profile.with_age_as_of(chrono::Utc::now().year()))
    }

    /// Derive `identity.age` from `identity.birth_year` as of `year`.
    /// Profiles without a birth year keep their explicit age.
    pub fn with_age_as_of(mut self, year: i32) -> Self {
        if let Some(birth_year) = self.identity.birth_year {
            self.identity.age = u32::try_from(year - birth_year).unwrap_or(0);
        }
        self
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn featured_awards(&self) -> impl Iterator<Item = &Award> {
        self.awards.iter().filter(|a| a.featured)
    }
}

impl Identity {
    /// First word of the full name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// `(subject, object)` pronouns, e.g. `("he", "him")`.
    pub fn pronouns(&self) -> (&str, &str) {
        let mut parts = self.pronoun.split('/').map(str::trim);
        let subject = parts.next().filter(|s| !s.is_empty()).unwrap_or("they");
        let object = parts.next().filter(|s| !s.is_empty()).unwrap_or(subject);
        (subject, object)
    }
}

/// Strip a `mailto:` scheme so addresses read naturally in prose.
pub fn plain_email(address: &str) -> &str {
    address.strip_prefix("mailto:").unwrap_or(address)
}

/// Treat empty strings the same as missing links.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
