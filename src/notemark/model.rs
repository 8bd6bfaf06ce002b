use crate::error::{NoteMarkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six independent reference collections. Collections never
/// cross-reference each other; a topic belongs to exactly one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Linux,
    Git,
    GitAdvanced,
    Vim,
    Networking,
    ShellScripting,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Linux,
        Domain::Git,
        Domain::GitAdvanced,
        Domain::Vim,
        Domain::Networking,
        Domain::ShellScripting,
    ];

    /// Stable token used on the command line and in config files.
    pub fn key(&self) -> &'static str {
        match self {
            Domain::Linux => "linux",
            Domain::Git => "git",
            Domain::GitAdvanced => "git-advanced",
            Domain::Vim => "vim",
            Domain::Networking => "networking",
            Domain::ShellScripting => "shell-scripting",
        }
    }

    /// Human-readable title for listings.
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Linux => "Linux Commands",
            Domain::Git => "Git Commands",
            Domain::GitAdvanced => "Advanced Git",
            Domain::Vim => "Vim Commands",
            Domain::Networking => "Networking Concepts",
            Domain::ShellScripting => "Shell Scripting",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Domain {
    type Err = NoteMarkError;

    fn from_str(s: &str) -> Result<Self> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.key() == s)
            .ok_or_else(|| NoteMarkError::UnknownDomain(s.to_string()))
    }
}

/// A worked example attached to a topic: the command line itself plus a
/// one-line explanation of what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub code: String,
    pub text: String,
}

impl Example {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}

/// One catalog entry describing a single command, topic, or concept.
///
/// `name` is the primary human-readable identifier and the slug source;
/// `category` is a case-sensitive grouping key. The three trailing sections
/// are optional: collections that don't author them leave the vectors empty
/// and `real_world` unset, so render code never meets a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub how_it_works: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub real_world: Option<String>,
}

impl Topic {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            how_it_works: Vec::new(),
            examples: Vec::new(),
            real_world: None,
        }
    }

    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.how_it_works = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn example(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.examples.push(Example::new(code, text));
        self
    }

    pub fn real_world(mut self, note: impl Into<String>) -> Self {
        self.real_world = Some(note.into());
        self
    }
}
