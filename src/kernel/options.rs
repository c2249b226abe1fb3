//! Invocation options and engine languages
//!
//! The engine accepts four languages through its `-l` flag:
//! - `en`: English
//! - `es`: Spanish
//! - `fr`: French
//! - `it`: Italian

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Flag appended last when test mode is requested
pub const TEST_FLAG: &str = "-t";

/// Languages the engine can parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    It,
}

impl Language {
    /// Value passed to the engine's `-l` flag
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }

    /// Get all languages
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es, Language::Fr, Language::It]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" => Ok(Language::Es),
            "fr" | "french" => Ok(Language::Fr),
            "it" | "italian" => Ok(Language::It),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied options for a single engine invocation.
///
/// Nothing here is validated: a bad `input` only surfaces once the
/// resulting command is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Text file fed to the engine on stdin
    pub input: PathBuf,
    /// Extra engine flags, kept in caller order
    pub arguments: Vec<String>,
    /// Append [`TEST_FLAG`] after the extra flags
    pub test: bool,
}

impl CommandOptions {
    /// Options for `input` with no extra flags and test mode off
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Append one extra flag
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Append several extra flags
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    /// Toggle test mode
    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Extra flags followed by the test flag, if requested
    pub fn engine_arguments(&self) -> Vec<String> {
        let mut arguments = self.arguments.clone();
        if self.test {
            arguments.push(TEST_FLAG.to_string());
        }
        arguments
    }
}
