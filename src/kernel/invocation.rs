//! Engine invocation
//!
//! An [`Invocation`] is the program, argument vector and input file of a
//! single engine run. It renders to the shell pipeline the engine has
//! always been driven with, or to a [`Command`] that feeds the input on
//! stdin directly. Neither form is executed here.

use crate::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fully resolved engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    input: PathBuf,
}

impl Invocation {
    pub(crate) fn new(program: String, args: Vec<String>, input: PathBuf) -> Self {
        Self { program, args, input }
    }

    /// Program started by the invocation (the runtime, or the archive itself)
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to [`Self::program`]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// File fed to the engine on stdin
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Render as `cat <input> | <program> <args...>`.
    ///
    /// Tokens are joined with single spaces and never quoted.
    pub fn to_shell(&self) -> String {
        let mut line = format!("cat {} | {}", self.input.display(), self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Build a [`Command`] with the input file attached to stdin.
    ///
    /// Opening the input is the only fallible step; the command is not spawned.
    pub fn to_command(&self) -> Result<Command> {
        let stdin = File::open(&self.input)?;
        let mut command = Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::from(stdin));
        Ok(command)
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_shell())
    }
}
