use crate::config::{ClassScript, Step};
use crate::errors::{ClassListError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// DOM class list CLI - Applies class operations to class attributes
#[derive(Parser, Debug)]
#[command(name = "classlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable verbose (debug level) logging on stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply class operations to the given class attributes
    Apply(ApplyArgs),
    /// Read class attributes from stdin, one element per line, and write the results to stdout
    Pipe(PipeArgs),
}

/// Operations shared by every command
#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Inline steps
    #[arg(
        short = 's',
        long = "step",
        value_name = "STEP",
        num_args = 1..,
        help = "Step to apply: add:NAME, remove:NAME, remove-matching:REGEX, toggle:NAME or swap:OLD:NEW"
    )]
    pub steps: Vec<Step>,

    /// Script file path (YAML or JSON)
    #[arg(
        short = 'f',
        long = "script",
        value_name = "PATH",
        env = "CLASSLIST_SCRIPT",
        help = "Path to a script file (.yaml, .yml or .json); inline steps run after it"
    )]
    pub script: Option<PathBuf>,

    /// Use native class sets
    #[arg(
        long = "native",
        default_value_t = false,
        help = "Give elements a native class set instead of the attribute fallback"
    )]
    pub native: bool,

    /// Class names to check afterwards
    #[arg(
        short = 'p',
        long = "probe",
        value_name = "NAME",
        help = "Class name to check on every element (reported with --json)"
    )]
    pub probes: Vec<String>,

    /// JSON report output
    #[arg(
        long = "json",
        default_value_t = false,
        help = "Print a JSON report instead of one class attribute per line"
    )]
    pub json: bool,
}

/// Arguments for the apply command
#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Class attributes, one per element
    #[arg(
        short = 'c',
        long = "class",
        value_name = "ATTR",
        required = true,
        num_args = 1..,
        help = "Class attribute of an element; repeat for several elements"
    )]
    pub classes: Vec<String>,

    #[command(flatten)]
    pub script: ScriptArgs,
}

/// Arguments for the pipe command
#[derive(Args, Debug, Clone)]
pub struct PipeArgs {
    #[command(flatten)]
    pub script: ScriptArgs,
}

impl ScriptArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.steps.is_empty() && self.script.is_none() {
            return Err("At least one --step or a --script must be provided".to_string());
        }
        Ok(())
    }

    /// Build the script: file first, then inline steps and flags
    pub fn load(&self) -> Result<ClassScript> {
        self.validate().map_err(ClassListError::InvalidInput)?;

        let base = match &self.script {
            Some(path) => ClassScript::from_file(path)?,
            None => ClassScript::default(),
        };

        Ok(base.merge(ClassScript {
            native_tokens: self.native,
            steps: self.steps.clone(),
            probes: self.probes.clone(),
        }))
    }
}
