use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Class builder CLI - resolves variant selections into class strings
#[derive(Parser, Debug)]
#[command(name = "class-builder-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable verbose logging (RUST_LOG overrides)"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one selection and print the class string
    Resolve(ResolveArgs),
    /// Resolve JSON selections read line by line from stdin
    Pipe(PipeArgs),
    /// Write a manifest of every class the configured components can emit
    Manifest(ManifestArgs),
    /// Report configuration mistakes
    Check(CheckArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Style config file (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "CLASS_BUILDER_CONFIG",
        help = "Path to the style configuration file"
    )]
    pub config: PathBuf,

    /// Component to resolve
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Variant choices
    #[arg(
        short = 's',
        long = "set",
        value_name = "NAME=VALUE",
        value_parser = parse_assignment,
        help = "Select a variant value (repeatable)"
    )]
    pub set: Vec<(String, String)>,

    /// Extra class appended last
    #[arg(long = "class", value_name = "CLASS", help = "Extra class appended after variant output")]
    pub class: Option<String>,
}

/// Arguments for the pipe command
#[derive(Args, Debug, Clone)]
pub struct PipeArgs {
    /// Style config file (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "CLASS_BUILDER_CONFIG",
        help = "Path to the style configuration file"
    )]
    pub config: PathBuf,

    /// Component to resolve
    #[arg(value_name = "COMPONENT")]
    pub component: String,
}

/// Arguments for the manifest command
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Input config patterns (glob patterns supported)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Style config files to include"
    )]
    pub input: Vec<String>,

    /// Exclude patterns
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Patterns to exclude"
    )]
    pub exclude: Vec<String>,

    /// Output manifest file path (JSON)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        required = true,
        help = "Path where the JSON manifest will be written"
    )]
    pub output: PathBuf,

    #[arg(long = "minify", default_value_t = false, help = "Write compact JSON")]
    pub minify: bool,

    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Build the manifest but don't write it"
    )]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Style config file (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "CLASS_BUILDER_CONFIG",
        help = "Path to the style configuration file"
    )]
    pub config: PathBuf,
}

impl ManifestArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("At least one input pattern must be provided".to_string());
        }

        if self.input.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err("Input patterns must not be blank".to_string());
        }

        Ok(())
    }
}

/// Parse `name=value`
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("size=large"),
            Ok(("size".to_string(), "large".to_string()))
        );
        assert_eq!(parse_assignment("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert!(parse_assignment("size").is_err());
        assert!(parse_assignment("=large").is_err());
    }
}
