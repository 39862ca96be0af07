pub mod args;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod logging;
pub mod manifest;
pub mod resolver;
pub mod styled;
pub mod typed;
pub mod variants;

pub use args::{CheckArgs, Cli, Commands, ManifestArgs, PipeArgs, ResolveArgs};
pub use config::{Diagnostic, Severity, StyleConfig};
pub use errors::{ClassBuilderError, Result};
pub use manifest::{ClassManifest, ComponentClasses, ManifestBuilder};
pub use resolver::{cb, make_resolver, ClassResolver};
pub use styled::{styled, Element, ElementType, Styled, StyledProps};
pub use typed::{TypedResolver, VariantProps};
pub use variants::{CompoundVariant, Selection, VariantGroup, VariantKey, VariantsConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of the manifest command
#[derive(Debug)]
pub struct ManifestResult {
    pub manifest: ClassManifest,
    pub files_processed: usize,
}

/// Resolve a single selection described by CLI arguments
pub fn resolve_command(args: &ResolveArgs) -> Result<String> {
    let config = StyleConfig::from_file(&args.config)?;
    let resolver = config.resolver(&args.component)?;

    let mut selection = args
        .set
        .iter()
        .fold(Selection::new(), |selection, (name, value)| selection.with(name, value));
    if let Some(class) = &args.class {
        selection = selection.with_class(class);
    }

    Ok(resolver.resolve(Some(&selection)))
}

/// Load a config and report its diagnostics
pub fn check_command(args: &CheckArgs) -> Result<Vec<Diagnostic>> {
    let config = StyleConfig::from_file(&args.config)?;
    Ok(config.diagnostics())
}

/// Build a manifest from every config file matching the input patterns
pub fn generate_manifest(args: &ManifestArgs) -> Result<ManifestResult> {
    args.validate().map_err(ClassBuilderError::InvalidInput)?;

    let files = collect_files(&args.input, &args.exclude)?;
    if files.is_empty() {
        return Err(ClassBuilderError::NoFilesFound);
    }

    tracing::debug!(files = files.len(), "building class manifest");

    let mut builder = ManifestBuilder::new();
    let mut merged = StyleConfig::default();
    for path in &files {
        merged = merged.merge(StyleConfig::from_file(path)?);
        builder = builder.with_source(path.display().to_string());
    }
    for diagnostic in merged.diagnostics() {
        tracing::warn!("{}", diagnostic);
    }

    let manifest = builder.with_style_config(&merged).build();

    if !args.dry_run {
        if let Some(parent) = args.output.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = if args.minify {
            manifest.to_compact_json()?
        } else {
            manifest.to_pretty_json()?
        };
        write_atomic(&args.output, &content).map_err(|e| ClassBuilderError::OutputError {
            path: args.output.display().to_string(),
            message: e.to_string(),
        })?;
    }

    Ok(ManifestResult {
        manifest,
        files_processed: files.len(),
    })
}

/// Collect files matching the given patterns, in pattern order, without duplicates
fn collect_files(patterns: &[String], exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let excludes = exclude_patterns
        .iter()
        .map(|pattern| glob::Pattern::new(pattern))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_dir() || excludes.iter().any(|exclude| exclude.matches_path(&path)) {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Resolve one JSON selection per input line, writing one class string per line.
///
/// Blank lines are skipped. Returns the number of selections resolved.
#[cfg(feature = "cli")]
pub async fn pipe_selections<R, W>(resolver: &ClassResolver, reader: R, mut writer: W) -> Result<usize>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

    let mut lines = reader.lines();
    let mut resolved = 0;
    let mut line_number = 0;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| ClassBuilderError::InputError(format!("Failed to read from stdin: {}", e)))?
    {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let selection: Selection = serde_json::from_str(&line)
            .map_err(|e| ClassBuilderError::InputError(format!("line {}: {}", line_number, e)))?;

        let mut output = resolver.resolve(Some(&selection));
        output.push('\n');
        writer.write_all(output.as_bytes()).await.map_err(|e| ClassBuilderError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;
        resolved += 1;
    }

    writer.flush().await.map_err(|e| ClassBuilderError::OutputError {
        path: "stdout".to_string(),
        message: e.to_string(),
    })?;

    Ok(resolved)
}

/// Handle pipe command - read selections from stdin, write class strings to stdout
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    let config = StyleConfig::from_file(&args.config)?;
    let resolver = config.resolver(&args.component)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let resolved = pipe_selections(&resolver, stdin, tokio::io::stdout()).await?;

    tracing::debug!(resolved, component = %args.component, "pipe finished");
    Ok(())
}
