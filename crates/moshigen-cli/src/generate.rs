//! Generate command: run a round over a class model and write the sources.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use moshigen_core::round;
use moshigen_core::{ClassModel, PerfTrace, SourceFile};

use crate::manifest::Manifest;

/// Effective settings after merging command-line flags over the manifest.
/// Flags always win; the manifest only fills gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    model: String,
    output: String,
    trace: bool,
}

pub fn run(
    model: Option<String>,
    output: Option<String>,
    manifest_path: Option<String>,
    trace: bool,
) -> Result<()> {
    let manifest = Manifest::discover(manifest_path.as_deref())?;
    if let Some(manifest) = &manifest {
        manifest.validate()?;
    }
    let settings = resolve(model, output, trace, manifest.as_ref())?;

    println!("Generating Moshi adapters from {}", settings.model);

    let model = load_model(&settings.model)?;
    let perf = PerfTrace::new(settings.trace);
    let outcome = round::run(&model, &perf);

    for warning in &outcome.warnings {
        tracing::warn!("{warning}");
    }

    write_sources(Path::new(&settings.output), &outcome.sources)?;

    if !outcome.failures.is_empty() {
        for failure in &outcome.failures {
            tracing::error!("{}: {}", failure.class, failure.error);
        }
        anyhow::bail!("{} class(es) failed validation", outcome.failures.len());
    }

    println!("✓ Adapters: {}", outcome.adapters);
    println!("✓ Factories: {}", outcome.sources.len() - outcome.adapters);
    println!("✓ Sources written to {}", settings.output);

    Ok(())
}

fn resolve(
    model: Option<String>,
    output: Option<String>,
    trace: bool,
    manifest: Option<&Manifest>,
) -> Result<Settings> {
    let model = model
        .or_else(|| manifest.map(|m| m.generator.model.clone()))
        .context("No class model given: pass --model or add one to moshigen.toml")?;
    let output = output
        .or_else(|| manifest.map(|m| m.generator.output.clone()))
        .context("No output directory given: pass --output or add one to moshigen.toml")?;
    let trace = trace || manifest.is_some_and(|m| m.generator.performance_trace);

    Ok(Settings {
        model,
        output,
        trace,
    })
}

/// Read and validate a class model from `path`.
pub(crate) fn load_model(path: &str) -> Result<ClassModel> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read class model: {path}"))?;
    let model = ClassModel::from_json(&content)
        .with_context(|| format!("Failed to parse class model: {path}"))?;
    model.validate()?;
    Ok(model)
}

/// Write every source below `output_root`, one directory per package segment.
fn write_sources(output_root: &Path, sources: &[SourceFile]) -> Result<()> {
    for source in sources {
        let path = output_root.join(source.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }
        fs::write(&path, &source.contents)
            .with_context(|| format!("Failed to write {path:?}"))?;
        tracing::debug!("wrote {}", path.display());
    }
    Ok(())
}
