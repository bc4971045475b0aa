//! Check command: validate a class model (and manifest) without writing files.

use anyhow::{Context, Result};
use moshigen_core::round;
use moshigen_core::PerfTrace;

use crate::generate::load_model;
use crate::manifest::Manifest;

pub fn run(model: Option<String>, manifest_path: Option<String>) -> Result<()> {
    let manifest = Manifest::discover(manifest_path.as_deref())?;
    if let Some(manifest) = &manifest {
        manifest.validate()?;
        println!("✓ Manifest: model={}", manifest.generator.model);
    }

    let model_path = model
        .or_else(|| {
            manifest
                .as_ref()
                .map(|m| m.generator.model.clone())
        })
        .context("No class model given: pass --model or add one to moshigen.toml")?;

    println!("Checking class model: {model_path}");

    let model = load_model(&model_path)?;
    let outcome = round::run(&model, &PerfTrace::disabled());

    for warning in &outcome.warnings {
        tracing::warn!("{warning}");
    }

    if !outcome.failures.is_empty() {
        for failure in &outcome.failures {
            tracing::error!("{}: {}", failure.class, failure.error);
        }
        anyhow::bail!("{} class(es) failed validation", outcome.failures.len());
    }

    println!("✓ Adapters: {}", outcome.adapters);
    println!("✓ Factories: {}", outcome.sources.len() - outcome.adapters);
    println!("\nModel is valid!");

    Ok(())
}
