//! One synchronous generation round over a class model.
//!
//! A round builds descriptors and emits sources for every annotated class
//! and factory declaration in the model. Failures are collected per class,
//! never propagated: one bad class costs its own adapter and nothing else.

use std::collections::BTreeSet;
use std::fmt;

use crate::adapter;
use crate::descriptor::{ClassDescriptor, FactoryDescriptor};
use crate::error::GeneratorError;
use crate::factory;
use crate::model::{ClassModel, GENERATE_MOSHI, GENERATE_MOSHI_FACTORY};
use crate::trace::PerfTrace;
use crate::writer::SourceFile;

/// A class the round could not generate for, and why.
#[derive(Debug)]
pub struct ClassFailure {
    pub class: String,
    pub error: GeneratorError,
}

/// Non-fatal configuration findings surfaced alongside the sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A class is registered in more than one factory declaration.
    MultipleRegistration(String),
    /// An adapter class is in no factory and does not generate its own.
    NotRegistered(String),
    /// A factory member is absent from the model; its adapter name is
    /// derived from the qualified name alone.
    UnknownFactoryMember { factory: String, class: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MultipleRegistration(class) => {
                write!(f, "Class '{class}' is registered in multiple factories")
            }
            Warning::NotRegistered(class) => {
                write!(f, "Class '{class}' is not registered in any factory")
            }
            Warning::UnknownFactoryMember { factory, class } => {
                write!(f, "Factory '{factory}' registers unknown class '{class}'")
            }
        }
    }
}

/// Everything one round produced.
#[derive(Debug, Default)]
pub struct RoundOutcome {
    /// Emitted sources: adapters (with any implicit factories) in model
    /// order, then declared factories.
    pub sources: Vec<SourceFile>,
    pub failures: Vec<ClassFailure>,
    pub warnings: Vec<Warning>,
    /// Adapter classes generated, excluding factories.
    pub adapters: usize,
}

/// Run one generation round over `model`.
pub fn run(model: &ClassModel, trace: &PerfTrace) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();
    let mut generated: Vec<(String, bool)> = Vec::new();

    trace.scope("Process", || {
        process_classes(model, trace, &mut outcome, &mut generated);
        process_factories(model, trace, &mut outcome);
        registration_warnings(model, &generated, &mut outcome);
    });

    tracing::info!("generated {} adapter classes", outcome.adapters);
    outcome
}

fn process_classes(
    model: &ClassModel,
    trace: &PerfTrace,
    outcome: &mut RoundOutcome,
    generated: &mut Vec<(String, bool)>,
) {
    trace.scope("Process data classes", || {
        for class in model
            .classes
            .iter()
            .filter(|c| c.has_annotation(GENERATE_MOSHI))
        {
            let qualified = class.qualified_name();
            let result = trace.scope(&qualified, || ClassDescriptor::from_class(class, model));
            match result {
                Ok(descriptor) => {
                    outcome.sources.push(adapter::emit(&descriptor));
                    outcome.adapters += 1;
                    if descriptor.generates_factory {
                        let implicit = FactoryDescriptor::implicit(&descriptor);
                        let entries = implicit.entries(model);
                        outcome.sources.push(factory::emit(&implicit, &entries));
                    }
                    generated.push((qualified, descriptor.generates_factory));
                }
                Err(error) => {
                    tracing::warn!("skipping {qualified}: {error}");
                    outcome.failures.push(ClassFailure {
                        class: qualified,
                        error,
                    });
                }
            }
        }
    });
}

fn process_factories(model: &ClassModel, trace: &PerfTrace, outcome: &mut RoundOutcome) {
    trace.scope("Process factory", || {
        for class in model
            .classes
            .iter()
            .filter(|c| c.has_annotation(GENERATE_MOSHI_FACTORY))
        {
            let qualified = class.qualified_name();
            match FactoryDescriptor::from_class(class) {
                Ok(descriptor) => {
                    let entries = descriptor.entries(model);
                    for entry in entries.iter().filter(|e| !e.known) {
                        outcome.warnings.push(Warning::UnknownFactoryMember {
                            factory: descriptor.qualified_name(),
                            class: entry.class_name.clone(),
                        });
                    }
                    outcome.sources.push(factory::emit(&descriptor, &entries));
                }
                Err(error) => {
                    tracing::warn!("skipping factory {qualified}: {error}");
                    outcome.failures.push(ClassFailure {
                        class: qualified,
                        error,
                    });
                }
            }
        }
    });
}

/// Registration bookkeeping across all factory declarations. Every extra
/// registration of a class warns once; a generated adapter class in no
/// factory warns unless it generates its own.
fn registration_warnings(
    model: &ClassModel,
    generated: &[(String, bool)],
    outcome: &mut RoundOutcome,
) {
    let mut registered = BTreeSet::new();
    for class in model.classes.iter() {
        let Some(marker) = class.annotation(GENERATE_MOSHI_FACTORY) else {
            continue;
        };
        for member in marker.class_list("value") {
            if !registered.insert(member.clone()) {
                outcome
                    .warnings
                    .push(Warning::MultipleRegistration(member.clone()));
            }
        }
    }

    for (qualified, generates_factory) in generated {
        if !generates_factory && !registered.contains(qualified) {
            outcome
                .warnings
                .push(Warning::NotRegistered(qualified.clone()));
        }
    }
}
