//! moshigen-core - Moshi adapter generation engine
//!
//! This crate turns a serialized class model into Java sources:
//! - [`model::ClassModel`] describes the annotated classes and factories
//! - [`round::run`] drives one generation round over a model
//! - [`writer::SourceFile`] carries each emitted Java file
//! - [`error::GeneratorError`] names every way a class can be rejected
//!
//! The crate does no I/O: models come in as values, sources go out as
//! values, and the harness owns files and processes.

pub mod adapter;
pub mod codec;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod model;
pub mod naming;
pub mod round;
pub mod trace;
pub mod types;
pub mod writer;

pub use error::{GeneratorError, GeneratorResult};
pub use model::ClassModel;
pub use round::{ClassFailure, RoundOutcome, Warning};
pub use trace::PerfTrace;
pub use writer::SourceFile;
