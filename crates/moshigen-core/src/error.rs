//! Error types for model validation and descriptor construction.

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Validation errors raised while building descriptors.
///
/// Every variant is fatal for the class (or factory declaration) it names,
/// and only for that class: the round driver records the failure and keeps
/// processing the remaining classes.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The adapter marker sits on an interface or enum declaration
    #[error("only classes can be annotated with @GenerateMoshi: {0}")]
    NotAClass(String),

    /// Target class is not public
    #[error("class {0} is not public")]
    NotPublic(String),

    /// Target class is abstract
    #[error("class {0} is abstract")]
    Abstract(String),

    /// More than one eligible constructor after parcel-constructor exclusion
    #[error("class {0} must have only 1 constructor")]
    MultipleConstructors(String),

    /// No eligible constructor at all
    #[error("class {0} must have a constructor")]
    NoConstructor(String),

    /// The sole constructor takes no parameters
    #[error("class {0} must have a non-empty constructor")]
    EmptyConstructor(String),

    /// Walking the enclosing scopes found no package
    #[error("failed to find package of {0}")]
    NoPackage(String),

    /// Field kind the streaming reader has no method for (byte, char)
    #[error("{primitive} not supported: {class_name}.{field}")]
    UnsupportedPrimitive {
        class_name: String,
        field: String,
        primitive: &'static str,
    },

    /// Two model entries share one qualified name
    #[error("duplicate class in model: {0}")]
    DuplicateClass(String),

    /// Factory declaration with an empty member list
    #[error("factory {0} must register at least one class")]
    EmptyFactory(String),
}
