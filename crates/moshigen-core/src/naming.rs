//! Naming rules for generated adapter and factory types.
//!
//! Generated type names and accessor method names are derived from the model,
//! never configured per field:
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Simple` | [`adapter_name`] | `SimpleAdapter` |
//! | `Simple` | [`implicit_factory_name`] | `SimpleAdapterFactory` |
//! | `age` | [`getter_name`] | `getAge` |
//! | `registered` | [`boolean_accessor_name`] | `isRegistered` |
//! | `isActive` | [`boolean_accessor_name`] | `isActive` |

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use moshigen_core::naming::capitalize;
///
/// assert_eq!(capitalize("name"), "Name");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Conventional `get` accessor name for a field.
///
/// # Examples
///
/// ```
/// use moshigen_core::naming::getter_name;
///
/// assert_eq!(getter_name("age"), "getAge");
/// ```
pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

/// Conventional `is` accessor name for a boolean-like field.
///
/// A field whose name already starts with `is` keeps its own name.
///
/// # Examples
///
/// ```
/// use moshigen_core::naming::boolean_accessor_name;
///
/// assert_eq!(boolean_accessor_name("registered"), "isRegistered");
/// assert_eq!(boolean_accessor_name("isActive"), "isActive");
/// ```
pub fn boolean_accessor_name(field: &str) -> String {
    if field.starts_with("is") {
        field.to_string()
    } else {
        format!("is{}", capitalize(field))
    }
}

/// Name of the adapter generated for a class.
pub fn adapter_name(simple_name: &str) -> String {
    format!("{simple_name}Adapter")
}

/// Name of the implicit single-class factory generated next to an adapter.
pub fn implicit_factory_name(simple_name: &str) -> String {
    format!("{simple_name}AdapterFactory")
}
