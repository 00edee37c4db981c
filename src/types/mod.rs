//! SMI types.
//!
//! - [`BaseType`] - the closed catalog of RFC 2578 base types
//! - [`Type`] - the uniform view over base types and anything derived from them
//! - [`DerivedType`] - an owned [`Type`] for ranged subtypes, enumerations
//!   and textual conventions defined outside this crate
//!
//! # Example
//!
//! ```
//! use snmp_smi::{BaseType, DerivedType, Type};
//!
//! fn describe(t: &dyn Type) -> String {
//!     if t.units().is_empty() {
//!         format!("{} ({})", t.name(), t.base_type())
//!     } else {
//!         format!("{} ({}, {})", t.name(), t.base_type(), t.units())
//!     }
//! }
//!
//! let uptime = DerivedType::new("TimeInterval", BaseType::Integer32)
//!     .with_description("A period of time, measured in units of 0.01 seconds.")
//!     .with_units("centi-seconds");
//!
//! assert_eq!(describe(&BaseType::Counter64), "Counter64 (Counter64)");
//! assert_eq!(describe(&uptime), "TimeInterval (Integer32, centi-seconds)");
//! ```

mod base;
mod rfc2578;

use std::sync::Arc;

pub use base::BaseType;

/// Any SMI type: a base type, or a subtype built on one.
///
/// All observations are pure, so implementations must be shareable
/// across threads.
pub trait Type: Send + Sync {
    /// Canonical identifier of the type.
    fn name(&self) -> &str;

    /// Free-form description. May be empty for ad-hoc subtypes.
    fn description(&self) -> &str;

    /// The base type this type is built on. A base type returns itself.
    fn base_type(&self) -> BaseType;

    /// Display units, or an empty string if the type has none.
    fn units(&self) -> &str {
        ""
    }
}

impl Type for BaseType {
    fn name(&self) -> &str {
        BaseType::name(*self)
    }

    fn description(&self) -> &str {
        BaseType::description(*self)
    }

    fn base_type(&self) -> BaseType {
        *self
    }
}

impl<T: Type + ?Sized> Type for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn base_type(&self) -> BaseType {
        (**self).base_type()
    }

    fn units(&self) -> &str {
        (**self).units()
    }
}

impl<T: Type + ?Sized> Type for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn base_type(&self) -> BaseType {
        (**self).base_type()
    }

    fn units(&self) -> &str {
        (**self).units()
    }
}

impl<T: Type + ?Sized> Type for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn base_type(&self) -> BaseType {
        (**self).base_type()
    }

    fn units(&self) -> &str {
        (**self).units()
    }
}

/// A named type built on a [`BaseType`].
///
/// Starts with an empty description and no units; set them with the
/// consuming [`with_description()`](Self::with_description) and
/// [`with_units()`](Self::with_units) methods.
///
/// ```
/// use snmp_smi::{BaseType, DerivedType, Type};
///
/// let t = DerivedType::new("InterfaceIndex", BaseType::Integer32)
///     .with_description("A unique value, greater than zero, for each interface.");
///
/// assert_eq!(t.name(), "InterfaceIndex");
/// assert_eq!(t.base_type(), BaseType::Integer32);
/// assert_eq!(t.units(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedType {
    name: Box<str>,
    description: Box<str>,
    base: BaseType,
    units: Box<str>,
}

impl DerivedType {
    /// Create a derived type with the given name and base type.
    pub fn new(name: impl Into<Box<str>>, base: BaseType) -> Self {
        Self {
            name: name.into(),
            description: "".into(),
            base,
            units: "".into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<Box<str>>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display units.
    pub fn with_units(mut self, units: impl Into<Box<str>>) -> Self {
        self.units = units.into();
        self
    }
}

impl Type for DerivedType {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn base_type(&self) -> BaseType {
        self.base
    }

    fn units(&self) -> &str {
        &self.units
    }
}

impl std::fmt::Display for DerivedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
