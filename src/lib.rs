//! # snmp-smi
//!
//! Value and type primitives for SNMP Structure of Management Information
//! (SMI, RFC 2578), shared by MIB parsers, agents, walkers and collectors.
//!
//! ## Features
//!
//! - [`Oid`]: dotted-decimal parsing, SMI validation, tree-order comparison,
//!   prefix and scalar checks
//! - [`BaseType`]: the twelve SMI base types with their canonical names and
//!   the verbatim RFC 2578 Section 7 descriptions
//! - [`Type`]: one view over base types and user-defined subtypes such as
//!   textual conventions ([`DerivedType`])
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_smi::{BaseType, Oid, Type, is_scalar, oid};
//!
//! fn main() -> Result<(), snmp_smi::Error> {
//!     let sys_descr: Oid = "1.3.6.1.2.1.1.1.0".parse()?;
//!     assert!(is_scalar(&sys_descr));
//!     assert!(oid!(1, 3, 6, 1, 2, 1, 1).is_prefix_of(&sys_descr));
//!     assert!(sys_descr.is_before(&oid!(1, 3, 6, 1, 2, 1, 2)));
//!
//!     let err = Oid::parse("1..3").unwrap_err();
//!     assert_eq!(err.to_string(), "cannot have consecutive periods");
//!
//!     let counter = BaseType::Counter32;
//!     assert_eq!(counter.name(), "Counter32");
//!     assert_eq!(Type::units(&counter), "");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod oid;
pub mod prelude;
pub mod types;

// Re-exports for convenience
pub use error::{Error, ParseErrorKind, Result, ValidationErrorKind};
pub use oid::{MAX_OID_LEN, Oid, is_scalar};
pub use types::{BaseType, DerivedType, Type};
