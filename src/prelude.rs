//! Commonly used items.
//!
//! ```
//! use snmp_smi::prelude::*;
//!
//! let oid: Oid = "1.3.6.1.2.1.1.3.0".parse().unwrap();
//! assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.3.0");
//! assert_eq!(BaseType::TimeTicks.base_type(), BaseType::TimeTicks);
//! ```

pub use crate::error::{Error, Result};
pub use crate::oid;
pub use crate::oid::{Oid, is_scalar};
pub use crate::types::{BaseType, DerivedType, Type};
