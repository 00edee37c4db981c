//! SMI base types (RFC 2578 Section 7).

use super::rfc2578;
use crate::error::{Error, Result};

/// The primitive SMI types every MIB-defined type derives from.
///
/// The set is closed. Each member has a canonical [`name()`](Self::name)
/// and the normative [`description()`](Self::description) from
/// RFC 2578 Section 7.
///
/// # Example
///
/// ```
/// use snmp_smi::BaseType;
///
/// assert_eq!(BaseType::Counter32.name(), "Counter32");
/// assert_eq!(BaseType::Counter32.to_string(), "Counter32");
/// assert_eq!(BaseType::Integer.description(), BaseType::Integer32.description());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseType {
    /// Signed 32-bit integer.
    Integer32,
    /// INTEGER, including named-number enumerations.
    Integer,
    /// OCTET STRING.
    OctetString,
    /// OBJECT IDENTIFIER.
    ObjectIdentifier,
    /// BITS (enumeration of named bits).
    Bits,
    /// IPv4 address.
    IpAddress,
    /// 32-bit counter (monotonically increasing, wraps).
    Counter32,
    /// 32-bit gauge (can increase or decrease).
    Gauge32,
    /// Time in hundredths of a second.
    TimeTicks,
    /// Arbitrary ASN.1 data.
    Opaque,
    /// 64-bit counter.
    Counter64,
    /// Unsigned 32-bit integer.
    Unsigned32,
}

impl BaseType {
    /// Every base type, in declaration order.
    pub const ALL: [BaseType; 12] = [
        Self::Integer32,
        Self::Integer,
        Self::OctetString,
        Self::ObjectIdentifier,
        Self::Bits,
        Self::IpAddress,
        Self::Counter32,
        Self::Gauge32,
        Self::TimeTicks,
        Self::Opaque,
        Self::Counter64,
        Self::Unsigned32,
    ];

    /// Canonical SMI identifier of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer32 => "Integer32",
            Self::Integer => "Integer",
            Self::OctetString => "OctetString",
            Self::ObjectIdentifier => "ObjectIdentifier",
            Self::Bits => "Bits",
            Self::IpAddress => "IpAddress",
            Self::Counter32 => "Counter32",
            Self::Gauge32 => "Gauge32",
            Self::TimeTicks => "TimeTicks",
            Self::Opaque => "Opaque",
            Self::Counter64 => "Counter64",
            Self::Unsigned32 => "Unsigned32",
        }
    }

    /// Normative description of the type, verbatim from RFC 2578 Section 7.
    ///
    /// `Integer32` and `Integer` share the same text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Integer32 | Self::Integer => rfc2578::INTEGER32,
            Self::OctetString => rfc2578::OCTET_STRING,
            Self::ObjectIdentifier => rfc2578::OBJECT_IDENTIFIER,
            Self::Bits => rfc2578::BITS,
            Self::IpAddress => rfc2578::IP_ADDRESS,
            Self::Counter32 => rfc2578::COUNTER32,
            Self::Gauge32 => rfc2578::GAUGE32,
            Self::TimeTicks => rfc2578::TIME_TICKS,
            Self::Opaque => rfc2578::OPAQUE,
            Self::Counter64 => rfc2578::COUNTER64,
            Self::Unsigned32 => rfc2578::UNSIGNED32,
        }
    }

    /// A base type is its own base type.
    #[must_use]
    pub const fn base_type(self) -> BaseType {
        self
    }

    /// Position in declaration order.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a base type by its canonical name.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// ```
    /// use snmp_smi::BaseType;
    ///
    /// assert_eq!(BaseType::from_name("Gauge32"), Some(BaseType::Gauge32));
    /// assert_eq!(BaseType::from_name("gauge32"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<BaseType> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownBaseType(s.into()))
    }
}
