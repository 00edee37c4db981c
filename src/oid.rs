//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[i64; 16]>` to avoid heap allocation for common OIDs.
//! Sub-identifiers are logically unsigned 32-bit; the wider signed storage lets
//! [`Oid::validate()`] report negative values from signed construction and
//! values that overflowed `u32` while parsing.

use crate::error::{Error, ParseErrorKind, Result, ValidationErrorKind};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Maximum number of sub-identifiers allowed in an OID.
///
/// Per RFC 2578 Section 7.1.3: "Any instance of this type may have at most
/// 128 sub-identifiers".
///
/// This limit is not part of [`Oid::validate()`]. Check it with
/// [`Oid::validate_length()`] or [`Oid::validate_all()`].
pub const MAX_OID_LEN: usize = 128;

/// Largest value a sub-identifier may take (2^32-1).
pub const MAX_SUBIDENTIFIER: i64 = u32::MAX as i64;

/// Object Identifier.
///
/// Stored as a sequence of sub-identifiers. Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer sub-identifiers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[i64; 16]>,
}

impl Oid {
    /// Create an empty OID.
    ///
    /// The empty OID is what parsing `""` yields. It is not a valid OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from sub-identifier values.
    ///
    /// No validation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// let oid = Oid::new(0..5);
    /// assert_eq!(oid.arcs(), &[0, 1, 2, 3, 4]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = i64>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of sub-identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.1.0");
    ///
    /// // Out-of-range values are stored and reported by validate()
    /// let negative = Oid::from_slice(&[-1, 2]);
    /// assert!(!negative.is_valid());
    /// ```
    pub fn from_slice(arcs: &[i64]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted-decimal notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// The empty string parses to the empty OID without error. Any other
    /// input is validated after parsing, so a successful result is always
    /// a valid OID.
    ///
    /// A single leading period does not terminate a sub-identifier and is
    /// skipped; the remaining text is parsed and validated as usual.
    ///
    /// # Errors
    ///
    /// - `cannot have consecutive periods`
    /// - `cannot end with a period`
    /// - `invalid character at position {i}: {c}` (zero-based byte offset)
    /// - any error from [`validate()`](Self::validate)
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let oid = Oid::parse("1.2.3").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 2, 3]);
    ///
    /// assert!(Oid::parse("").unwrap().is_empty());
    ///
    /// let err = Oid::parse("1.2a.3").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid character at position 3: a");
    ///
    /// let err = Oid::parse("3.1").unwrap_err();
    /// assert_eq!(err.to_string(), "first sub-identifier must be 0, 1, or 2: 3");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let oid = parse_arcs(s).map_err(|kind| {
            tracing::debug!(target: "snmp_smi::oid", { smi.input = s, smi.error = %kind }, "malformed OID text");
            Error::parse(kind, s)
        })?;

        if let Err(kind) = oid.check() {
            tracing::debug!(target: "snmp_smi::oid", { smi.input = s, smi.error = %kind }, "parsed OID failed validation");
            return Err(Error::validation(kind));
        }

        Ok(oid)
    }

    /// Get the sub-identifier values.
    pub fn arcs(&self) -> &[i64] {
        &self.arcs
    }

    /// Get the number of sub-identifiers.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check whether this OID sorts before `other` in tree order.
    ///
    /// Sub-identifiers are compared left to right and the first difference
    /// decides. A strict prefix of `other` is before it; an OID is never
    /// before one of its own strict prefixes.
    ///
    /// Equal OIDs return `true`, so this is "before or equal". Walkers
    /// depend on that; use `<` from [`Ord`] for a strict comparison.
    /// Note that [`is_after()`](Self::is_after) is defined as the mirror
    /// image and therefore also returns `true` for equal OIDs.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid;
    ///
    /// assert!(oid!(1, 2, 3).is_before(&oid!(2, 3, 4)));
    /// assert!(oid!(1, 2).is_before(&oid!(1, 2, 3)));
    /// assert!(!oid!(1, 2, 3).is_before(&oid!(1, 2)));
    /// assert!(oid!(1, 2).is_before(&oid!(1, 2)));
    /// ```
    pub fn is_before(&self, other: &Oid) -> bool {
        for (i, arc) in self.arcs.iter().enumerate() {
            let Some(theirs) = other.arcs.get(i) else {
                return false;
            };

            match arc.cmp(theirs) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }

        true
    }

    /// Check whether this OID sorts after `other` in tree order.
    ///
    /// Always equal to `other.is_before(self)`.
    pub fn is_after(&self, other: &Oid) -> bool {
        other.is_before(self)
    }

    /// Check if this OID is a prefix of `other`.
    ///
    /// An OID is a prefix of itself, and the empty OID is a prefix of
    /// every OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let system = Oid::parse("1.3.6.1.2.1.1").unwrap();
    /// let sys_descr = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    ///
    /// assert!(system.is_prefix_of(&sys_descr));
    /// assert!(!sys_descr.is_prefix_of(&system));
    /// assert!(sys_descr.is_prefix_of(&sys_descr));
    /// assert!(Oid::empty().is_prefix_of(&sys_descr));
    /// ```
    pub fn is_prefix_of(&self, other: &Oid) -> bool {
        self.arcs.len() <= other.arcs.len() && other.arcs[..self.arcs.len()] == self.arcs[..]
    }

    /// Check if this OID names a scalar instance (last sub-identifier is 0).
    ///
    /// See [`is_scalar`].
    pub fn is_scalar(&self) -> bool {
        self.arcs.last() == Some(&0)
    }

    /// Get the parent OID (all sub-identifiers except the last).
    ///
    /// Returns `None` if the OID is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let sys_descr = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// let parent = sys_descr.parent().unwrap();
    /// assert_eq!(parent.to_string(), "1.3.6.1.2.1.1.1");
    ///
    /// assert!(Oid::empty().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<Oid> {
        let (_, rest) = self.arcs.split_last()?;
        Some(Oid {
            arcs: SmallVec::from_slice(rest),
        })
    }

    /// Create a child OID by appending a sub-identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// let sys_descr = Oid::parse("1.3.6.1.2.1.1.1").unwrap();
    /// let instance = sys_descr.child(0);
    /// assert_eq!(instance.to_string(), "1.3.6.1.2.1.1.1.0");
    /// assert!(instance.is_scalar());
    /// ```
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(i64::from(arc));
        Oid { arcs }
    }

    /// Validate the OID against the SMI constraints.
    ///
    /// - at least two sub-identifiers
    /// - every sub-identifier in `0..=2^32-1`
    /// - first sub-identifier is 0, 1, or 2
    ///
    /// Sub-identifiers are checked in order and the first violation is
    /// returned. Positions in error messages are 1-based.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::Oid;
    ///
    /// assert!(Oid::from_slice(&[1, 3, 6, 1]).validate().is_ok());
    ///
    /// let err = Oid::from_slice(&[1]).validate().unwrap_err();
    /// assert_eq!(err.to_string(), "must have at least two sub-identifiers");
    ///
    /// let err = Oid::from_slice(&[-1, 2]).validate().unwrap_err();
    /// assert_eq!(err.to_string(), "sub-identifier at position 1 is negative: -1");
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.check().map_err(Error::validation)
    }

    /// Shorthand for `self.validate().is_ok()`.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Validate that the OID doesn't exceed [`MAX_OID_LEN`] sub-identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_smi::oid::{Oid, MAX_OID_LEN};
    ///
    /// let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// assert!(oid.validate_length().is_ok());
    ///
    /// let too_long = Oid::new((0..150).map(|_| 1));
    /// assert!(too_long.validate_length().is_err());
    /// ```
    pub fn validate_length(&self) -> Result<()> {
        if self.arcs.len() > MAX_OID_LEN {
            return Err(Error::validation(ValidationErrorKind::TooManyArcs {
                count: self.arcs.len(),
                max: MAX_OID_LEN,
            }));
        }
        Ok(())
    }

    /// Validate both SMI constraints and length.
    ///
    /// Combines [`validate()`](Self::validate) and [`validate_length()`](Self::validate_length).
    pub fn validate_all(&self) -> Result<()> {
        self.validate()?;
        self.validate_length()
    }

    fn check(&self) -> std::result::Result<(), ValidationErrorKind> {
        if self.arcs.len() < 2 {
            return Err(ValidationErrorKind::TooShort);
        }

        for (i, &value) in self.arcs.iter().enumerate() {
            let position = i + 1;
            if value < 0 {
                return Err(ValidationErrorKind::Negative { position, value });
            }
            if value > MAX_SUBIDENTIFIER {
                return Err(ValidationErrorKind::TooLarge { position, value });
            }
            if i == 0 && value > 2 {
                return Err(ValidationErrorKind::InvalidFirstArc(value));
            }
        }

        Ok(())
    }
}

/// Scan dotted-decimal text into sub-identifiers without validating them.
///
/// Accumulation saturates at `i64::MAX`, which is still far above
/// [`MAX_SUBIDENTIFIER`], so overflow surfaces as a "too large" error.
fn parse_arcs(s: &str) -> std::result::Result<Oid, ParseErrorKind> {
    let bytes = s.as_bytes();
    let mut arcs = SmallVec::new();
    let mut sid: i64 = 0;

    for (i, c) in s.char_indices() {
        match c {
            '.' => {
                if i > 0 && bytes[i - 1] == b'.' {
                    return Err(ParseErrorKind::ConsecutivePeriods);
                }

                if i == bytes.len() - 1 {
                    return Err(ParseErrorKind::TrailingPeriod);
                }

                // A leading period has no sub-identifier in front of it.
                if i > 0 {
                    arcs.push(sid);
                    sid = 0;
                }
            }
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                sid = sid.saturating_mul(10).saturating_add(digit);
            }
            _ => {
                return Err(ParseErrorKind::InvalidCharacter {
                    position: i,
                    character: c,
                });
            }
        }
    }

    arcs.push(sid);
    Ok(Oid { arcs })
}

/// Check if an OID names a scalar instance.
///
/// A scalar instance OID ends with a zero sub-identifier. The OID does
/// not need to be valid; the empty OID is not scalar.
///
/// # Examples
///
/// ```
/// use snmp_smi::{is_scalar, oid};
///
/// assert!(is_scalar(&oid!(1, 0)));
/// assert!(!is_scalar(&oid!(1, 2)));
/// assert!(is_scalar(&oid!(0)));
/// ```
pub fn is_scalar(oid: &Oid) -> bool {
    oid.is_scalar()
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[i64]> for Oid {
    fn from(arcs: &[i64]) -> Self {
        Self::from_slice(arcs)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::new(arcs.iter().copied().map(i64::from))
    }
}

impl From<Vec<i64>> for Oid {
    fn from(arcs: Vec<i64>) -> Self {
        Self::new(arcs)
    }
}

impl<const N: usize> From<[i64; N]> for Oid {
    fn from(arcs: [i64; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Strict lexicographic order. Agrees with [`Oid::is_before()`] on
/// distinct OIDs.
impl Ord for Oid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from sub-identifier literals.
///
/// # Examples
///
/// ```
/// use snmp_smi::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
///
/// // Trailing commas are allowed
/// let sys_name = oid!(1, 3, 6, 1, 2, 1, 1, 5, 0,);
/// assert!(oid!(1, 3, 6, 1, 2, 1, 1).is_prefix_of(&sys_name));
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    }

    #[test]
    fn test_parse_empty() {
        let oid = Oid::parse("").unwrap();
        assert!(oid.is_empty());
        assert!(!oid.is_valid());
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            ("1..3", "cannot have consecutive periods"),
            ("1.2.", "cannot end with a period"),
            (".", "cannot end with a period"),
            ("1.2a.3", "invalid character at position 3: a"),
            ("-1.2", "invalid character at position 0: -"),
            ("1. 2", "invalid character at position 2:  "),
        ];

        for (input, expected) in cases {
            let err = Oid::parse(input).unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "{input}: {err:?}");
            assert_eq!(err.to_string(), expected, "input {input:?}");
            assert_eq!(err.input(), Some(input));
        }
    }

    #[test]
    fn test_parse_reports_whole_character() {
        // the whole character is reported, not its first byte
        let err = Oid::parse("1.2\u{00e9}").unwrap_err();
        assert_eq!(err.to_string(), "invalid character at position 3: é");
        assert!(matches!(
            err,
            Error::Parse {
                kind: ParseErrorKind::InvalidCharacter {
                    position: 3,
                    character: '\u{00e9}'
                },
                ..
            }
        ));
    }

    #[test]
    fn test_parse_first_error_wins() {
        // consecutive periods come before the bad character
        let err = Oid::parse("1..x").unwrap_err();
        assert_eq!(err.to_string(), "cannot have consecutive periods");

        // bad character comes before the trailing period
        let err = Oid::parse("1.x.").unwrap_err();
        assert_eq!(err.to_string(), "invalid character at position 2: x");
    }

    #[test]
    fn test_parse_leading_period_skipped() {
        assert_eq!(Oid::parse(".1.2").unwrap().arcs(), &[1, 2]);

        let err = Oid::parse(".1").unwrap_err();
        assert_eq!(err.to_string(), "must have at least two sub-identifiers");

        let err = Oid::parse("..1").unwrap_err();
        assert_eq!(err.to_string(), "cannot have consecutive periods");
    }

    #[test]
    fn test_parse_validates() {
        let err = Oid::parse("1").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErrorKind::TooShort)
        ));

        let err = Oid::parse("3.1").unwrap_err();
        assert_eq!(err.to_string(), "first sub-identifier must be 0, 1, or 2: 3");
    }

    #[test]
    fn test_parse_overflow_is_too_large() {
        let err = Oid::parse("1.4294967296").unwrap_err();
        assert_eq!(
            err.to_string(),
            "sub-identifier at position 2 is too large: 4294967296"
        );

        let oid = Oid::parse("1.4294967295").unwrap();
        assert_eq!(oid.arcs(), &[1, 4294967295]);
    }

    #[test]
    fn test_parse_huge_sub_identifier_saturates() {
        let err = Oid::parse("1.2.99999999999999999999999999").unwrap_err();
        assert_eq!(
            err,
            Error::Validation(ValidationErrorKind::TooLarge {
                position: 3,
                value: i64::MAX,
            })
        );
    }

    #[test]
    fn test_parse_leading_zeros() {
        let oid = Oid::parse("1.03.006").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6]);
        assert_eq!(oid.to_string(), "1.3.6");
    }

    #[test]
    fn test_display() {
        let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0]);
        assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.1.0");
        assert_eq!(Oid::empty().to_string(), "");
        assert_eq!(format!("{:?}", oid!(1, 2, 3)), "Oid(1.2.3)");
    }

    #[test]
    fn test_equals() {
        assert_eq!(oid!(1, 2, 3), oid!(1, 2, 3));
        assert_ne!(oid!(1, 2, 3), oid!(1, 2, 3, 4));
        assert_ne!(oid!(1, 2, 3), oid!(1, 2, 4));
    }

    #[test]
    fn test_is_before() {
        assert!(oid!(1, 2, 3).is_before(&oid!(2, 3, 4)));
        assert!(!oid!(2, 3, 4).is_before(&oid!(1, 2, 3)));
        assert!(oid!(1, 3, 6).is_before(&oid!(1, 3, 6, 1)));
        assert!(!oid!(1, 3, 6, 1).is_before(&oid!(1, 3, 6)));
        assert!(oid!(1, 3, 9).is_before(&oid!(1, 4)));
    }

    #[test]
    fn test_is_before_equal_is_true() {
        let a = oid!(1, 3, 6, 1);
        assert!(a.is_before(&a.clone()));
        assert!(a.is_after(&a.clone()));
        assert!(Oid::empty().is_before(&Oid::empty()));
    }

    #[test]
    fn test_is_after() {
        assert!(oid!(2, 3, 4).is_after(&oid!(1, 2, 3)));
        assert!(!oid!(1, 2, 3).is_after(&oid!(2, 3, 4)));
    }

    #[test]
    fn test_is_prefix_of() {
        assert!(oid!(1, 2).is_prefix_of(&oid!(1, 2, 3)));
        assert!(!oid!(1, 3).is_prefix_of(&oid!(1, 2, 3)));
        assert!(!oid!(1, 2, 3, 4).is_prefix_of(&oid!(1, 2, 3)));
        assert!(Oid::empty().is_prefix_of(&oid!(1, 2)));
        assert!(Oid::empty().is_prefix_of(&Oid::empty()));
    }

    #[test]
    fn test_is_scalar() {
        assert!(is_scalar(&oid!(1, 0)));
        assert!(!is_scalar(&oid!(1, 2)));
        assert!(!is_scalar(&Oid::empty()));
        assert!(is_scalar(&oid!(0)));
    }

    #[test]
    fn test_validate() {
        assert!(oid!(1, 2).validate().is_ok());
        assert!(oid!(0, 0).validate().is_ok());
        assert!(oid!(2, 4294967295).validate().is_ok());

        let cases = [
            (Oid::empty(), "must have at least two sub-identifiers"),
            (oid!(1), "must have at least two sub-identifiers"),
            (oid!(-1, 2), "sub-identifier at position 1 is negative: -1"),
            (oid!(1, 2, -7), "sub-identifier at position 3 is negative: -7"),
            (
                oid!(1, 4294967296),
                "sub-identifier at position 2 is too large: 4294967296",
            ),
            (oid!(3, 2), "first sub-identifier must be 0, 1, or 2: 3"),
        ];

        for (oid, expected) in cases {
            let err = oid.validate().unwrap_err();
            assert_eq!(err.to_string(), expected, "{oid:?}");
            assert!(!oid.is_valid());
        }
    }

    #[test]
    fn test_validate_first_violation_wins() {
        // first arc out of range is reported before a later negative arc
        let err = oid!(5, -1).validate().unwrap_err();
        assert_eq!(err.to_string(), "first sub-identifier must be 0, 1, or 2: 5");

        // a too-large first arc is "too large", not "must be 0, 1, or 2"
        let err = oid!(4294967296, 1).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "sub-identifier at position 1 is too large: 4294967296"
        );
    }

    #[test]
    fn test_parent_and_child() {
        let oid = oid!(1, 3, 6, 1);
        assert_eq!(oid.parent(), Some(oid!(1, 3, 6)));
        assert_eq!(oid.child(2), oid!(1, 3, 6, 1, 2));
        assert_eq!(oid.child(u32::MAX).arcs().last(), Some(&4294967295));
        assert!(oid!(1).parent().unwrap().is_empty());
    }

    #[test]
    fn test_validate_length() {
        let at_limit = Oid::new((0..MAX_OID_LEN).map(|_| 1));
        assert!(at_limit.validate_length().is_ok());
        assert!(at_limit.validate_all().is_ok());

        let over = Oid::new((0..=MAX_OID_LEN).map(|_| 1));
        let err = over.validate_length().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErrorKind::TooManyArcs { count: 129, max: 128 })
        ));
        // the core constraints don't include the length limit
        assert!(over.validate().is_ok());
        assert!(over.validate_all().is_err());
    }

    #[test]
    fn test_ord() {
        let mut oids = vec![oid!(1, 3, 6, 2), oid!(1, 3), oid!(1, 3, 6, 1, 5), oid!(0, 9)];
        oids.sort();
        assert_eq!(
            oids,
            vec![oid!(0, 9), oid!(1, 3), oid!(1, 3, 6, 1, 5), oid!(1, 3, 6, 2)]
        );
    }

    #[test]
    fn test_conversions() {
        let from_u32: Oid = (&[1u32, 3, 6][..]).into();
        assert_eq!(from_u32, oid!(1, 3, 6));
        assert_eq!(Oid::from([1, 3, 6]), oid!(1, 3, 6));
        assert_eq!(Oid::from(vec![1, 3, 6]), oid!(1, 3, 6));
        assert_eq!(Oid::from(&[1i64, 3, 6][..]), oid!(1, 3, 6));
    }

    #[test]
    fn test_oid_fromstr() {
        let oid: Oid = "1.3.6.1.2.1.1.1.0".parse().unwrap();
        assert_eq!(oid, oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));

        let empty: Oid = "".parse().unwrap();
        assert!(empty.is_empty());

        let original = oid!(1, 3, 6, 1, 4, 1, 9, 9, 42);
        let parsed: Oid = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
