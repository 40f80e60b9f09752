//! Macro for implementing `as_str`, Display and FromStr for closed key enums
//!
//! Categories and activity sources are written as short lowercase keys in
//! configuration files and log fields. This macro generates the three
//! conversions from a single variant-to-key table so they cannot drift.
//!
//! # Example
//!
//! ```rust
//! use weekplan_domain::impl_domain_key_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Early,
//!     Late,
//! }
//!
//! impl_domain_key_conversions!(Shift {
//!     Early => "early",
//!     Late => "late",
//! });
//!
//! assert_eq!(Shift::Late.as_str(), "late");
//! assert_eq!("EARLY".parse::<Shift>(), Ok(Shift::Early));
//! ```

/// Implements `as_str`, Display and FromStr for key enums
///
/// This macro generates:
/// - `as_str()`: the canonical lowercase key
/// - Display trait: writes the canonical key
/// - FromStr trait: parses case-insensitive keys, ignoring surrounding
///   whitespace
///
/// Keys must be lowercase for parsing to round-trip.
#[macro_export]
macro_rules! impl_domain_key_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase key for this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
