//! Open string enums.
//!
//! The Webex API adds new vocabulary values without notice. Enums declared
//! through [`string_enum!`] keep every known value as a variant and carry
//! anything else in `Unrecognized(String)`, which serializes back unchanged.
//! Equality and hashing go through the wire value, so a hand-built
//! `Unrecognized("RED")` equals the known `Red` variant it parses back to.

/// Declare a string-backed enum with an `Unrecognized(String)` catch-all.
///
/// ```ignore
/// string_enum! {
///     /// Call state.
///     pub enum CallState {
///         Connecting => "connecting",
///         Alerting => "alerting",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Value not known to this version of the crate.
            Unrecognized(String),
        }

        impl $name {
            /// Wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            /// Whether the value was not recognised when parsed.
            pub const fn is_unrecognized(&self) -> bool {
                matches!(self, Self::Unrecognized(_))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    string_enum! {
        /// Test vocabulary.
        pub enum Color {
            Red => "RED",
            DarkBlue => "darkBlue",
        }
    }

    #[test]
    fn test_known_value_parses_to_variant() {
        let color: Color = serde_json::from_str("\"darkBlue\"").unwrap();
        assert_eq!(color, Color::DarkBlue);
        assert!(!color.is_unrecognized());
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let color: Color = serde_json::from_str("\"MAGENTA\"").unwrap();
        assert_eq!(color, Color::Unrecognized("MAGENTA".to_string()));
        assert!(color.is_unrecognized());
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"MAGENTA\"");
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Color::Red.to_string(), "RED");
        let parsed: Color = "RED".parse().unwrap();
        assert_eq!(parsed, Color::Red);
    }

    #[test]
    fn test_unrecognized_known_value_equals_variant() {
        let built = Color::Unrecognized("RED".to_string());
        assert_eq!(built, Color::Red);

        let parsed: Color = serde_json::from_value(serde_json::to_value(&built).unwrap()).unwrap();
        assert_eq!(parsed, built);
        assert!(!parsed.is_unrecognized());

        let mut set = std::collections::HashSet::new();
        set.insert(Color::Red);
        assert!(set.contains(&built));
        assert_ne!(Color::Unrecognized("red".to_string()), Color::Red);
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_str::<Color>("42").is_err());
    }
}
