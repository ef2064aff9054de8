//! Allowed values - enumerations of CloudFormation literal values

/// Error from a `FromStr` or `TryFrom<&str>` conversion of an allowed value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {type_name} value '{value}', expected one of: {}", expected.join(", "))]
pub struct ConversionError {
    pub type_name: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl ConversionError {
    pub fn new(type_name: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            type_name,
            value: value.to_string(),
            expected,
        }
    }
}

/// Declare an enumeration of the literal values a property accepts.
///
/// ```
/// cirrus_core::allowed_values! {
///     /// Protocol of an API
///     pub enum ProtocolType {
///         Http = "HTTP",
///         Websocket = "WEBSOCKET",
///     }
/// }
///
/// assert_eq!(ProtocolType::Http.as_str(), "HTTP");
/// assert_eq!("WEBSOCKET".parse::<ProtocolType>().unwrap(), ProtocolType::Websocket);
/// assert_eq!(ProtocolType::VALUES, &["HTTP", "WEBSOCKET"]);
/// ```
#[macro_export]
macro_rules! allowed_values {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::serde::Deserialize,
            ::serde::Serialize,
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every literal CloudFormation accepts for this type, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub const SCHEMA: $crate::schema::EnumSchema = $crate::schema::EnumSchema {
                name: stringify!($name),
                values: Self::VALUES,
            };

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::allowed_values::ConversionError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::allowed_values::ConversionError::new(
                        stringify!($name),
                        value,
                        Self::VALUES,
                    )),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::allowed_values::ConversionError;

            fn try_from(value: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
                value.parse()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::allowed_values! {
        /// Test enumeration
        pub enum Mode {
            SingleAz = "single-az",
            CrossAz = "cross-az",
        }
    }

    #[test]
    fn serde_uses_literal_values() {
        let json = serde_json::to_value(Mode::CrossAz).unwrap();
        assert_eq!(json, serde_json::json!("cross-az"));
        let mode: Mode = serde_json::from_value(serde_json::json!("single-az")).unwrap();
        assert_eq!(mode, Mode::SingleAz);
    }

    #[test]
    fn unknown_literal_is_rejected() {
        assert!(serde_json::from_value::<Mode>(serde_json::json!("SingleAz")).is_err());
        let err = "both".parse::<Mode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Mode value 'both', expected one of: single-az, cross-az"
        );
    }

    #[test]
    fn schema_mirrors_values() {
        assert_eq!(Mode::SCHEMA.name, "Mode");
        assert_eq!(Mode::SCHEMA.values, &["single-az", "cross-az"]);
        assert_eq!(Mode::try_from("cross-az").unwrap().to_string(), "cross-az");
    }
}
