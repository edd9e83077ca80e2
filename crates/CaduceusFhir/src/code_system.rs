//! Closed FHIR code systems as Rust enums.
//!
//! Each enum serializes to its FHIR code string and rejects any other string,
//! so a `Code<NarrativeStatus>` field refuses `"unknown-status"` at decode time.

/// Declares a code system enum together with its code-string mapping.
macro_rules! fhir_code_system {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every code of this system, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::string::String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err(format!("unknown {} code: {}", stringify!($name), s)),
                }
            }
        }
    };
}

pub(crate) use fhir_code_system;

#[cfg(all(test, feature = "R4"))]
mod tests {
    use crate::r4::{AdministrativeGender, NarrativeStatus};

    #[test]
    fn test_code_strings() {
        assert_eq!(NarrativeStatus::Generated.as_str(), "generated");
        assert_eq!(AdministrativeGender::Unknown.to_string(), "unknown");
        assert_eq!("female".parse::<AdministrativeGender>(), Ok(AdministrativeGender::Female));
        assert!("Female".parse::<AdministrativeGender>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&NarrativeStatus::Additional).unwrap();
        assert_eq!(json, "\"additional\"");
        assert!(serde_json::from_str::<NarrativeStatus>("\"nope\"").is_err());
        assert_eq!(NarrativeStatus::ALL.len(), 4);
    }
}
