use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string value that does not name any variant of the target enum.
#[derive(Debug, thiserror::Error)]
#[error("invalid {field} value: {value:?}")]
pub struct EnumParseError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// Serde goes through the wire string, not the variant name: the form
/// client expects values like `"Expert Opinion"` with a space.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EnumParseError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(D::Error::custom)
            }
        }
    };
}

str_enum!(Urgency {
    Urgent => "urgent",
    Moderate => "moderate",
    Mild => "mild",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(EvidenceLevel {
    A => "A",
    B => "B",
    C => "C",
    ExpertOpinion => "Expert Opinion",
});

impl EvidenceLevel {
    /// Relative strength of the evidence grade; higher is stronger
    /// (A > B > C > Expert Opinion).
    pub fn strength(&self) -> u8 {
        match self {
            Self::A => 3,
            Self::B => 2,
            Self::C => 1,
            Self::ExpertOpinion => 0,
        }
    }
}
