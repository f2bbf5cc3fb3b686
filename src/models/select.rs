//! Select-dropdown values: a machine key paired with a display label

use serde::{Deserialize, Serialize};
use std::fmt;

/// A select metafield value as the bucket sends it: `{ "key": .., "value": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labeled<K> {
    pub key: K,

    #[serde(default)]
    pub value: String,
}

impl<K: fmt::Display> Labeled<K> {
    /// The display label, falling back to the key when the label is blank
    pub fn label(&self) -> String {
        if self.value.trim().is_empty() {
            self.key.to_string()
        } else {
            self.value.clone()
        }
    }
}

/// Declares a closed set of select keys plus an `Other` bucket for keys
/// added in the bucket later.
macro_rules! select_key {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A key not known to this site
            Other(String),
        }

        impl $name {
            /// Convert the key to its string representation
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Other(key) => key,
                }
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                match key.as_str() {
                    $($key => $name::$variant,)+
                    _ => $name::Other(key),
                }
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

select_key! {
    /// Project status
    ProjectStatus {
        Completed => "completed",
        InProgress => "in_progress",
        Planned => "planned",
    }
}

select_key! {
    /// Skill grouping
    SkillCategory {
        Frontend => "frontend",
        Backend => "backend",
        Database => "database",
        Tools => "tools",
        /// Key `other`; not named `Other` so it stays apart from the `Other(String)` fallback
        Misc => "other",
    }
}

select_key! {
    /// Skill proficiency level
    Proficiency {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Expert => "expert",
    }
}

select_key! {
    /// Testimonial star rating
    Rating {
        One => "1",
        Two => "2",
        Three => "3",
        Four => "4",
        Five => "5",
    }
}

impl Rating {
    /// Number of filled stars, or `None` for an unknown key
    pub fn stars(&self) -> Option<u8> {
        match self {
            Rating::One => Some(1),
            Rating::Two => Some(2),
            Rating::Three => Some(3),
            Rating::Four => Some(4),
            Rating::Five => Some(5),
            Rating::Other(_) => None,
        }
    }
}
