use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a unit (1-based, as assigned by the content data).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(u32);

impl UnitId {
    /// The first unit, which is always accessible.
    pub const FIRST: UnitId = UnitId(1);

    /// Creates a new `UnitId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The unit immediately before this one, if any.
    #[must_use]
    pub fn previous(&self) -> Option<UnitId> {
        self.0.checked_sub(1).map(UnitId)
    }

    fn lesson_prefixes(&self) -> [String; 2] {
        [format!("{}-", self.0), format!("{}.", self.0)]
    }

    fn exercise_prefix(&self) -> String {
        format!("ex-{}-", self.0)
    }
}

/// Declares a string-backed identifier assigned by external content data.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a lesson (a unit section), e.g. `"1-2"` or `"1.2"`.
    LessonId
);
string_id!(
    /// Identifier of an exercise, e.g. `"ex-1-3"`.
    ExerciseId
);
string_id!(
    /// Identifier of a vocabulary item.
    WordId
);

impl LessonId {
    /// Lesson ids are scoped to a unit by a `"{unit}-"` or `"{unit}."` prefix.
    #[must_use]
    pub fn belongs_to(&self, unit: UnitId) -> bool {
        unit.lesson_prefixes()
            .iter()
            .any(|prefix| self.0.starts_with(prefix.as_str()))
    }
}

impl ExerciseId {
    /// Exercise ids are scoped to a unit by an `"ex-{unit}-"` prefix.
    #[must_use]
    pub fn belongs_to(&self, unit: UnitId) -> bool {
        self.0.starts_with(&unit.exercise_prefix())
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for UnitId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(UnitId::new).map_err(|_| ParseIdError {
            kind: "UnitId".to_string(),
        })
    }
}
