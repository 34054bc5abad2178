//! Numeric identifiers assigned by the API.

use std::fmt;

/// Raised when CLI input does not name a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    kind: &'static str,
}

impl IdParseError {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} id must be a positive integer", self.kind)
    }
}

impl std::error::Error for IdParseError {}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw numeric identifier.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::ids::IdParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .map(Self)
                    .ok_or_else(|| $crate::domain::ids::IdParseError::new($kind))
            }
        }
    };
}

pub(crate) use entity_id;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    entity_id!(
        /// Identifier used only by these tests.
        WidgetId,
        "widget"
    );

    #[rstest]
    #[case::plain("7", 7)]
    #[case::padded(" 12 ", 12)]
    fn parses_positive_ids(#[case] input: &str, #[case] expected: i64) {
        let id: WidgetId = input.parse().expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-3")]
    #[case::text("seven")]
    fn rejects_non_positive_or_non_numeric_ids(#[case] input: &str) {
        let err = input.parse::<WidgetId>().expect_err("invalid id");
        assert_eq!(err.to_string(), "widget id must be a positive integer");
    }

    #[rstest]
    fn serialises_as_bare_number() {
        let json = serde_json::to_string(&WidgetId::new(5)).expect("serialise");
        assert_eq!(json, "5");
    }
}
