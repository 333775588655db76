use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric identifiers are assigned by the storage on first save
/// and never change afterwards.
macro_rules! numeric_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn to_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(from: i64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for i64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a review.
    ReviewId
);

numeric_id!(
    /// Identifier of a point of sale.
    PosId
);

numeric_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_surrounding_whitespace() {
        assert_eq!(Ok(ReviewId::new(42)), " 42 ".parse());
        assert!("forty-two".parse::<UserId>().is_err());
    }

    #[test]
    fn display_inner_value() {
        assert_eq!("7", PosId::from(7).to_string());
    }
}
