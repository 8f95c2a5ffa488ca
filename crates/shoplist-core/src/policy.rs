//! # List Policy
//!
//! The knobs that separated the two original screens, gathered into one
//! value so a single store serves both.
//!
//! | Knob | Strict screen | Loose screen |
//! |------|---------------|--------------|
//! | [`NamePolicy`] | blank names rejected | any name accepted |
//! | fallback quantity | configurable | configurable |
//! | [`IdStrategy`] | `length + 1` or monotonic | same |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::validate_item_name;
use crate::DEFAULT_FALLBACK_QUANTITY;

// =============================================================================
// Name Policy
// =============================================================================

/// How item names are checked before they are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NamePolicy {
    /// Blank names are refused.
    #[default]
    Strict,
    /// Any string is accepted, including the empty string.
    Loose,
}

impl NamePolicy {
    /// Checks `name` under this policy.
    pub fn check(&self, name: &str) -> Result<(), ValidationError> {
        match self {
            NamePolicy::Strict => validate_item_name(name),
            NamePolicy::Loose => Ok(()),
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePolicy::Strict => write!(f, "strict"),
            NamePolicy::Loose => write!(f, "loose"),
        }
    }
}

impl FromStr for NamePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(NamePolicy::Strict),
            "loose" => Ok(NamePolicy::Loose),
            _ => Err(ValidationError::NotAllowed {
                field: "name policy".to_string(),
                allowed: vec!["strict".to_string(), "loose".to_string()],
            }),
        }
    }
}

// =============================================================================
// Id Strategy
// =============================================================================

/// How a new item's id is chosen.
///
/// ```text
/// items: [1, 2]  ──delete 2──►  [1]  ──add──►  LengthPlusOne: [1, 2]
///                                              Monotonic:     [1, 3]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IdStrategy {
    /// `current length + 1`. Can hand out an id that is still in use after
    /// a delete.
    LengthPlusOne,
    /// A counter that only goes up. Ids are never reused within a list.
    #[default]
    Monotonic,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::LengthPlusOne => write!(f, "length"),
            IdStrategy::Monotonic => write!(f, "monotonic"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "length_plus_one" => Ok(IdStrategy::LengthPlusOne),
            "monotonic" => Ok(IdStrategy::Monotonic),
            _ => Err(ValidationError::NotAllowed {
                field: "id strategy".to_string(),
                allowed: vec!["monotonic".to_string(), "length".to_string()],
            }),
        }
    }
}

// =============================================================================
// List Policy
// =============================================================================

/// All variant knobs for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListPolicy {
    pub name_policy: NamePolicy,
    /// Quantity stored when the quantity text is not an integer.
    pub fallback_quantity: i32,
    pub id_strategy: IdStrategy,
}

impl Default for ListPolicy {
    fn default() -> Self {
        ListPolicy {
            name_policy: NamePolicy::default(),
            fallback_quantity: DEFAULT_FALLBACK_QUANTITY,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl ListPolicy {
    /// The behaviour of the original dialog screen: any name, length-based ids.
    pub fn faithful() -> Self {
        ListPolicy {
            name_policy: NamePolicy::Loose,
            fallback_quantity: DEFAULT_FALLBACK_QUANTITY,
            id_strategy: IdStrategy::LengthPlusOne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ListPolicy::default();
        assert_eq!(policy.name_policy, NamePolicy::Strict);
        assert_eq!(policy.fallback_quantity, 1);
        assert_eq!(policy.id_strategy, IdStrategy::Monotonic);
    }

    #[test]
    fn test_name_policy_check() {
        assert!(NamePolicy::Strict.check("").is_err());
        assert!(NamePolicy::Strict.check("Eggs").is_ok());
        assert!(NamePolicy::Loose.check("").is_ok());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("LOOSE".parse::<NamePolicy>().unwrap(), NamePolicy::Loose);
        assert_eq!(
            "length".parse::<IdStrategy>().unwrap(),
            IdStrategy::LengthPlusOne
        );
        assert!("maybe".parse::<NamePolicy>().is_err());
        assert!("random".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for policy in [NamePolicy::Strict, NamePolicy::Loose] {
            assert_eq!(policy.to_string().parse::<NamePolicy>().unwrap(), policy);
        }
        for strategy in [IdStrategy::LengthPlusOne, IdStrategy::Monotonic] {
            assert_eq!(strategy.to_string().parse::<IdStrategy>().unwrap(), strategy);
        }
    }
}
