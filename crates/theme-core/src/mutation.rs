//! Routing user edits into cart mutations.
//!
//! Three event sources (stepper clicks, raw input edits, explicit remove
//! buttons) all collapse into the same decision: given an item key and a
//! target quantity, either update the line or remove it. Zero always means
//! remove.

use crate::ids::ItemKey;
use crate::quantity::Quantity;

/// Direction of a quantity stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increase,
    Decrease,
}

impl StepDirection {
    /// Resolve a `data-action` attribute value.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            _ => None,
        }
    }

    /// Apply the step to the current quantity.
    pub fn apply(self, current: Quantity) -> Quantity {
        match self {
            Self::Increase => current.increment(),
            Self::Decrease => current.decrement(),
        }
    }
}

/// A resolved cart mutation for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutation {
    /// Set the line to a positive quantity.
    Update { key: ItemKey, quantity: Quantity },
    /// Remove the line (quantity zero on the wire).
    Remove { key: ItemKey },
}

impl CartMutation {
    /// Route a target quantity: zero removes, anything else updates.
    pub fn for_quantity(key: ItemKey, quantity: Quantity) -> Self {
        if quantity.is_removal() {
            Self::Remove { key }
        } else {
            Self::Update { key, quantity }
        }
    }

    /// Route a stepper click against the current input value.
    pub fn for_step(key: ItemKey, current: Quantity, direction: StepDirection) -> Self {
        Self::for_quantity(key, direction.apply(current))
    }

    /// The line this mutation targets.
    pub fn key(&self) -> &ItemKey {
        match self {
            Self::Update { key, .. } | Self::Remove { key } => key,
        }
    }

    /// The absolute quantity that goes on the wire.
    pub fn target_quantity(&self) -> Quantity {
        match self {
            Self::Update { quantity, .. } => *quantity,
            Self::Remove { .. } => Quantity::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ItemKey {
        ItemKey::new("abc")
    }

    #[test]
    fn test_direction_from_action() {
        assert_eq!(
            StepDirection::from_action("increase"),
            Some(StepDirection::Increase)
        );
        assert_eq!(
            StepDirection::from_action("decrease"),
            Some(StepDirection::Decrease)
        );
        assert_eq!(StepDirection::from_action("remove"), None);
    }

    #[test]
    fn test_increment_from_two_updates_to_three() {
        let m = CartMutation::for_step(key(), Quantity::new(2), StepDirection::Increase);
        assert_eq!(
            m,
            CartMutation::Update {
                key: key(),
                quantity: Quantity::new(3)
            }
        );
    }

    #[test]
    fn test_decrement_from_two_updates_to_one() {
        let m = CartMutation::for_step(key(), Quantity::new(2), StepDirection::Decrease);
        assert_eq!(m.target_quantity(), Quantity::new(1));
    }

    #[test]
    fn test_decrement_from_one_routes_to_remove() {
        let m = CartMutation::for_step(key(), Quantity::new(1), StepDirection::Decrease);
        assert_eq!(m, CartMutation::Remove { key: key() });
        assert_eq!(m.target_quantity(), Quantity::ZERO);
    }

    #[test]
    fn test_decrement_from_zero_routes_to_remove() {
        let m = CartMutation::for_step(key(), Quantity::ZERO, StepDirection::Decrease);
        assert_eq!(m, CartMutation::Remove { key: key() });
    }

    #[test]
    fn test_input_edit_to_zero_routes_to_remove() {
        let m = CartMutation::for_quantity(key(), Quantity::parse("garbage"));
        assert_eq!(m, CartMutation::Remove { key: key() });
    }

    #[test]
    fn test_input_edit_to_positive_routes_to_update() {
        let m = CartMutation::for_quantity(key(), Quantity::parse("4"));
        assert_eq!(
            m,
            CartMutation::Update {
                key: key(),
                quantity: Quantity::new(4)
            }
        );
    }
}
