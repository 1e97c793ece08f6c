//! Declarative dispatch table for the delegated cart listeners.
//!
//! The wiring layer installs one `click` and one `change` listener on the
//! document root and resolves each event against this table with
//! closest-ancestor matching, so dynamically inserted rows work and the
//! routing itself is testable without a DOM.

/// Event types the cart listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
}

/// How an event target (or one of its ancestors) is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Element carries this CSS class.
    Class(&'static str),
    /// Element carries `data-action` with this value.
    Action(&'static str),
}

impl Matcher {
    /// The CSS selector fed to `Element::closest`.
    pub fn selector(self) -> String {
        match self {
            Self::Class(name) => format!(".{name}"),
            Self::Action(value) => format!("[data-action=\"{value}\"]"),
        }
    }

    /// Match against flattened facts about a target and its ancestors.
    pub fn matches(self, facts: &TargetFacts) -> bool {
        match self {
            Self::Class(name) => facts.classes.iter().any(|c| c == name),
            Self::Action(value) => facts.action.as_deref() == Some(value),
        }
    }
}

/// Handlers the cart wiring can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartHandler {
    /// Add-to-cart trigger clicked.
    AddToCart,
    /// Increment stepper clicked.
    Increase,
    /// Decrement stepper clicked.
    Decrease,
    /// Explicit remove button clicked.
    RemoveItem,
    /// Quantity input value changed.
    QuantityInput,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub event: EventKind,
    pub matcher: Matcher,
    pub handler: CartHandler,
}

/// Facts about an event target, for resolving bindings without a DOM.
#[derive(Debug, Clone, Default)]
pub struct TargetFacts {
    /// Classes on the target and its ancestors.
    pub classes: Vec<String>,
    /// Nearest `data-action` value, if any.
    pub action: Option<String>,
}

impl TargetFacts {
    pub fn with_class(name: &str) -> Self {
        Self {
            classes: vec![name.to_string()],
            action: None,
        }
    }

    pub fn with_action(value: &str) -> Self {
        Self {
            classes: Vec::new(),
            action: Some(value.to_string()),
        }
    }
}

/// The static dispatch table for all cart interactions.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    bindings: Vec<Binding>,
}

impl Dispatcher {
    /// The full table: three click sources plus the quantity input change.
    pub fn cart_bindings() -> Self {
        Self {
            bindings: vec![
                Binding {
                    event: EventKind::Click,
                    matcher: Matcher::Class("ios-add-to-cart-btn"),
                    handler: CartHandler::AddToCart,
                },
                Binding {
                    event: EventKind::Click,
                    matcher: Matcher::Action("increase"),
                    handler: CartHandler::Increase,
                },
                Binding {
                    event: EventKind::Click,
                    matcher: Matcher::Action("decrease"),
                    handler: CartHandler::Decrease,
                },
                Binding {
                    event: EventKind::Click,
                    matcher: Matcher::Action("remove"),
                    handler: CartHandler::RemoveItem,
                },
                Binding {
                    event: EventKind::Change,
                    matcher: Matcher::Class("ios-quantity-input"),
                    handler: CartHandler::QuantityInput,
                },
            ],
        }
    }

    /// Bindings for one event type, in table order.
    pub fn bindings_for(&self, event: EventKind) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.event == event)
    }

    /// Resolve an event to a handler. First matching row wins.
    pub fn resolve(&self, event: EventKind, facts: &TargetFacts) -> Option<CartHandler> {
        self.bindings_for(event)
            .find(|b| b.matcher.matches(facts))
            .map(|b| b.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_button_resolves_on_click() {
        let d = Dispatcher::cart_bindings();
        let facts = TargetFacts::with_class("ios-add-to-cart-btn");
        assert_eq!(d.resolve(EventKind::Click, &facts), Some(CartHandler::AddToCart));
    }

    #[test]
    fn test_stepper_actions_resolve() {
        let d = Dispatcher::cart_bindings();
        assert_eq!(
            d.resolve(EventKind::Click, &TargetFacts::with_action("increase")),
            Some(CartHandler::Increase)
        );
        assert_eq!(
            d.resolve(EventKind::Click, &TargetFacts::with_action("decrease")),
            Some(CartHandler::Decrease)
        );
        assert_eq!(
            d.resolve(EventKind::Click, &TargetFacts::with_action("remove")),
            Some(CartHandler::RemoveItem)
        );
    }

    #[test]
    fn test_quantity_input_resolves_on_change_only() {
        let d = Dispatcher::cart_bindings();
        let facts = TargetFacts::with_class("ios-quantity-input");
        assert_eq!(
            d.resolve(EventKind::Change, &facts),
            Some(CartHandler::QuantityInput)
        );
        assert_eq!(d.resolve(EventKind::Click, &facts), None);
    }

    #[test]
    fn test_unrelated_target_resolves_to_nothing() {
        let d = Dispatcher::cart_bindings();
        let facts = TargetFacts::with_class("ios-btn");
        assert_eq!(d.resolve(EventKind::Click, &facts), None);
    }

    #[test]
    fn test_selectors() {
        assert_eq!(
            Matcher::Class("ios-quantity-input").selector(),
            ".ios-quantity-input"
        );
        assert_eq!(
            Matcher::Action("increase").selector(),
            "[data-action=\"increase\"]"
        );
    }
}
