//! Nested content passed to components

use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::scope::{Scope, ScopeHandle};

use super::element::{AttrValue, Attrs, Element};

/// Slot used for content given without a name
pub const DEFAULT_SLOT: &str = "default";

/// Slot content as written at the call site
pub type SlotFn = Rc<dyn Fn(&SlotProps) -> Element>;

/// Unbound slot content, keyed by slot name
pub type SlotFns = BTreeMap<String, SlotFn>;

/// What a slot receives when rendered: bindings plus the caller's own slots
#[derive(Debug, Clone, Default)]
pub struct SlotProps {
    pub attrs: Attrs,
    pub slots: Slots,
}

impl SlotProps {
    pub fn new(attrs: Attrs) -> Self {
        Self {
            attrs,
            slots: Slots::default(),
        }
    }

    pub fn with_slots(mut self, slots: Slots) -> Self {
        self.slots = slots;
        self
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_str)
    }
}

/// Slot content bound to the owner that wrote it
///
/// The owner is held weakly: a bound slot stored in a template map must not
/// keep that map's own owner alive.
#[derive(Clone)]
pub struct BoundSlot {
    render: SlotFn,
    owner: Weak<Scope>,
}

impl BoundSlot {
    pub fn new(render: SlotFn, owner: &ScopeHandle) -> Self {
        Self {
            render,
            owner: Rc::downgrade(owner),
        }
    }

    pub fn owner(&self) -> Option<ScopeHandle> {
        self.owner.upgrade()
    }

    /// Render the content; empty once its owner is gone
    pub fn render(&self, props: &SlotProps) -> Element {
        match self.owner.upgrade() {
            Some(owner) => Element::Scoped {
                owner,
                children: vec![(self.render)(props)],
            },
            None => Element::Empty,
        }
    }
}

impl fmt::Debug for BoundSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundSlot")
            .field("owner", &self.owner.upgrade().map(|o| o.id()))
            .finish()
    }
}

/// The slots a component instance received, bound to their owner
#[derive(Clone, Default)]
pub struct Slots {
    entries: BTreeMap<String, BoundSlot>,
}

impl Slots {
    /// Bind call-site slot content to the instance that wrote it
    pub fn bind(fns: SlotFns, owner: &ScopeHandle) -> Self {
        Self {
            entries: fns
                .into_iter()
                .map(|(name, render)| (name, BoundSlot::new(render, owner)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BoundSlot> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Render the named slot, or nothing if it was not provided
    pub fn render(&self, name: &str, props: &SlotProps) -> Element {
        self.get(name)
            .map(|slot| slot.render(props))
            .unwrap_or_default()
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::element::text;

    fn fns() -> SlotFns {
        let mut fns = SlotFns::new();
        fns.insert(DEFAULT_SLOT.to_string(), Rc::new(|_: &SlotProps| text("body")));
        fns
    }

    #[test]
    fn test_bound_slot_renders_under_owner() {
        let owner = Scope::root("owner");
        let slots = Slots::bind(fns(), &owner);

        match slots.render(DEFAULT_SLOT, &SlotProps::default()) {
            Element::Scoped { owner: scoped, children } => {
                assert_eq!(scoped.id(), owner.id());
                assert!(matches!(children.as_slice(), [Element::Text(t)] if t == "body"));
            }
            other => panic!("expected scoped element, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let owner = Scope::root("owner");
        let slots = Slots::bind(fns(), &owner);
        assert!(matches!(
            slots.render("header", &SlotProps::default()),
            Element::Empty
        ));
        assert_eq!(slots.names().collect::<Vec<_>>(), vec![DEFAULT_SLOT]);
        assert!(slots.contains(DEFAULT_SLOT));
        assert!(!slots.contains("header"));
    }

    #[test]
    fn test_bound_slot_does_not_pin_owner() {
        let owner = Scope::root("owner");
        let slots = Slots::bind(fns(), &owner);
        assert_eq!(Rc::strong_count(&owner), 1);

        let bound = slots.get(DEFAULT_SLOT).and_then(BoundSlot::owner);
        assert_eq!(bound.map(|o| o.id()), Some(owner.id()));

        drop(owner);
        assert!(slots.get(DEFAULT_SLOT).and_then(BoundSlot::owner).is_none());
        assert!(matches!(
            slots.render(DEFAULT_SLOT, &SlotProps::default()),
            Element::Empty
        ));
    }

    #[test]
    fn test_slot_props_attr_str() {
        let mut attrs = Attrs::new();
        attrs.insert("title".to_string(), AttrValue::from("Hi"));
        attrs.insert("count".to_string(), AttrValue::from(2i64));
        let props = SlotProps::new(attrs);
        assert_eq!(props.attr_str("title"), Some("Hi"));
        assert_eq!(props.attr_str("count"), None);
    }
}
