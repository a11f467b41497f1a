//! Render descriptions produced by components and slots

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::scope::ScopeHandle;

use super::component::Component;
use super::slots::{SlotFns, SlotProps, DEFAULT_SLOT};

/// Attributes passed to a component or set on a tag
pub type Attrs = BTreeMap<String, AttrValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write!(f, "{}", n),
            AttrValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// What a component or slot asks the host to mount
#[derive(Debug, Clone, Default)]
pub enum Element {
    #[default]
    Empty,
    Text(String),
    Tag(TagElement),
    Fragment(Vec<Element>),
    Component(Box<ComponentElement>),
    /// Slot output; components inside it belong to `owner`, not to the
    /// instance that rendered the slot
    Scoped {
        owner: ScopeHandle,
        children: Vec<Element>,
    },
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

/// A plain tag with attributes and children
#[derive(Debug, Clone)]
pub struct TagElement {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Element>,
}

impl TagElement {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl From<TagElement> for Element {
    fn from(value: TagElement) -> Self {
        Element::Tag(value)
    }
}

/// A component invocation with its call-site attributes and slot content
#[derive(Clone)]
pub struct ComponentElement {
    pub component: Rc<dyn Component>,
    pub attrs: Attrs,
    pub slots: SlotFns,
}

impl ComponentElement {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Provide content for the named slot
    pub fn slot(
        mut self,
        name: impl Into<String>,
        render: impl Fn(&SlotProps) -> Element + 'static,
    ) -> Self {
        self.slots.insert(name.into(), Rc::new(render));
        self
    }

    /// Provide content for the default slot
    pub fn children(self, render: impl Fn(&SlotProps) -> Element + 'static) -> Self {
        self.slot(DEFAULT_SLOT, render)
    }
}

impl fmt::Debug for ComponentElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentElement")
            .field("component", &self.component.name())
            .field("attrs", &self.attrs)
            .field("slots", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<ComponentElement> for Element {
    fn from(value: ComponentElement) -> Self {
        Element::Component(Box::new(value))
    }
}

pub fn text(content: impl Into<String>) -> Element {
    Element::Text(content.into())
}

pub fn tag(name: impl Into<String>) -> TagElement {
    TagElement {
        tag: name.into(),
        attrs: Attrs::new(),
        children: Vec::new(),
    }
}

pub fn fragment(children: impl IntoIterator<Item = Element>) -> Element {
    Element::Fragment(children.into_iter().collect())
}

/// Start a component invocation
pub fn h(component: impl Component) -> ComponentElement {
    ComponentElement {
        component: Rc::new(component),
        attrs: Attrs::new(),
        slots: SlotFns::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_builder() {
        let el = tag("div").attr("class", "card").attr("count", 3i64).child("hi");
        assert_eq!(el.tag, "div");
        assert_eq!(el.attrs.get("class"), Some(&AttrValue::from("card")));
        assert_eq!(el.attrs.get("count"), Some(&AttrValue::Int(3)));
        assert!(matches!(el.children.as_slice(), [Element::Text(t)] if t == "hi"));
    }

    #[test]
    fn test_attr_value_display() {
        assert_eq!(AttrValue::from("x").to_string(), "x");
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttrValue::from(7i64).as_str(), None);
    }
}
