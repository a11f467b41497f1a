//! Minimal synchronous component tree hosting the template registry
//!
//! Components return [`Element`] descriptions which [`Root`] mounts into
//! [`Node`]s in a single top-down pass. Each component instance gets its own
//! [`Scope`](crate::Scope) whose parent is the instance that rendered it; slot
//! content keeps the scope of the instance that wrote it, so a reuse passed
//! as content to another component still resolves against the owner holding
//! the definition.
//!
//! There is no diffing and no reactivity: every pass recreates the instance
//! tree below the application component.

mod component;
mod components;
mod element;
mod mount;
mod slots;

pub use component::{component, Component, FnComponent, RenderContext};
pub use components::{
    DefineTemplate, ReuseTemplate, TemplateComponents, TemplateDefine, TemplateReuse, NAME_PROP,
};
pub use element::{fragment, h, tag, text, AttrValue, Attrs, ComponentElement, Element, TagElement};
pub use mount::{mount, mount_with, Fragment, Node, Root};
pub use slots::{BoundSlot, SlotFn, SlotFns, SlotProps, Slots, DEFAULT_SLOT};
