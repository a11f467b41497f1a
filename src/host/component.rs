//! Component trait and the context a component renders in

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use crate::runtime::Runtime;
use crate::scope::{ExecutionContext, ScopeHandle};
use crate::RenderError;

use super::element::{AttrValue, Attrs, Element};
use super::slots::{SlotProps, Slots};

/// A renderable unit of the component tree
pub trait Component: 'static {
    /// Label used for the instance scope and diagnostics
    fn name(&self) -> &str;

    /// Attribute names consumed as props; the rest fall through to the root tag
    fn props(&self) -> &[&'static str] {
        &[]
    }

    /// Whether non-prop attributes are merged onto a single root tag
    fn inherit_attrs(&self) -> bool {
        true
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError>;
}

/// Component backed by a closure
pub struct FnComponent<F> {
    name: &'static str,
    render: F,
}

/// Build a component from a render closure
///
/// ```rust
/// use reuse_template::host::{component, mount, text};
///
/// let app = component("App", |_| Ok(text("hi")));
/// assert_eq!(mount(app).unwrap().text(), "hi");
/// ```
pub fn component<F>(name: &'static str, render: F) -> FnComponent<F>
where
    F: Fn(&RenderContext<'_>) -> Result<Element, RenderError> + 'static,
{
    FnComponent { name, render }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&RenderContext<'_>) -> Result<Element, RenderError> + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        (self.render)(cx)
    }
}

/// Values a component instance created through [`RenderContext::setup`]
#[derive(Default)]
pub(crate) struct InstanceState {
    values: RefCell<Vec<Rc<dyn Any>>>,
}

/// Everything a component instance can see while it renders
pub struct RenderContext<'a> {
    runtime: &'a Runtime,
    state: &'a InstanceState,
    next_state: Cell<usize>,
    instance: ScopeHandle,
    owner: ScopeHandle,
    props: Attrs,
    attrs: Attrs,
    slots: Slots,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        runtime: &'a Runtime,
        state: &'a InstanceState,
        instance: ScopeHandle,
        owner: ScopeHandle,
        props: Attrs,
        attrs: Attrs,
        slots: Slots,
    ) -> Self {
        Self {
            runtime,
            state,
            next_state: Cell::new(0),
            instance,
            owner,
            props,
            attrs,
            slots,
        }
    }

    /// A value created by `init` the first time this instance renders
    ///
    /// Calls are matched by their order within one render, so a component
    /// must make them in the same sequence on every pass. The root instance
    /// keeps its values across [`Root::render`](super::Root::render) calls;
    /// every other instance starts empty on each pass.
    ///
    /// Factory pairs are created here; a pair created directly in `render`
    /// gets a new key on every pass.
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use reuse_template::host::{component, fragment, h, text, Root, TemplateComponents};
    /// use reuse_template::{create_reusable_template, Runtime};
    ///
    /// let app = component("App", |cx| {
    ///     let card: Rc<TemplateComponents> = cx.setup(create_reusable_template);
    ///     Ok(fragment([
    ///         h(card.define.clone()).children(|_| text("card")).into(),
    ///         h(card.reuse.clone()).into(),
    ///     ]))
    /// });
    ///
    /// let mut root = Root::new(Rc::new(Runtime::default()), app);
    /// assert_eq!(root.render().unwrap().text(), "card");
    /// assert_eq!(root.render().unwrap().text(), "card");
    /// assert_eq!(root.runtime().registry().keys(root.instance()).len(), 1);
    /// ```
    pub fn setup<T: 'static>(&self, init: impl FnOnce() -> T) -> Rc<T> {
        let index = self.next_state.get();
        self.next_state.set(index + 1);

        let existing = self.state.values.borrow().get(index).cloned();
        if let Some(value) = existing.and_then(|value| value.downcast::<T>().ok()) {
            return value;
        }

        let value = Rc::new(init());
        let erased: Rc<dyn Any> = value.clone();
        let mut values = self.state.values.borrow_mut();
        if index < values.len() {
            values[index] = erased;
        } else {
            values.push(erased);
        }
        trace!(instance = %self.instance.id(), index, "initialised instance value");
        value
    }

    /// This component's own instance scope
    pub fn instance(&self) -> &ScopeHandle {
        &self.instance
    }

    /// The instance whose render produced this component
    pub fn owner(&self) -> &ScopeHandle {
        &self.owner
    }

    pub fn prop(&self, name: &str) -> Option<&AttrValue> {
        self.props.get(name)
    }

    pub fn prop_str(&self, name: &str) -> Option<&str> {
        self.prop(name).and_then(AttrValue::as_str)
    }

    /// Attributes not declared as props
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Render one of this component's slots with `attrs` as bindings
    pub fn render_slot(&self, name: &str, attrs: Attrs) -> Element {
        self.slots.render(name, &SlotProps::new(attrs))
    }

    pub(crate) fn into_attrs(self) -> Attrs {
        self.attrs
    }
}

impl ExecutionContext for RenderContext<'_> {
    fn parent_scope(&self) -> &ScopeHandle {
        &self.owner
    }

    fn runtime(&self) -> &Runtime {
        self.runtime
    }
}
