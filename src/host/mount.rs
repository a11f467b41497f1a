//! Synchronous mounting of element trees into output nodes

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::runtime::Runtime;
use crate::scope::{Scope, ScopeHandle};
use crate::RenderError;

use super::component::{Component, InstanceState, RenderContext};
use super::element::{Attrs, Element, TagElement};
use super::slots::{SlotFns, Slots};

/// A mounted output node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element {
        tag: String,
        attrs: Attrs,
        children: Vec<Node>,
    },
}

impl Node {
    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element { children, .. } => children.iter().for_each(|c| c.write_text(out)),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(&value.to_string())));
                }
                out.push('>');
                children.iter().for_each(|c| c.write_html(out));
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

/// The output of one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text content, ignoring tags
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.nodes.iter().for_each(|n| n.write_text(&mut out));
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.nodes.iter().for_each(|n| n.write_html(&mut out));
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_html())
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A mounted application
///
/// The root instance keeps its scope and its
/// [`setup`](RenderContext::setup) values across [`render`](Self::render)
/// calls, so templates it defines persist between passes. Every other
/// instance is created fresh for each pass and dropped when the next pass
/// completes.
pub struct Root {
    runtime: Rc<Runtime>,
    container: ScopeHandle,
    app: Rc<dyn Component>,
    instance: ScopeHandle,
    state: InstanceState,
    mounted: Vec<ScopeHandle>,
}

impl Root {
    pub fn new(runtime: Rc<Runtime>, app: impl Component) -> Self {
        let container = Scope::root("root");
        let instance = Scope::child(&container, app.name());
        Self {
            runtime,
            container,
            app: Rc::new(app),
            instance,
            state: InstanceState::default(),
            mounted: Vec::new(),
        }
    }

    /// Run one full render pass
    pub fn render(&mut self) -> Result<Fragment, RenderError> {
        let mut pass = Pass {
            runtime: &self.runtime,
            instances: Vec::new(),
        };
        let mut nodes = Vec::new();
        pass.render_instance(
            self.app.as_ref(),
            &self.state,
            &self.instance,
            &self.container,
            Attrs::new(),
            SlotFns::new(),
            &mut nodes,
        )?;

        debug!(
            app = self.app.name(),
            instances = pass.instances.len(),
            "render pass complete"
        );
        self.mounted = pass.instances;
        Ok(Fragment { nodes })
    }

    /// Scope of the application component itself
    pub fn instance(&self) -> &ScopeHandle {
        &self.instance
    }

    pub fn runtime(&self) -> &Rc<Runtime> {
        &self.runtime
    }

    /// Component instances created by the last successful pass
    pub fn mounted_instances(&self) -> usize {
        self.mounted.len()
    }
}

/// Mount `app` once with a default runtime and return its output
pub fn mount(app: impl Component) -> Result<Fragment, RenderError> {
    mount_with(&Rc::new(Runtime::default()), app)
}

/// Mount `app` once against an existing runtime
pub fn mount_with(runtime: &Rc<Runtime>, app: impl Component) -> Result<Fragment, RenderError> {
    Root::new(runtime.clone(), app).render()
}

struct Pass<'a> {
    runtime: &'a Runtime,
    instances: Vec<ScopeHandle>,
}

impl Pass<'_> {
    fn mount(
        &mut self,
        element: Element,
        owner: &ScopeHandle,
        out: &mut Vec<Node>,
    ) -> Result<(), RenderError> {
        match element {
            Element::Empty => {}
            Element::Text(t) => out.push(Node::Text(t)),
            Element::Tag(TagElement {
                tag,
                attrs,
                children,
            }) => {
                let mut mounted = Vec::new();
                for child in children {
                    self.mount(child, owner, &mut mounted)?;
                }
                out.push(Node::Element {
                    tag,
                    attrs,
                    children: mounted,
                });
            }
            Element::Fragment(children) => {
                for child in children {
                    self.mount(child, owner, out)?;
                }
            }
            Element::Scoped { owner, children } => {
                for child in children {
                    self.mount(child, &owner, out)?;
                }
            }
            Element::Component(element) => {
                let element = *element;
                let instance = Scope::child(owner, element.component.name());
                self.instances.push(instance.clone());
                self.render_instance(
                    element.component.as_ref(),
                    &InstanceState::default(),
                    &instance,
                    owner,
                    element.attrs,
                    element.slots,
                    out,
                )?;
            }
        }
        Ok(())
    }

    fn render_instance(
        &mut self,
        component: &dyn Component,
        state: &InstanceState,
        instance: &ScopeHandle,
        owner: &ScopeHandle,
        attrs: Attrs,
        slots: SlotFns,
        out: &mut Vec<Node>,
    ) -> Result<(), RenderError> {
        let (props, attrs) = split_props(attrs, component.props());
        let cx = RenderContext::new(
            self.runtime,
            state,
            instance.clone(),
            owner.clone(),
            props,
            attrs,
            Slots::bind(slots, owner),
        );

        let mut element = component.render(&cx)?;
        if component.inherit_attrs() {
            apply_fallthrough(&mut element, cx.into_attrs());
        }
        self.mount(element, instance, out)
    }
}

fn split_props(attrs: Attrs, declared: &[&str]) -> (Attrs, Attrs) {
    attrs
        .into_iter()
        .partition(|(name, _)| declared.contains(&name.as_str()))
}

fn apply_fallthrough(element: &mut Element, attrs: Attrs) {
    if attrs.is_empty() {
        return;
    }
    if let Some(root) = single_root(element) {
        root.attrs.extend(attrs);
    }
}

fn single_root(element: &mut Element) -> Option<&mut TagElement> {
    match element {
        Element::Tag(tag) => Some(tag),
        Element::Fragment(children) | Element::Scoped { children, .. } if children.len() == 1 => {
            single_root(&mut children[0])
        }
        _ => None,
    }
}
