//! Reuse Template - define a piece of content once, render it many times
//!
//! This library provides an owner-scoped template registry plus a small
//! synchronous component host to run it in. A definition captures content
//! under a key in the map of its enclosing owner; a reuse evaluated later in
//! the same owner renders that content with its own bindings.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use reuse_template::host::{component, fragment, h, mount, text, TemplateComponents};
//! use reuse_template::create_reusable_template;
//!
//! let app = component("App", |cx| {
//!     let template: Rc<TemplateComponents> = cx.setup(create_reusable_template);
//!     Ok(fragment([
//!         h(template.define.clone()).children(|_| text("Foo")).into(),
//!         h(template.reuse.clone()).into(),
//!         h(template.reuse.clone()).into(),
//!     ]))
//! });
//!
//! assert_eq!(mount(app).unwrap().text(), "FooFoo");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod runtime;
pub mod scope;
pub mod template;

pub use config::{ConfigError, ReuseConfig};
pub use error::TemplateError;
pub use runtime::Runtime;
pub use scope::{ExecutionContext, Scope, ScopeHandle, ScopeId};
pub use template::{
    create_named_reusable_template, create_reusable_template, Definer, ReusableTemplate, Reuser,
    ScopeRegistry, TemplateKey, DEFAULT_TEMPLATE_NAME,
};

use thiserror::Error;

/// Errors that can occur during a host render pass
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template reuse failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A component reported a failure of its own
    #[error("component {component} failed: {message}")]
    Component { component: String, message: String },
}

impl RenderError {
    /// Create a component failure
    pub fn component(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Component {
            component: component.into(),
            message: message.into(),
        }
    }
}
