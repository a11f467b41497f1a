//! Template registry for defining content once and reusing it
//!
//! A [`Definer`] captures a renderer and stores it in the map of its
//! enclosing owner scope. A [`Reuser`] with the same key, evaluated later in
//! the same owner, invokes that renderer with its own props.
//!
//! # Example
//!
//! ```rust
//! use reuse_template::template::{Definer, Reuser};
//! use reuse_template::{ExecutionContext, Runtime, Scope, ScopeHandle};
//!
//! struct Cx { runtime: Runtime, owner: ScopeHandle }
//!
//! impl ExecutionContext for Cx {
//!     fn parent_scope(&self) -> &ScopeHandle { &self.owner }
//!     fn runtime(&self) -> &Runtime { &self.runtime }
//! }
//!
//! let cx = Cx { runtime: Runtime::default(), owner: Scope::root("app") };
//!
//! Definer::<u32, String>::named("row").define(&cx, |n| format!("row {}", n));
//!
//! let row = Reuser::<u32, String>::named("row");
//! assert_eq!(row.reuse(&cx, &1).unwrap().as_deref(), Some("row 1"));
//! assert_eq!(row.reuse(&cx, &2).unwrap().as_deref(), Some("row 2"));
//! ```

mod factory;
mod key;
mod pair;
mod registry;

pub use factory::{create_named_reusable_template, create_reusable_template, ReusableTemplate};
pub use key::{TemplateKey, TemplateToken, DEFAULT_TEMPLATE_NAME};
pub use pair::{Definer, Reuser};
pub use registry::{RenderFn, Renderer, ScopeRegistry, SharedTemplateMap, TemplateMap};
