//! Definition and reuse operations

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::TemplateError;
use crate::scope::ExecutionContext;

use super::key::TemplateKey;
use super::registry::{signature, Renderer};

/// Key plus diagnostics shared by every handle of one pair
#[derive(Debug)]
pub(crate) struct Binding {
    key: TemplateKey,
    debug_name: Option<String>,
    label: String,
}

impl Binding {
    pub(crate) fn new(key: TemplateKey, debug_name: Option<String>) -> Rc<Self> {
        let label = match (&key, &debug_name) {
            (_, Some(name)) => name.clone(),
            (TemplateKey::Name(name), None) => name.clone(),
            (TemplateKey::Token(_), None) => key.to_string(),
        };
        Rc::new(Self {
            key,
            debug_name,
            label,
        })
    }

    fn not_defined(&self) -> TemplateError {
        TemplateError::not_defined(self.key.clone(), self.debug_name.clone())
    }
}

/// Registers a renderer under its key in the enclosing owner scope
///
/// `P` is the props type the renderer receives and `O` what it produces. A
/// definition renders nothing itself.
pub struct Definer<P, O> {
    binding: Rc<Binding>,
    _marker: PhantomData<fn(&P) -> O>,
}

/// Invokes the renderer registered under its key in the enclosing owner scope
pub struct Reuser<P, O> {
    binding: Rc<Binding>,
    _marker: PhantomData<fn(&P) -> O>,
}

impl<P: 'static, O: 'static> Definer<P, O> {
    /// A definer keyed by `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_binding(Binding::new(TemplateKey::Name(name.into()), None))
    }

    pub(crate) fn from_binding(binding: Rc<Binding>) -> Self {
        Self {
            binding,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &TemplateKey {
        &self.binding.key
    }

    /// Name shown in diagnostics and component labels
    pub fn label(&self) -> &str {
        &self.binding.label
    }

    /// A reuser bound to the same key
    pub fn reuser(&self) -> Reuser<P, O> {
        Reuser::from_binding(self.binding.clone())
    }

    /// Store `render` for this key, replacing any previous definition
    pub fn define(&self, cx: &dyn ExecutionContext, render: impl Fn(&P) -> O + 'static) {
        self.define_renderer(cx, Renderer::new(render));
    }

    /// Store an already captured renderer for this key
    pub fn define_renderer(&self, cx: &dyn ExecutionContext, renderer: Renderer) {
        let templates = cx.runtime().registry().resolve(cx);
        let replaced = templates
            .borrow_mut()
            .insert(self.binding.key.clone(), renderer)
            .is_some();
        trace!(
            template = %self.binding.key,
            scope = %cx.parent_scope().id(),
            replaced,
            "defined template"
        );
    }

    /// Drop the definition for this key, so later reuses see it as undefined
    pub fn retract(&self, cx: &dyn ExecutionContext) {
        let templates = cx.runtime().registry().resolve(cx);
        if templates.borrow_mut().remove(&self.binding.key).is_some() {
            trace!(template = %self.binding.key, "retracted template");
        }
    }
}

impl<P: 'static, O: 'static> Reuser<P, O> {
    /// A reuser keyed by `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_binding(Binding::new(TemplateKey::Name(name.into()), None))
    }

    pub(crate) fn from_binding(binding: Rc<Binding>) -> Self {
        Self {
            binding,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &TemplateKey {
        &self.binding.key
    }

    pub fn label(&self) -> &str {
        &self.binding.label
    }

    /// Whether `definer` registers the renderer this reuser looks up
    pub fn pairs_with(&self, definer: &Definer<P, O>) -> bool {
        self.binding.key == definer.binding.key
    }

    /// Render the template registered under this key with `props`
    ///
    /// Returns `Ok(None)` when nothing is registered and strict lookup is
    /// disabled; with strict lookup that case is
    /// [`TemplateError::NotDefined`].
    pub fn reuse(&self, cx: &dyn ExecutionContext, props: &P) -> Result<Option<O>, TemplateError> {
        let runtime = cx.runtime();
        let templates = runtime.registry().resolve(cx);
        // Cloned out so the renderer may define or reuse in the same scope.
        let renderer = templates.borrow().get(&self.binding.key).cloned();

        let Some(renderer) = renderer else {
            if runtime.config().strict_lookup {
                return Err(self.binding.not_defined());
            }
            debug!(template = %self.binding.key, "template not defined, rendering nothing");
            return Ok(None);
        };

        let render = renderer
            .downcast::<P, O>()
            .ok_or_else(|| TemplateError::SignatureMismatch {
                template: self.binding.key.to_string(),
                expected: signature::<P, O>(),
                found: renderer.signature(),
            })?;
        Ok(Some(render(props)))
    }
}

impl<P, O> Clone for Definer<P, O> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P, O> Clone for Reuser<P, O> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P, O> fmt::Debug for Definer<P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definer").field("key", &self.binding.key).finish()
    }
}

impl<P, O> fmt::Debug for Reuser<P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reuser").field("key", &self.binding.key).finish()
    }
}
