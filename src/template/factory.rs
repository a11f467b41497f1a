//! Paired creation of a definer and reuser bound to a fresh key

use std::fmt;

use super::key::TemplateKey;
use super::pair::{Binding, Definer, Reuser};

/// A definer and reuser sharing one anonymous key
///
/// Access the halves by field (`template.define`, `template.reuse`) or by
/// position through [`as_tuple`](Self::as_tuple) /
/// [`into_tuple`](Self::into_tuple). Both views hand out the same handles.
pub struct ReusableTemplate<P, O> {
    pub define: Definer<P, O>,
    pub reuse: Reuser<P, O>,
}

/// Create a definer/reuser pair bound to a key no other pair can reach
///
/// ```rust
/// use reuse_template::{create_reusable_template, ReusableTemplate};
///
/// let a: ReusableTemplate<(), String> = create_reusable_template();
/// let b: ReusableTemplate<(), String> = create_reusable_template();
/// assert_ne!(a.define.key(), b.define.key());
///
/// let (define, reuse) = a.into_tuple();
/// assert!(reuse.pairs_with(&define));
/// ```
pub fn create_reusable_template<P: 'static, O: 'static>() -> ReusableTemplate<P, O> {
    ReusableTemplate::from_binding_parts(None)
}

/// Like [`create_reusable_template`], with a name used in error messages
///
/// The name never takes part in lookup.
pub fn create_named_reusable_template<P: 'static, O: 'static>(
    debug_name: impl Into<String>,
) -> ReusableTemplate<P, O> {
    ReusableTemplate::from_binding_parts(Some(debug_name.into()))
}

impl<P: 'static, O: 'static> ReusableTemplate<P, O> {
    fn from_binding_parts(debug_name: Option<String>) -> Self {
        let binding = Binding::new(TemplateKey::fresh_token(), debug_name);
        Self {
            define: Definer::from_binding(binding.clone()),
            reuse: Reuser::from_binding(binding),
        }
    }

    pub fn key(&self) -> &TemplateKey {
        self.define.key()
    }

    /// Positional view: `(define, reuse)`
    pub fn as_tuple(&self) -> (&Definer<P, O>, &Reuser<P, O>) {
        (&self.define, &self.reuse)
    }

    pub fn into_tuple(self) -> (Definer<P, O>, Reuser<P, O>) {
        (self.define, self.reuse)
    }
}

impl<P: 'static, O: 'static> From<ReusableTemplate<P, O>> for (Definer<P, O>, Reuser<P, O>) {
    fn from(template: ReusableTemplate<P, O>) -> Self {
        template.into_tuple()
    }
}

impl<P, O> Clone for ReusableTemplate<P, O> {
    fn clone(&self) -> Self {
        Self {
            define: self.define.clone(),
            reuse: self.reuse.clone(),
        }
    }
}

impl<P, O> fmt::Debug for ReusableTemplate<P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableTemplate")
            .field("define", &self.define)
            .field("reuse", &self.reuse)
            .finish()
    }
}
