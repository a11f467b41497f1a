//! Owner scopes and the execution context boundary
//!
//! A [`Scope`] is an opaque node in the host's component tree. The template
//! registry only uses it as an identity key; it never reads anything from it
//! besides its [`ScopeId`].

use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::runtime::Runtime;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique scope identity, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// Shared handle to an owner scope
pub type ScopeHandle = Rc<Scope>;

/// A node in the host component tree
#[derive(Debug)]
pub struct Scope {
    id: ScopeId,
    label: String,
    parent: Option<Weak<Scope>>,
}

impl Scope {
    /// Create a scope with no parent
    pub fn root(label: impl Into<String>) -> ScopeHandle {
        Rc::new(Self {
            id: ScopeId::next(),
            label: label.into(),
            parent: None,
        })
    }

    /// Create a scope whose logical parent is `parent`
    ///
    /// The child only holds its parent weakly.
    pub fn child(parent: &ScopeHandle, label: impl Into<String>) -> ScopeHandle {
        Rc::new(Self {
            id: ScopeId::next(),
            label: label.into(),
            parent: Some(Rc::downgrade(parent)),
        })
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The logical parent, if it is still alive
    pub fn parent(&self) -> Option<ScopeHandle> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}

/// What a definition or reuse needs from the host while it executes
///
/// Implementations are only valid during the synchronous evaluation of one
/// component instance.
pub trait ExecutionContext {
    /// The enclosing owner, i.e. the instance whose render produced the
    /// currently executing operation
    fn parent_scope(&self) -> &ScopeHandle;

    /// Registry and configuration shared by the whole tree
    fn runtime(&self) -> &Runtime;
}
