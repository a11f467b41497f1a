//! Owner-scoped registry of captured renderers

use std::any::{type_name, Any};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::scope::{ExecutionContext, Scope, ScopeHandle, ScopeId};

use super::key::TemplateKey;

/// Typed render closure as seen by a definition and its reuses
pub type RenderFn<P, O> = Rc<dyn Fn(&P) -> O>;

/// Templates registered in one owner scope
pub type TemplateMap = HashMap<TemplateKey, Renderer>;

/// Mutable handle to one owner's [`TemplateMap`]
pub type SharedTemplateMap = Rc<RefCell<TemplateMap>>;

/// A captured render closure with its signature erased
///
/// The signature name is kept for diagnostics only.
#[derive(Clone)]
pub struct Renderer {
    render: Rc<dyn Any>,
    signature: &'static str,
}

impl Renderer {
    /// Capture a render closure taking props `P` and producing `O`
    pub fn new<P: 'static, O: 'static>(render: impl Fn(&P) -> O + 'static) -> Self {
        let render: RenderFn<P, O> = Rc::new(render);
        Self {
            render: Rc::new(render),
            signature: signature::<P, O>(),
        }
    }

    /// Recover the typed closure, or `None` if it was captured with another signature
    pub fn downcast<P: 'static, O: 'static>(&self) -> Option<RenderFn<P, O>> {
        self.render.downcast_ref::<RenderFn<P, O>>().cloned()
    }

    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("signature", &self.signature)
            .finish()
    }
}

pub(crate) fn signature<P, O>() -> &'static str {
    type_name::<fn(&P) -> O>()
}

struct ScopeEntry {
    owner: Weak<Scope>,
    templates: SharedTemplateMap,
}

/// Maps each owner scope to its own [`TemplateMap`]
///
/// Owners are held weakly: once the host drops an owner, its map is pruned
/// when the next owner is allocated or [`live_scopes`](Self::live_scopes) is
/// asked, and nothing in the registry keeps the owner alive.
#[derive(Default)]
pub struct ScopeRegistry {
    scopes: RefCell<HashMap<ScopeId, ScopeEntry>>,
}

impl ScopeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the map of the enclosing owner of the executing operation
    pub fn resolve(&self, cx: &dyn ExecutionContext) -> SharedTemplateMap {
        self.resolve_scope(cx.parent_scope())
    }

    /// Resolve the map of `owner`, allocating it on first use
    pub fn resolve_scope(&self, owner: &ScopeHandle) -> SharedTemplateMap {
        let mut scopes = self.scopes.borrow_mut();
        if let Some(entry) = scopes.get(&owner.id()) {
            return entry.templates.clone();
        }

        // Ids are never reused, so dead entries only need clearing when the
        // map grows.
        prune(&mut scopes);
        trace!(scope = %owner.id(), label = owner.label(), "allocating template map");
        let templates = SharedTemplateMap::default();
        scopes.insert(
            owner.id(),
            ScopeEntry {
                owner: Rc::downgrade(owner),
                templates: templates.clone(),
            },
        );
        templates
    }

    /// Look up a renderer without allocating a map for `owner`
    pub fn get(&self, owner: &Scope, key: &TemplateKey) -> Option<Renderer> {
        let scopes = self.scopes.borrow();
        let entry = scopes.get(&owner.id())?;
        let templates = entry.templates.borrow();
        templates.get(key).cloned()
    }

    /// Keys registered for `owner`, in no particular order
    pub fn keys(&self, owner: &Scope) -> Vec<TemplateKey> {
        self.scopes
            .borrow()
            .get(&owner.id())
            .map(|entry| entry.templates.borrow().keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of owners whose maps are still reachable
    pub fn live_scopes(&self) -> usize {
        let mut scopes = self.scopes.borrow_mut();
        prune(&mut scopes);
        scopes.len()
    }
}

fn prune(scopes: &mut HashMap<ScopeId, ScopeEntry>) {
    let before = scopes.len();
    scopes.retain(|_, entry| entry.owner.strong_count() > 0);
    let removed = before - scopes.len();
    if removed > 0 {
        trace!(removed, "pruned template maps of dropped scopes");
    }
}

impl fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("scopes", &self.scopes.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Runtime;

    struct Cx {
        runtime: Runtime,
        owner: ScopeHandle,
    }

    impl ExecutionContext for Cx {
        fn parent_scope(&self) -> &ScopeHandle {
            &self.owner
        }

        fn runtime(&self) -> &Runtime {
            &self.runtime
        }
    }

    #[test]
    fn test_resolve_returns_same_map_for_same_owner() {
        let registry = ScopeRegistry::new();
        let owner = Scope::root("app");

        let first = registry.resolve_scope(&owner);
        let second = registry.resolve_scope(&owner);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(registry.live_scopes(), 1);
    }

    #[test]
    fn test_owners_do_not_share_maps() {
        let registry = ScopeRegistry::new();
        let a = Scope::root("a");
        let b = Scope::root("b");

        registry
            .resolve_scope(&a)
            .borrow_mut()
            .insert(TemplateKey::default(), Renderer::new(|_: &()| "a"));

        assert!(registry.get(&a, &TemplateKey::default()).is_some());
        assert!(registry.get(&b, &TemplateKey::default()).is_none());
        assert!(!Rc::ptr_eq(
            &registry.resolve_scope(&a),
            &registry.resolve_scope(&b)
        ));
    }

    #[test]
    fn test_resolve_uses_parent_scope() {
        let owner = Scope::root("app");
        let cx = Cx {
            runtime: Runtime::default(),
            owner: owner.clone(),
        };

        let map = cx.runtime.registry().resolve(&cx);
        map.borrow_mut()
            .insert(TemplateKey::from("foo"), Renderer::new(|_: &()| 1u8));
        assert_eq!(cx.runtime.registry().keys(&owner), vec![TemplateKey::from("foo")]);
    }

    #[test]
    fn test_dropped_owner_is_pruned() {
        let registry = ScopeRegistry::new();
        let kept = Scope::root("kept");
        let dropped = Scope::root("dropped");

        registry.resolve_scope(&kept);
        registry.resolve_scope(&dropped);
        assert_eq!(registry.live_scopes(), 2);

        drop(dropped);
        assert_eq!(registry.live_scopes(), 1);
    }

    #[test]
    fn test_lookups_in_live_owner_do_not_prune() {
        let registry = ScopeRegistry::new();
        let kept = Scope::root("kept");
        let dropped = Scope::root("dropped");
        registry.resolve_scope(&kept);
        registry.resolve_scope(&dropped);
        drop(dropped);

        for _ in 0..3 {
            registry.resolve_scope(&kept);
        }
        assert_eq!(registry.scopes.borrow().len(), 2);

        let fresh = Scope::root("fresh");
        registry.resolve_scope(&fresh);
        assert_eq!(registry.scopes.borrow().len(), 2);
        assert_eq!(registry.live_scopes(), 2);
    }

    #[test]
    fn test_registry_does_not_pin_owner() {
        let registry = ScopeRegistry::new();
        let owner = Scope::root("app");
        registry.resolve_scope(&owner);
        assert_eq!(Rc::strong_count(&owner), 1);
    }

    #[test]
    fn test_renderer_downcast() {
        let renderer = Renderer::new(|n: &u32| n * 2);
        let render = renderer.downcast::<u32, u32>().expect("same signature");
        assert_eq!(render(&21), 42);
        assert!(renderer.downcast::<u32, String>().is_none());
        assert!(renderer.signature().contains("u32"));
    }
}
