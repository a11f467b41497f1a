//! Template definition and reuse as host components

use crate::template::{Definer, ReusableTemplate, Reuser, DEFAULT_TEMPLATE_NAME};
use crate::RenderError;

use super::component::{Component, RenderContext};
use super::element::Element;
use super::slots::{SlotProps, DEFAULT_SLOT};

/// Prop selecting the template a named component defines or reuses
pub const NAME_PROP: &str = "name";

/// Definer/reuser pair whose halves are host components
pub type TemplateComponents = ReusableTemplate<SlotProps, Element>;

/// Defines its default slot as a reusable template; renders nothing
///
/// ```rust
/// use reuse_template::host::{fragment, h, mount, text, DefineTemplate, ReuseTemplate, component};
///
/// let app = component("App", |_| {
///     Ok(fragment([
///         h(DefineTemplate).children(|_| text("hello")).into(),
///         h(ReuseTemplate).into(),
///         h(ReuseTemplate).into(),
///     ]))
/// });
/// assert_eq!(mount(app).unwrap().text(), "hellohello");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefineTemplate;

/// Renders the template defined under the same `name` in the same owner
#[derive(Debug, Clone, Copy, Default)]
pub struct ReuseTemplate;

pub use self::DefineTemplate as TemplateDefine;
pub use self::ReuseTemplate as TemplateReuse;

fn template_name<'a>(cx: &'a RenderContext<'_>) -> &'a str {
    cx.prop_str(NAME_PROP).unwrap_or(DEFAULT_TEMPLATE_NAME)
}

fn define_default_slot(definer: &Definer<SlotProps, Element>, cx: &RenderContext<'_>) {
    match cx.slots().get(DEFAULT_SLOT).cloned() {
        Some(slot) => definer.define(cx, move |props: &SlotProps| slot.render(props)),
        None => definer.retract(cx),
    }
}

fn reuse_with_call_site(
    reuser: &Reuser<SlotProps, Element>,
    cx: &RenderContext<'_>,
) -> Result<Element, RenderError> {
    let props = SlotProps::new(cx.attrs().clone()).with_slots(cx.slots().clone());
    Ok(reuser.reuse(cx, &props)?.unwrap_or_default())
}

impl Component for DefineTemplate {
    fn name(&self) -> &str {
        "DefineTemplate"
    }

    fn props(&self) -> &[&'static str] {
        &[NAME_PROP]
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        define_default_slot(&Definer::named(template_name(cx)), cx);
        Ok(Element::Empty)
    }
}

impl Component for ReuseTemplate {
    fn name(&self) -> &str {
        "ReuseTemplate"
    }

    fn props(&self) -> &[&'static str] {
        &[NAME_PROP]
    }

    fn inherit_attrs(&self) -> bool {
        false
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        reuse_with_call_site(&Reuser::named(template_name(cx)), cx)
    }
}

impl Component for Definer<SlotProps, Element> {
    fn name(&self) -> &str {
        self.label()
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        define_default_slot(self, cx);
        Ok(Element::Empty)
    }
}

impl Component for Reuser<SlotProps, Element> {
    fn name(&self) -> &str {
        self.label()
    }

    fn inherit_attrs(&self) -> bool {
        false
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        reuse_with_call_site(self, cx)
    }
}
