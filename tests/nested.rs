//! Integration tests for templates used across component boundaries

use pretty_assertions::assert_eq;

use reuse_template::host::{
    component, fragment, h, mount, tag, text, AttrValue, Attrs, Component, DefineTemplate, ReuseTemplate,
    SlotProps, TemplateComponents, DEFAULT_SLOT, NAME_PROP,
};
use reuse_template::{create_reusable_template, RenderError, TemplateError};

/// Renders its default slot unchanged
fn passthrough() -> impl Component {
    component("Passthrough", |cx| Ok(cx.render_slot(DEFAULT_SLOT, Attrs::new())))
}

#[test]
fn test_reuse_passed_as_content_to_child() {
    let app = component("App", |_| {
        let foo: TemplateComponents = create_reusable_template();
        let reuse = foo.reuse;
        Ok(fragment([
            h(foo.define).children(|_| text("Foo")).into(),
            h(passthrough())
                .children(move |_| h(reuse.clone()).into())
                .into(),
        ]))
    });

    let out = mount(app).expect("Should render");
    assert_eq!(out.text(), "Foo");
}

#[test]
fn test_reuse_passed_through_several_children() {
    let app = component("App", |_| {
        Ok(fragment([
            h(DefineTemplate).children(|_| text("deep")).into(),
            h(passthrough())
                .children(|_| {
                    h(passthrough())
                        .children(|_| h(ReuseTemplate).into())
                        .into()
                })
                .into(),
        ]))
    });

    assert_eq!(mount(app).unwrap().text(), "deep");
}

#[test]
fn test_child_owner_does_not_see_parent_definitions() {
    let app = component("App", |_| {
        let child = component("Child", |_| {
            Ok(h(ReuseTemplate).attr(NAME_PROP, "foo").into())
        });
        Ok(fragment([
            h(DefineTemplate)
                .attr(NAME_PROP, "foo")
                .children(|_| text("Foo"))
                .into(),
            h(child).into(),
        ]))
    });

    let err = mount(app).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Template(TemplateError::NotDefined { .. })
    ));
}

#[test]
fn test_same_name_in_unrelated_owners() {
    fn row(label: &'static str) -> impl Component {
        component("Row", move |_| {
            Ok(fragment([
                h(DefineTemplate)
                    .attr(NAME_PROP, "cell")
                    .children(move |_| text(label))
                    .into(),
                h(ReuseTemplate).attr(NAME_PROP, "cell").into(),
                h(ReuseTemplate).attr(NAME_PROP, "cell").into(),
            ]))
        })
    }

    let app = component("App", |_| Ok(fragment([h(row("A")).into(), h(row("B")).into()])));
    assert_eq!(mount(app).unwrap().text(), "AABB");
}

#[test]
fn test_template_content_reuses_another_template() {
    let app = component("App", |_| {
        Ok(fragment([
            h(DefineTemplate)
                .attr(NAME_PROP, "item")
                .children(|_| tag("li").child("item").into())
                .into(),
            h(DefineTemplate)
                .attr(NAME_PROP, "list")
                .children(|_| {
                    tag("ul")
                        .child(h(ReuseTemplate).attr(NAME_PROP, "item"))
                        .child(h(ReuseTemplate).attr(NAME_PROP, "item"))
                        .into()
                })
                .into(),
            h(ReuseTemplate).attr(NAME_PROP, "list").into(),
        ]))
    });

    let out = mount(app).expect("Should render");
    insta::assert_snapshot!(out.to_html(), @"<ul><li>item</li><li>item</li></ul>");
}

#[test]
fn test_nested_content_reaches_template() {
    let app = component("App", |_| {
        let card: TemplateComponents = create_reusable_template();
        let reuse = card.reuse;
        Ok(fragment([
            h(card.define)
                .children(|props: &SlotProps| {
                    let title = props.attr_str("title").unwrap_or("untitled").to_string();
                    tag("section")
                        .child(tag("h2").child(title))
                        .child(props.slots.render(DEFAULT_SLOT, &SlotProps::default()))
                        .into()
                })
                .into(),
            h(reuse.clone())
                .attr("title", "First")
                .children(|_| text("one"))
                .into(),
            h(reuse).children(|_| text("two")).into(),
        ]))
    });

    let out = mount(app).expect("Should render");
    insta::assert_snapshot!(
        out.to_html(),
        @"<section><h2>First</h2>one</section><section><h2>untitled</h2>two</section>"
    );
}

#[test]
fn test_template_exposes_named_slots_to_caller() {
    let app = component("App", |_| {
        Ok(fragment([
            h(DefineTemplate)
                .children(|props| {
                    let mut attrs = Attrs::new();
                    attrs.insert("n".to_string(), AttrValue::Int(7));
                    fragment([
                        props.slots.render("header", &SlotProps::default()),
                        text("|"),
                        props.slots.render("footer", &SlotProps::new(attrs)),
                    ])
                })
                .into(),
            h(ReuseTemplate)
                .slot("header", |_| text("H"))
                .slot("footer", |p| text(format!("F{}", p.attr("n").map(|v| v.to_string()).unwrap_or_default())))
                .into(),
        ]))
    });

    assert_eq!(mount(app).unwrap().text(), "H|F7");
}
