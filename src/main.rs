//! Reuse Template playground
//!
//! Usage:
//!   reuse-template [OPTIONS]
//!
//! Options:
//!   -s, --scenario <NAME>  Demonstration tree to render [default: basic]
//!   -c, --config <FILE>    Lookup configuration (TOML format)
//!   -l, --lenient          Render nothing for undefined templates instead of failing
//!       --html             Print markup instead of text content
//!   -h, --help             Print help

use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reuse_template::host::{
    component, fragment, h, tag, text, Attrs, Component, DefineTemplate, Element, RenderContext,
    ReuseTemplate, Root, TemplateComponents, DEFAULT_SLOT, NAME_PROP,
};
use reuse_template::{
    create_named_reusable_template, create_reusable_template, RenderError, ReuseConfig, Runtime,
};

#[derive(Parser)]
#[command(name = "reuse-template")]
#[command(about = "Render demonstration trees using reusable templates")]
struct Cli {
    /// Demonstration tree to render
    #[arg(short, long, value_enum, default_value_t = Scenario::Basic)]
    scenario: Scenario,

    /// Lookup configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render nothing for undefined templates instead of failing
    #[arg(short, long)]
    lenient: bool,

    /// Print markup instead of text content
    #[arg(long)]
    html: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// One unnamed template reused twice
    Basic,
    /// Two named templates reused in interleaved order
    Named,
    /// Independent pairs from the factory
    Factory,
    /// A reuse passed as content to a child component
    Nested,
    /// A template exposing the caller's nested content
    Slots,
    /// A reuse with no matching definition
    Missing,
}

struct Playground {
    scenario: Scenario,
}

impl Component for Playground {
    fn name(&self) -> &str {
        "Playground"
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        let element = match self.scenario {
            Scenario::Basic => fragment([
                h(DefineTemplate).children(|_| text("hello")).into(),
                h(ReuseTemplate).into(),
                h(ReuseTemplate).into(),
            ]),
            Scenario::Named => fragment([
                h(DefineTemplate)
                    .attr(NAME_PROP, "foo")
                    .children(|_| text("Foo"))
                    .into(),
                h(DefineTemplate)
                    .attr(NAME_PROP, "bar")
                    .children(|_| text("Bar"))
                    .into(),
                h(ReuseTemplate).attr(NAME_PROP, "foo").into(),
                h(ReuseTemplate).attr(NAME_PROP, "bar").into(),
                h(ReuseTemplate).attr(NAME_PROP, "bar").into(),
                h(ReuseTemplate).attr(NAME_PROP, "foo").into(),
            ]),
            Scenario::Factory => {
                let foo: Rc<TemplateComponents> = cx.setup(create_reusable_template);
                let (define_foo, reuse_foo) = foo.as_tuple();
                let bar: Rc<TemplateComponents> =
                    cx.setup(|| create_named_reusable_template("bar"));
                fragment([
                    h(define_foo.clone()).children(|_| text("Foo")).into(),
                    h(reuse_foo.clone()).into(),
                    h(bar.define.clone()).children(|_| text("Bar")).into(),
                    h(reuse_foo.clone()).into(),
                    h(bar.reuse.clone()).into(),
                ])
            }
            Scenario::Nested => {
                let template: Rc<TemplateComponents> = cx.setup(create_reusable_template);
                let wrapper = component("Wrapper", |cx| {
                    Ok(tag("div")
                        .attr("class", "wrapper")
                        .child(cx.render_slot(DEFAULT_SLOT, Attrs::new()))
                        .into())
                });
                let reuse = template.reuse.clone();
                fragment([
                    h(template.define.clone()).children(|_| text("Foo")).into(),
                    h(wrapper).children(move |_| h(reuse.clone()).into()).into(),
                ])
            }
            Scenario::Slots => {
                let card: Rc<TemplateComponents> =
                    cx.setup(|| create_named_reusable_template("card"));
                let reuse = card.reuse.clone();
                fragment([
                    h(card.define.clone())
                        .children(|props| {
                            let title = props.attr_str("title").unwrap_or("untitled").to_string();
                            tag("section")
                                .child(tag("h2").child(title))
                                .child(props.slots.render(DEFAULT_SLOT, &Default::default()))
                                .into()
                        })
                        .into(),
                    h(reuse.clone())
                        .attr("title", "First")
                        .children(|_| text("one"))
                        .into(),
                    h(reuse)
                        .attr("title", "Second")
                        .children(|_| text("two"))
                        .into(),
                ])
            }
            Scenario::Missing => fragment([h(ReuseTemplate).attr(NAME_PROP, "foo").into()]),
        };
        Ok(element)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reuse_template=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match ReuseConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ReuseConfig::default(),
    };
    if cli.lenient {
        config = config.with_strict_lookup(false);
    }

    let mut root = Root::new(
        Rc::new(Runtime::new(config)),
        Playground {
            scenario: cli.scenario,
        },
    );
    match root.render() {
        Ok(fragment) if cli.html => println!("{}", fragment.to_html()),
        Ok(fragment) => println!("{}", fragment.text()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
