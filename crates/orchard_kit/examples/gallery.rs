//! Component gallery
//!
//! Builds a sample screen, prints its node tree, then swaps the theme and
//! prints it again.
//!
//! Run with:
//! `cargo run -p orchard_kit --example gallery`

use orchard_kit::prelude::*;
use orchard_theme::Result;
use tracing::info;

const BRAND_THEME: &str = r##"
    borderRadius = 4
    spacing = 4

    [palette]
    primary = "#f28c38"
    secondary = "#76bc21"
    success = "#2e7d32"
    default = "#eeeeee"
    background = "#ffffff"
    error = "#e53935"
    statusBarSecondary = "#e95e0f"

    [typography]
    primaryColor = "#ffffff"
    secondaryColor = "#64728c"
    smallFontSize = 12
    iconSize = 22
"##;

/// Counts what the host would create
#[derive(Default)]
struct CountingHost {
    created: usize,
    links: usize,
}

impl NodeHost for CountingHost {
    type Handle = usize;

    fn create(&mut self, _kind: &NodeKind) -> usize {
        self.created += 1;
        self.created - 1
    }

    fn apply_style(&mut self, _node: usize, _style: &StyleBag) {}

    fn append_child(&mut self, _parent: usize, _child: usize) {
        self.links += 1;
    }
}

fn print_tree(node: &Node, depth: usize) {
    let fill = node
        .style
        .color(StyleProp::BackgroundColor)
        .map(|c| format!(" bg={c}"))
        .unwrap_or_default();
    println!("{:indent$}{:?}{fill}", "", node.kind, indent = depth * 2);
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}

/// Sample list screen, rebuilt from the theme on every render
struct LeaveScreen;

impl ThemedComponent for LeaveScreen {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        main_layout()
            .header(Node::text("Leave List"))
            .child(
                text_field("Employee Name")
                    .icon("account")
                    .helper_text("Type for hints")
                    .render(theme),
            )
            .child(button().title("Search").primary().block().render(theme))
            .child(default_button("Reset").secondary().bordered().render(theme))
            .child(
                card_button()
                    .child(thumbnail("avatar.png").large().render())
                    .render(theme),
            )
            .child(fab_space())
            .on_refresh(|| info!("refresh requested"))
            .render(theme)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    ThemeState::try_init(Theme::from_toml_str(BRAND_THEME)?.named("Brand"))?;

    let page = with_theme(LeaveScreen);
    let tree = page.render();
    info!("rendered {} nodes with {}", tree.walk().len(), page.theme().name);
    print_tree(&tree, 0);

    let mut host = CountingHost::default();
    tree.mount_into(&mut host);
    info!("host created {} nodes, {} links", host.created, host.links);

    ThemeState::get().set_preset(ThemePreset::Midnight);
    if page.needs_render() {
        let tree = page.render();
        info!("re-rendered with {}", page.theme().name);
        print_tree(&tree, 0);
    }

    let mut save = with_theme(fab("plus").primary().on_press(|| info!("fab pressed")));
    save.component_mut().press();
    print_tree(&save.render(), 0);

    Ok(())
}
