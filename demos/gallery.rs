use gpui::{
    App, AppContext, Application, Bounds, Context, Entity, Window, WindowBounds, WindowOptions,
    div, prelude::*, px, size,
};
use serde_json::json;

use gpui_elements::{
    ElementsAssets, assets,
    components::{FeaturedTile, Icon, ListItem, SearchBar},
    platform::Platform,
    theme::{ThemeScope, ThemeValue},
};

struct Gallery {
    theme: ThemeScope,
    search_bars: Vec<Entity<SearchBar>>,
    dark_primary: bool,
}

impl Gallery {
    fn new(theme: ThemeScope, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search_bars = [Platform::Ios, Platform::Android, Platform::Default]
            .into_iter()
            .map(|platform| {
                cx.new(|cx| {
                    SearchBar::new(window, cx)
                        .platform(platform)
                        .placeholder("Type Here...")
                        .on_change_text(|text, _window, _cx| log::info!("search: {text}"))
                })
            })
            .collect();

        Self {
            theme,
            search_bars,
            dark_primary: false,
        }
    }

    fn toggle_primary(&mut self, cx: &mut Context<Self>) {
        self.dark_primary = !self.dark_primary;

        if self.dark_primary {
            self.theme.update(
                cx,
                &ThemeValue::from(json!({ "colors": { "primary": "#242424" } })),
            );
        } else {
            self.theme.replace(cx, &ThemeValue::empty());
        }
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("gallery")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .bg(gpui::white())
            .children(self.search_bars.iter().cloned())
            .child(
                ListItem::new("toggle")
                    .title("Dark primary color")
                    .subtitle("Updates the app theme")
                    .checkmark(self.dark_primary)
                    .bottom_divider(true)
                    .on_click(cx.listener(|this, _event, _window, cx| this.toggle_primary(cx))),
            )
            .child(
                ListItem::new("wifi")
                    .title("Wi-Fi")
                    .right_title("Home")
                    .left_icon(Icon::new("wifi"))
                    .chevron(true)
                    .bottom_divider(true),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .child(Icon::new("search").reverse(true).color(gpui::rgb(0x2089dc)))
                    .child(Icon::new("clear").raised(true))
                    .child(Icon::new("ios-search").icon_type("ionicon")),
            )
            .child(
                FeaturedTile::new("tile")
                    .title("When I admire the wonders of a sunset")
                    .caption("Mahatma Gandhi")
                    .image_src("https://i.imgur.com/ZK4DWON.jpg")
                    .height(px(300.)),
            )
    }
}

fn main() {
    Application::new()
        .with_assets(assets![ElementsAssets])
        .run(|cx: &mut App| {
            let theme = gpui_elements::init_with_theme(cx, &ThemeValue::empty());

            let bounds = Bounds::centered(None, size(px(420.), px(800.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| {
                    cx.new(|cx| {
                        theme.subscribe_view(cx).detach();
                        Gallery::new(theme.clone(), window, cx)
                    })
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
