use gpui::{
    App, ClickEvent, ElementId, FontWeight, ImageSource, InteractiveElement, IntoElement,
    ObjectFit, ParentElement, Pixels, SharedString, StatefulInteractiveElement, Styled,
    StyledImage, Window, div, img, prelude::FluentBuilder, px,
};

use crate::{
    components::{ClickHandler, Icon},
    rgb_a,
    theme::{ResolvedTheme, ThemeScope, Themed},
};

const HEIGHT_RATIO: f32 = 0.8;
const TITLE_SIZE: f32 = 22.;
const TEXT_MARGIN: f32 = 15.;

/// A full-bleed image with a centered title, caption and icon on top.
pub struct FeaturedTile {
    id: ElementId,
    title: Option<SharedString>,
    caption: Option<SharedString>,
    icon: Option<Icon>,
    image_src: Option<ImageSource>,
    width: Option<Pixels>,
    height: Option<Pixels>,
    on_click: Option<ClickHandler>,
    theme_scope: Option<ThemeScope>,
}

impl FeaturedTile {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            caption: None,
            icon: None,
            image_src: None,
            width: None,
            height: None,
            on_click: None,
            theme_scope: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<SharedString>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// The background image, drawn to cover the whole tile.
    pub fn image_src(mut self, source: impl Into<ImageSource>) -> Self {
        self.image_src = Some(source.into());
        self
    }

    /// Defaults to the width of the window.
    pub fn width(mut self, width: impl Into<Pixels>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Defaults to 80% of the width.
    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn theme_scope(mut self, scope: &ThemeScope) -> Self {
        self.theme_scope = Some(scope.clone());
        self
    }

    /// The tile's size when the window is `viewport_width` wide.
    pub fn size_in(&self, viewport_width: Pixels) -> (Pixels, Pixels) {
        let width = self.width.unwrap_or(viewport_width);
        let height = self.height.unwrap_or(width * HEIGHT_RATIO);
        (width, height)
    }
}

impl Themed for FeaturedTile {
    const NAME: &'static str = "FeaturedTile";

    fn render_themed(
        self,
        _theme: &ResolvedTheme,
        window: &mut Window,
        _cx: &mut App,
    ) -> impl IntoElement {
        let (width, height) = self.size_in(window.viewport_size().width);
        let white = rgb_a(0xffffff, 1.);

        div()
            .id(self.id)
            .relative()
            .flex_none()
            .w(width)
            .h(height)
            .overflow_hidden()
            .when_some(self.image_src, |this, source| {
                this.child(
                    img(source)
                        .absolute()
                        .inset_0()
                        .size_full()
                        .object_fit(ObjectFit::Cover),
                )
            })
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .pt(px(45.))
                    .pr(px(25.))
                    .pb(px(40.))
                    .pl(px(25.))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_center()
                            .when_some(self.icon, |this, icon| this.child(icon)),
                    )
                    .when_some(self.title, |this, title| {
                        this.child(
                            div()
                                .mb(px(TEXT_MARGIN))
                                .text_center()
                                .text_color(white)
                                .text_size(px(TITLE_SIZE))
                                .font_weight(FontWeight::BOLD)
                                .child(title),
                        )
                    })
                    .when_some(self.caption, |this, caption| {
                        this.child(
                            div()
                                .mb(px(TEXT_MARGIN))
                                .text_center()
                                .text_color(white)
                                .child(caption),
                        )
                    }),
            )
            .when_some(self.on_click, |this, on_click| {
                this.cursor_pointer()
                    .active(|style| style.opacity(0.2))
                    .on_click(move |event, window, cx| on_click(event, window, cx))
            })
    }

    fn take_theme_scope(&mut self) -> Option<ThemeScope> {
        self.theme_scope.take()
    }
}

crate::impl_themed_element!(FeaturedTile);
