//! A search field in the style of iOS, Android or a neutral default.
//!
//! [`SearchBar`] is a view: it owns the text input and the focus state, and
//! renders one of the platform variants on top of the resolved theme.

mod android;
mod default;
mod ios;

pub use android::AndroidSearchBarStyle;
pub use default::DefaultSearchBarStyle;
pub use ios::IosSearchBarStyle;

use std::rc::Rc;

use gpui::{
    AnyElement, App, AppContext, ClickEvent, Context, Div, ElementId, Entity, EventEmitter,
    FocusHandle, Focusable, IntoElement, ParentElement, Render, Rgba, SharedString, Styled,
    Subscription, Window, div, prelude::FluentBuilder, px,
};
use gpui_primitives::input::{Input, InputState};

use crate::{
    ElementIdExt,
    components::{ClickHandler, Icon},
    platform::Platform,
    theme::{ResolvedTheme, ThemeExt, ThemeScope, Themed},
};

type TextCallback = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;
type Callback = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Emitted by [`SearchBar`] alongside its callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBarEvent {
    Change(SharedString),
    Clear,
    Focus,
    Blur,
    Cancel,
}

#[derive(Default)]
struct Callbacks {
    on_change_text: Option<TextCallback>,
    on_clear: Option<Callback>,
    on_focus: Option<Callback>,
    on_blur: Option<Callback>,
    on_cancel: Option<Callback>,
}

pub struct SearchBar {
    input: Entity<InputState>,
    platform: Platform,
    placeholder: SharedString,
    round: bool,
    light_theme: bool,
    show_loading: bool,
    show_cancel: bool,
    cancel_button_title: SharedString,
    cancel_button_disabled: bool,
    has_focus: bool,
    is_empty: bool,
    last_value: SharedString,
    callbacks: Callbacks,
    theme_scope: Option<ThemeScope>,
    _theme_subscription: Option<Subscription>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<SearchBarEvent> for SearchBar {}

impl Focusable for SearchBar {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.input.read(cx).focus_handle.clone()
    }
}

impl SearchBar {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| InputState::new(cx));
        let focus_handle = input.read(cx).focus_handle.clone();

        let subscriptions = vec![
            cx.observe_in(&input, window, |this, input, window, cx| {
                let value = input.read(cx).value();
                this.sync_value(value, window, cx);
            }),
            cx.on_focus(&focus_handle, window, |this, window, cx| {
                this.handle_focus(window, cx)
            }),
            cx.on_blur(&focus_handle, window, |this, window, cx| {
                this.handle_blur(window, cx)
            }),
        ];

        let theme_subscription = cx.theme_scope().map(|scope| scope.subscribe_view(cx));

        Self {
            input,
            platform: Platform::Default,
            placeholder: SharedString::default(),
            round: false,
            light_theme: false,
            show_loading: false,
            show_cancel: false,
            cancel_button_title: "Cancel".into(),
            cancel_button_disabled: false,
            has_focus: false,
            is_empty: true,
            last_value: SharedString::default(),
            callbacks: Callbacks::default(),
            theme_scope: None,
            _theme_subscription: theme_subscription,
            _subscriptions: subscriptions,
        }
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Fully rounded field corners. Only affects the default variant.
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Light colors for the default variant.
    pub fn light_theme(mut self, light_theme: bool) -> Self {
        self.light_theme = light_theme;
        self
    }

    pub fn show_loading(mut self, show_loading: bool) -> Self {
        self.show_loading = show_loading;
        self
    }

    /// Keeps the iOS cancel button visible after the field loses focus.
    pub fn show_cancel(mut self, show_cancel: bool) -> Self {
        self.show_cancel = show_cancel;
        self
    }

    pub fn cancel_button_title(mut self, title: impl Into<SharedString>) -> Self {
        self.cancel_button_title = title.into();
        self
    }

    pub fn cancel_button_disabled(mut self, disabled: bool) -> Self {
        self.cancel_button_disabled = disabled;
        self
    }

    pub fn on_change_text(
        mut self,
        on_change_text: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.callbacks.on_change_text = Some(Rc::new(on_change_text));
        self
    }

    pub fn on_clear(mut self, on_clear: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_clear = Some(Rc::new(on_clear));
        self
    }

    pub fn on_focus(mut self, on_focus: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_focus = Some(Rc::new(on_focus));
        self
    }

    pub fn on_blur(mut self, on_blur: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_blur = Some(Rc::new(on_blur));
        self
    }

    pub fn on_cancel(mut self, on_cancel: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_cancel = Some(Rc::new(on_cancel));
        self
    }

    /// Renders with `scope` instead of the app-wide scope, and re-renders
    /// whenever it changes.
    pub fn set_theme_scope(&mut self, scope: &ThemeScope, cx: &mut Context<Self>) {
        self._theme_subscription = Some(scope.subscribe_view(cx));
        self.theme_scope = Some(scope.clone());
        cx.notify();
    }

    pub fn value(&self, cx: &App) -> SharedString {
        self.input.read(cx).value()
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn get_platform(&self) -> Platform {
        self.platform
    }

    pub fn input(&self) -> &Entity<InputState> {
        &self.input
    }

    pub fn focus(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let focus_handle = self.input.read(cx).focus_handle.clone();
        focus_handle.focus(window, cx);
    }

    pub fn blur(&mut self, window: &mut Window, _cx: &mut Context<Self>) {
        window.blur();
    }

    /// Replaces the text and reports the change.
    pub fn set_value(
        &mut self,
        value: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = value.into();
        let len = value.len();

        self.input.update(cx, |state, cx| {
            state.value = Some(value.clone());
            state.selected_range = len..len;
            cx.notify();
        });

        self.sync_value(value, window, cx);
    }

    /// Empties the field, then reports the change and the clear.
    pub fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.input.update(cx, |state, cx| {
            state.clear();
            cx.notify();
        });

        self.sync_value(SharedString::default(), window, cx);

        if let Some(on_clear) = self.callbacks.on_clear.clone() {
            on_clear(window, cx);
        }
        cx.emit(SearchBarEvent::Clear);
    }

    /// Leaves the search. The iOS variant also empties the field; the default
    /// variant has no cancel action.
    pub fn cancel(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.platform {
            Platform::Default => return,
            Platform::Ios => {
                self.input.update(cx, |state, cx| {
                    state.clear();
                    cx.notify();
                });
                self.sync_value(SharedString::default(), window, cx);

                if self.show_cancel {
                    self.has_focus = false;
                }
            }
            Platform::Android => self.has_focus = false,
        }

        self.blur(window, cx);

        if let Some(on_cancel) = self.callbacks.on_cancel.clone() {
            on_cancel(window, cx);
        }
        cx.emit(SearchBarEvent::Cancel);
        cx.notify();
    }

    fn sync_value(&mut self, value: SharedString, window: &mut Window, cx: &mut Context<Self>) {
        if value == self.last_value {
            return;
        }

        self.is_empty = value.is_empty();
        self.last_value = value.clone();

        if let Some(on_change_text) = self.callbacks.on_change_text.clone() {
            on_change_text(&value, window, cx);
        }
        cx.emit(SearchBarEvent::Change(value));
        cx.notify();
    }

    fn handle_focus(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.has_focus = true;
        self.is_empty = self.value(cx).is_empty();

        if let Some(on_focus) = self.callbacks.on_focus.clone() {
            on_focus(window, cx);
        }
        cx.emit(SearchBarEvent::Focus);
        cx.notify();
    }

    fn handle_blur(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(on_blur) = self.callbacks.on_blur.clone() {
            on_blur(window, cx);
        }

        if !(self.platform.is_ios() && self.show_cancel) {
            self.has_focus = false;
        }
        cx.emit(SearchBarEvent::Blur);
        cx.notify();
    }
}

impl Render for SearchBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        SearchBarContent {
            id: ElementId::from(cx.entity_id()),
            platform: self.platform,
            input: self.input.clone(),
            placeholder: self.placeholder.clone(),
            round: self.round,
            light_theme: self.light_theme,
            show_loading: self.show_loading,
            cancel_button_title: self.cancel_button_title.clone(),
            cancel_button_disabled: self.cancel_button_disabled,
            has_focus: self.has_focus,
            is_empty: self.is_empty,
            on_clear: Some(Box::new(cx.listener(
                |this, _event: &ClickEvent, window, cx| this.clear(window, cx),
            ))),
            on_cancel: Some(Box::new(cx.listener(
                |this, _event: &ClickEvent, window, cx| this.cancel(window, cx),
            ))),
            theme_scope: self.theme_scope.clone(),
        }
    }
}

/// One frame of a [`SearchBar`], rendered by the variant for its platform.
pub(crate) struct SearchBarContent {
    id: ElementId,
    platform: Platform,
    input: Entity<InputState>,
    placeholder: SharedString,
    round: bool,
    light_theme: bool,
    show_loading: bool,
    cancel_button_title: SharedString,
    cancel_button_disabled: bool,
    has_focus: bool,
    is_empty: bool,
    on_clear: Option<ClickHandler>,
    on_cancel: Option<ClickHandler>,
    theme_scope: Option<ThemeScope>,
}

impl SearchBarContent {
    fn text_input(&self, text_color: Rgba, placeholder_color: Rgba) -> Input {
        Input::new(self.id.with_suffix("input"), self.input.clone())
            .placeholder(self.placeholder.clone())
            .placeholder_text_color(placeholder_color)
            .text_color(text_color)
            .flex_1()
    }

    /// The loading indicator and, for a non-empty field, the clear icon.
    fn trailing_icons(&mut self, clear_icon: Icon, loading_color: Rgba) -> Div {
        let on_clear = self.on_clear.take().filter(|_| !self.is_empty);

        div()
            .flex()
            .flex_row()
            .items_center()
            .mr(px(8.))
            .when(self.show_loading, |this| {
                this.child(
                    div()
                        .mr(px(5.))
                        .size(px(16.))
                        .rounded_full()
                        .border_2()
                        .border_color(loading_color),
                )
            })
            .when_some(on_clear, |this, on_clear| {
                this.child(
                    clear_icon
                        .id(self.id.with_suffix("clear"))
                        .platform(self.platform)
                        .on_click(move |event, window, cx| on_clear(event, window, cx)),
                )
            })
    }
}

impl Themed for SearchBarContent {
    const NAME: &'static str = "SearchBar";

    fn render_themed(
        self,
        theme: &ResolvedTheme,
        _window: &mut Window,
        _cx: &mut App,
    ) -> impl IntoElement {
        let element: AnyElement = match self.platform {
            Platform::Ios => ios::render(self),
            Platform::Android => android::render(self),
            Platform::Default => default::render(self, theme),
        };

        element
    }

    fn take_theme_scope(&mut self) -> Option<ThemeScope> {
        self.theme_scope.take()
    }
}

crate::impl_themed_element!(SearchBarContent);

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{TestAppContext, VisualTestContext};
    use serde_json::json;

    use super::*;
    use crate::theme::ThemeValue;

    type Log = Rc<RefCell<Vec<String>>>;

    fn logged_search_bar<'a>(
        platform: Platform,
        log: &Log,
        cx: &'a mut TestAppContext,
    ) -> (Entity<SearchBar>, &'a mut VisualTestContext) {
        let (changes, clears, cancels) = (log.clone(), log.clone(), log.clone());

        cx.add_window_view(move |window, cx| {
            SearchBar::new(window, cx)
                .platform(platform)
                .on_change_text(move |text, _window, _cx| {
                    changes.borrow_mut().push(format!("change:{text}"))
                })
                .on_clear(move |_window, _cx| clears.borrow_mut().push("clear".into()))
                .on_cancel(move |_window, _cx| cancels.borrow_mut().push("cancel".into()))
        })
    }

    #[gpui::test]
    fn test_search_bar_defaults(cx: &mut TestAppContext) {
        let (bar, cx) = cx.add_window_view(|window, cx| SearchBar::new(window, cx));

        cx.update(|_window, cx| {
            let bar = bar.read(cx);
            assert!(bar.is_empty());
            assert!(!bar.has_focus());
            assert_eq!(bar.value(cx), SharedString::default());
            assert_eq!(bar.cancel_button_title, SharedString::from("Cancel"));
            assert_eq!(bar.get_platform(), Platform::Default);
        });
    }

    #[gpui::test]
    fn test_unset_platform_cancel_keeps_the_text(cx: &mut TestAppContext) {
        let (bar, cx) = cx.add_window_view(|window, cx| SearchBar::new(window, cx));

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("query", window, cx);
                bar.cancel(window, cx);
            })
        });

        cx.update(|_window, cx| {
            assert_eq!(bar.read(cx).value(cx), SharedString::from("query"));
            assert!(!bar.read(cx).is_empty());
        });
    }

    #[gpui::test]
    fn test_rerenders_when_its_scope_changes(cx: &mut TestAppContext) {
        let (bar, cx) = cx.add_window_view(|window, cx| SearchBar::new(window, cx));
        let scope = cx.update(|_window, cx| ThemeScope::new(cx, &ThemeValue::empty()));

        cx.update(|_window, cx| bar.update(cx, |bar, cx| bar.set_theme_scope(&scope, cx)));
        cx.run_until_parked();

        let notifications = Rc::new(RefCell::new(0));
        let _subscription = cx.update(|_window, cx| {
            let notifications = notifications.clone();
            cx.observe(&bar, move |_bar, _cx| *notifications.borrow_mut() += 1)
        });

        cx.update(|_window, cx| scope.update(cx, &ThemeValue::empty()));
        cx.run_until_parked();
        assert_eq!(*notifications.borrow(), 0);

        cx.update(|_window, cx| {
            scope.update(cx, &ThemeValue::from(json!({ "colors": { "searchBg": "#000000" } })))
        });
        cx.run_until_parked();
        assert!(*notifications.borrow() > 0);

        cx.update(|_window, cx| {
            let resolved = cx.resolve_theme(bar.read(cx).theme_scope.as_ref());
            assert_eq!(resolved.string("colors.searchBg"), Some("#000000"));
        });
    }

    #[gpui::test]
    fn test_set_value_reports_change_once(cx: &mut TestAppContext) {
        let log = Log::default();
        let (bar, cx) = logged_search_bar(Platform::Default, &log, cx);

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("rust", window, cx);
                bar.set_value("rust", window, cx);
            })
        });
        cx.run_until_parked();

        cx.update(|_window, cx| {
            assert_eq!(bar.read(cx).value(cx), SharedString::from("rust"));
            assert!(!bar.read(cx).is_empty());
        });
        assert_eq!(*log.borrow(), vec!["change:rust"]);
    }

    #[gpui::test]
    fn test_clear_reports_change_then_clear(cx: &mut TestAppContext) {
        let log = Log::default();
        let (bar, cx) = logged_search_bar(Platform::Default, &log, cx);

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("gpui", window, cx);
                bar.clear(window, cx);
            })
        });
        cx.run_until_parked();

        cx.update(|_window, cx| {
            assert!(bar.read(cx).is_empty());
            assert_eq!(bar.read(cx).value(cx), SharedString::default());
        });
        assert_eq!(*log.borrow(), vec!["change:gpui", "change:", "clear"]);
    }

    #[gpui::test]
    fn test_ios_cancel_empties_the_field(cx: &mut TestAppContext) {
        let log = Log::default();
        let (bar, cx) = logged_search_bar(Platform::Ios, &log, cx);

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("query", window, cx);
                bar.cancel(window, cx);
            })
        });

        cx.update(|_window, cx| assert!(bar.read(cx).is_empty()));
        assert_eq!(*log.borrow(), vec!["change:query", "change:", "cancel"]);
    }

    #[gpui::test]
    fn test_android_cancel_keeps_the_text(cx: &mut TestAppContext) {
        let log = Log::default();
        let (bar, cx) = logged_search_bar(Platform::Android, &log, cx);

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("query", window, cx);
                bar.cancel(window, cx);
            })
        });

        cx.update(|_window, cx| {
            assert_eq!(bar.read(cx).value(cx), SharedString::from("query"));
            assert!(!bar.read(cx).has_focus());
        });
        assert_eq!(*log.borrow(), vec!["change:query", "cancel"]);
    }

    #[gpui::test]
    fn test_default_cancel_does_nothing(cx: &mut TestAppContext) {
        let log = Log::default();
        let (bar, cx) = logged_search_bar(Platform::Default, &log, cx);

        cx.update(|window, cx| bar.update(cx, |bar, cx| bar.cancel(window, cx)));

        assert!(log.borrow().is_empty());
    }

    #[gpui::test]
    fn test_events_mirror_callbacks(cx: &mut TestAppContext) {
        let (bar, cx) = cx.add_window_view(|window, cx| SearchBar::new(window, cx));
        let events = Rc::new(RefCell::new(Vec::new()));

        let _subscription = cx.update(|_window, cx| {
            let events = events.clone();
            cx.subscribe(&bar, move |_bar, event: &SearchBarEvent, _cx| {
                events.borrow_mut().push(event.clone())
            })
        });

        cx.update(|window, cx| {
            bar.update(cx, |bar, cx| {
                bar.set_value("a", window, cx);
                bar.clear(window, cx);
            })
        });
        cx.run_until_parked();

        assert_eq!(
            *events.borrow(),
            vec![
                SearchBarEvent::Change("a".into()),
                SearchBarEvent::Change("".into()),
                SearchBarEvent::Clear,
            ]
        );
    }

    #[gpui::test]
    fn test_every_variant_renders(cx: &mut TestAppContext) {
        for platform in [Platform::Ios, Platform::Android, Platform::Default] {
            let (bar, cx) = cx.add_window_view(move |window, cx| {
                SearchBar::new(window, cx)
                    .platform(platform)
                    .placeholder("Search")
                    .show_loading(true)
            });

            cx.update(|window, cx| bar.update(cx, |bar, cx| bar.set_value("x", window, cx)));
            cx.run_until_parked();
        }
    }
}
