use gpui::{App, Component, IntoElement, RenderOnce, SharedString, Window};

use crate::theme::{ResolvedTheme, ThemeExt, ThemeScope};

/// A presentational component that renders from a theme.
///
/// Implementors never look the theme up themselves. Wrap them in
/// [`WithTheme`] (or call [`themed`](Themed::themed)) and the wrapper resolves
/// the nearest scope on every render and passes the result in.
pub trait Themed: Sized + 'static {
    /// Name used for diagnostics, see [`WithTheme::display_name`].
    const NAME: &'static str;

    fn render_themed(
        self,
        theme: &ResolvedTheme,
        window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement;

    /// Hands over a scope the component was configured with, if any.
    fn take_theme_scope(&mut self) -> Option<ThemeScope> {
        None
    }

    fn themed(self) -> WithTheme<Self> {
        WithTheme::new(self)
    }
}

/// Wraps a [`Themed`] component and injects the resolved theme when rendered.
///
/// Resolution order: the scope set with [`theme_scope`](Self::theme_scope),
/// then the app-wide scope, then the built-in theme.
pub struct WithTheme<C: Themed> {
    component: C,
    scope: Option<ThemeScope>,
}

impl<C: Themed> WithTheme<C> {
    pub fn new(mut component: C) -> Self {
        let scope = component.take_theme_scope();
        Self { component, scope }
    }

    /// Resolves against `scope` instead of the app-wide scope.
    pub fn theme_scope(mut self, scope: &ThemeScope) -> Self {
        self.scope = Some(scope.clone());
        self
    }

    /// `Themed.<name>`, so wrapped components stay distinguishable.
    pub fn display_name() -> SharedString {
        format!("Themed.{}", C::NAME).into()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// The theme the component would be rendered with right now.
    pub fn resolve(&self, cx: &App) -> ResolvedTheme {
        cx.resolve_theme(self.scope.as_ref())
    }
}

impl<C: Themed> RenderOnce for WithTheme<C> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = self.resolve(cx);
        self.component.render_themed(&theme, window, cx)
    }
}

impl<C: Themed> IntoElement for WithTheme<C> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

/// Wraps `component` so that it receives the resolved theme.
pub fn with_theme<C: Themed>(component: C) -> WithTheme<C> {
    WithTheme::new(component)
}

/// Implements `IntoElement` for a [`Themed`] component by wrapping it in
/// [`WithTheme`], so it can be used as a child directly.
#[macro_export]
macro_rules! impl_themed_element {
    ($ty:ty) => {
        impl gpui::IntoElement for $ty {
            type Element = gpui::Component<$crate::theme::WithTheme<$ty>>;

            fn into_element(self) -> Self::Element {
                gpui::Component::new($crate::theme::WithTheme::new(self))
            }
        }
    };
}
