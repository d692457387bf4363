use yew::prelude::*;
use webcraft_shared::Theme;

use crate::browser::theme_store;

/// Current theme plus the one way to change it. Provided once at the app root.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.emit(self.theme.toggled());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state_eq(|| theme_store().load());

    let set_theme = {
        let theme = theme.setter();
        use_callback((), move |next: Theme, _| {
            theme.set(theme_store().set(next));
        })
    };

    let context = ThemeContext {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        log::warn!("use_theme called outside ThemeProvider, theme changes are ignored");
        ThemeContext {
            theme: Theme::default(),
            set_theme: Callback::noop(),
        }
    })
}
