pub mod base;
pub mod browser;
pub mod components;
pub mod config;
pub mod contact_service;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::ThemeProvider;
use crate::pages::{home::Home, not_found::NotFound, pricing::Pricing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Pricing => html! { <Pricing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ThemeProvider>
                <style>{styles::ANIMATIONS_CSS}</style>
                <Switch<Route> render={switch} />
            </ThemeProvider>
        </BrowserRouter>
    }
}
