use yew::prelude::*;
use yew_router::prelude::*;
use webcraft_shared::content::BRAND;

use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Shell for the secondary pages: a slim bar with the brand linking home.
/// These pages are static; the theme chosen on the landing page still applies.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            <header class={styles::NAV}>
                <nav class={styles::NAV_INNER}>
                    <Link<Route> to={Route::Home} classes={classes!(styles::NAV_BRAND)}>
                        {BRAND}
                    </Link<Route>>
                </nav>
            </header>
            <main class="pt-16">
                {props.children.clone()}
            </main>
        </div>
    }
}
