use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::hooks::use_document_metadata;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_document_metadata(Some("Page not found"));

    html! {
        <Base>
            <div class="min-h-[70vh] flex flex-col items-center justify-center text-center px-4">
                <h1 class={classes!("text-7xl", "font-bold", "mb-4", styles::GRADIENT_TEXT)}>{"404"}</h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">
                    {"The page you're looking for doesn't exist."}
                </p>
                <Link<Route> to={Route::Home} classes={classes!(styles::BUTTON_PRIMARY)}>
                    {"Back to home"}
                </Link<Route>>
            </div>
        </Base>
    }
}
