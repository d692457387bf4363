use yew::prelude::*;

use crate::hooks::use_scroll_progress;

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_scroll_progress();

    html! {
        <div
            class="progress-bar fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-blue-600 to-purple-600 z-50"
            style={format!("transform: scaleX({:.4});", progress)}
        />
    }
}
