use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;
use webcraft_shared::animation::scroll_progress;

fn measure() -> f64 {
    let Some(window) = window() else { return 0.0 };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    scroll_progress(scroll_top, scroll_height, viewport)
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(measure);

    {
        let setter = progress.setter();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "scroll", move |_| setter.set(measure()))
            });
            move || drop(listener)
        });
    }

    *progress
}
