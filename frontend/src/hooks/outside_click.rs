use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::browser::document;

/// Reports every pointer-down on the page with whether it landed inside `area`.
#[hook]
pub fn use_pointer_down(area: NodeRef, on_pointer_down: Callback<bool>) {
    use_effect_with((area, on_pointer_down), |(area, on_pointer_down)| {
        let area = area.clone();
        let on_pointer_down = on_pointer_down.clone();

        let listener = document().map(|document| {
            EventListener::new(&document, "pointerdown", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = match (area.get(), target) {
                    (Some(area), Some(target)) => area.contains(Some(&target)),
                    _ => false,
                };
                on_pointer_down.emit(inside);
            })
        });

        move || drop(listener)
    });
}
