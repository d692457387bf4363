use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Keeps an IntersectionObserver and its callback alive. Dropping it disconnects.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `targets`, calling `on_entries` each time one crosses any of `thresholds`.
pub fn observe_intersections<F>(
    targets: &[Element],
    thresholds: &[f64],
    root_margin: &str,
    mut on_entries: F,
) -> Result<ObserverGuard, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            on_entries(entries, &observer);
        },
    );

    let options = IntersectionObserverInit::new();
    let steps: Array = thresholds.iter().map(|step| JsValue::from_f64(*step)).collect();
    options.set_threshold(&steps);
    options.set_root_margin(root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}
