use web_sys::Element;
use yew::prelude::*;
use webcraft_shared::constants::REVEAL_THRESHOLD;

use crate::hooks::observer::observe_intersections;

/// Flips to `true` the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let setter = visible.setter();
            let guard = node.cast::<Element>().and_then(|element| {
                observe_intersections(&[element], &[REVEAL_THRESHOLD], "0px 0px -50px 0px", move |entries, observer| {
                    if entries.iter().any(|entry| entry.is_intersecting()) {
                        setter.set(true);
                        observer.disconnect();
                    }
                })
                .map_err(|err| log::warn!("reveal observer unavailable: {:?}", err))
                .ok()
            });

            // Without an observer the content would stay hidden forever.
            if guard.is_none() {
                visible.set(true);
            }
            move || drop(guard)
        });
    }

    *visible
}
