use web_sys::Element;
use yew::prelude::*;
use webcraft_shared::constants::{SCROLL_SPY_ROOT_MARGIN, SCROLL_SPY_THRESHOLD};
use webcraft_shared::{observer_thresholds, ScrollSpy, SectionId, SectionVisibility};

use crate::browser::document;
use crate::hooks::observer::{observe_intersections, ObserverGuard};

/// Watches the given sections and returns the one currently being read.
#[hook]
pub fn use_scroll_spy(sections: &'static [SectionId]) -> SectionId {
    let active = use_state_eq(SectionId::default);

    {
        let setter = active.setter();
        use_effect_with((), move |_| {
            let guard = watch(sections, setter);
            move || drop(guard)
        });
    }

    *active
}

fn watch(sections: &[SectionId], setter: UseStateSetter<SectionId>) -> Option<ObserverGuard> {
    let document = document()?;
    let targets: Vec<Element> = sections
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id.as_str());
            if element.is_none() {
                log::debug!("section `{}` not mounted, scroll spy skips it", id);
            }
            element
        })
        .collect();

    let mut spy = ScrollSpy::new(SCROLL_SPY_THRESHOLD);
    observe_intersections(&targets, &observer_thresholds(), SCROLL_SPY_ROOT_MARGIN, move |entries, _| {
        let batch: Vec<SectionVisibility> = entries
            .iter()
            .map(|entry| SectionVisibility {
                element_id: entry.target().id(),
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
            .collect();

        let previous = spy.active();
        let active = spy.observe(&batch);
        if active != previous {
            log::debug!("active section: {} -> {}", previous, active);
            setter.set(active);
        }
    })
    .map_err(|err| log::warn!("scroll spy unavailable: {:?}", err))
    .ok()
}
