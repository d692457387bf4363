use yew::prelude::*;
use webcraft_shared::animation::Motion;

use crate::components::Reveal;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal motion={Motion::FadeInUp} class={classes!(styles::SECTION_HEADING)}>
            <h2 class={styles::SECTION_TITLE}>
                <span class={styles::GRADIENT_TEXT}>{props.title.clone()}</span>
            </h2>
            <div class={styles::SECTION_RULE} />
            <p class={styles::SECTION_SUBTITLE}>{props.subtitle.clone()}</p>
        </Reveal>
    }
}
