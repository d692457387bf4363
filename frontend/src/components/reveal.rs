use yew::prelude::*;
use webcraft_shared::animation::Motion;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Motion::FadeInUp)]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Plays `motion` once, the first time the wrapper enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.motion.class(), visible.then_some("is-visible"), props.class.clone())}
            style={props.motion.style(props.delay_ms)}
        >
            {props.children.clone()}
        </div>
    }
}
