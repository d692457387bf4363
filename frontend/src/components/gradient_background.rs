use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;
use webcraft_shared::animation::scatter_particles;

const PARTICLE_COUNT: usize = 6;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Shifting blue/purple wash with a handful of floating dots behind the hero.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    let particles = use_memo((), |_| scatter_particles(&mut SmallRng::from_entropy(), PARTICLE_COUNT));

    html! {
        <div class="relative overflow-hidden">
            <div class="hero-glow absolute inset-0 -z-10 bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-blue-950" />
            <div class="absolute inset-0 -z-10 pointer-events-none">
                { for particles.iter().map(|particle| html! {
                    <div
                        class="animate-particle absolute w-2 h-2 rounded-full bg-blue-400/60 dark:bg-purple-400/60"
                        style={particle.style()}
                    />
                }) }
            </div>
            <div class="relative">
                {props.children.clone()}
            </div>
        </div>
    }
}
