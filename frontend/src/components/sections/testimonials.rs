use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Icon, TESTIMONIALS};
use webcraft_shared::SectionId;

use crate::components::{LucideIcon, Reveal, SectionHeading};
use crate::styles;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section id={SectionId::Testimonials.as_str()} class={classes!(styles::SECTION, "bg-white", "dark:bg-gray-900")}>
            <div class={styles::CONTAINER}>
                <SectionHeading
                    title="Client Success Stories"
                    subtitle="Hear what our clients say about working with WebCraft Studio"
                />

                <div class="grid md:grid-cols-3 gap-8">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <Reveal
                            motion={Motion::FadeInUp}
                            delay_ms={Stagger::CONTAINER.delay_for(i)}
                            class={classes!("bg-gray-50", "dark:bg-gray-800", "rounded-2xl", "p-8", "shadow-lg", "hover:shadow-xl", "transition-all", "duration-300")}
                        >
                            <div class="flex mb-4 text-yellow-400">
                                { for (0..testimonial.stars()).map(|star| html! {
                                    <span
                                        class={Motion::ScaleIn.class()}
                                        style={Motion::ScaleIn.style(Stagger::LIST.delay_for(star))}
                                    >
                                        <LucideIcon icon={Icon::Star} size={20} filled={true} />
                                    </span>
                                }) }
                            </div>
                            <p class="text-gray-700 dark:text-gray-300 mb-6 leading-relaxed italic">
                                {format!("\"{}\"", testimonial.content)}
                            </p>
                            <div class="flex items-center">
                                <img
                                    src={testimonial.avatar}
                                    alt={testimonial.name}
                                    class="w-12 h-12 rounded-full mr-4 object-cover"
                                />
                                <div>
                                    <h4 class="font-semibold text-gray-900 dark:text-white">{testimonial.name}</h4>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">{testimonial.role}</p>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
