use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Icon, SERVICES};
use webcraft_shared::SectionId;

use crate::components::{LucideIcon, Reveal, SectionHeading};
use crate::styles;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id={SectionId::Services.as_str()} class={styles::SECTION_ALT}>
            <div class={styles::CONTAINER}>
                <SectionHeading
                    title="Our Services"
                    subtitle="Comprehensive web development solutions tailored to your business needs"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal motion={Motion::FadeInUp} delay_ms={Stagger::CONTAINER.delay_for(i)} class={classes!(styles::CARD, "group")}>
                            <div class={classes!(styles::CARD_ICON, "group-hover:scale-110", "transition-transform")}>
                                <LucideIcon icon={service.icon} size={32} />
                            </div>
                            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-4">{service.title}</h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">{service.description}</p>
                            <ul class="space-y-2">
                                { for service.features.iter().map(|feature| html! {
                                    <li class="flex items-center text-sm text-gray-600 dark:text-gray-400">
                                        <LucideIcon icon={Icon::CheckCircle} size={16} class={classes!("text-green-500", "mr-2", "flex-shrink-0")} />
                                        {*feature}
                                    </li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
