use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Icon, BUSINESS, HERO_BADGES, HERO_STATS};
use webcraft_shared::SectionId;

use crate::components::{GradientBackground, LucideIcon};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let go_to = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };
    let stagger = Stagger::CONTAINER;

    html! {
        <section id={SectionId::Hero.as_str()} class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <GradientBackground>
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                        <div class="text-center lg:text-left">
                            <div
                                class={classes!("inline-flex", "items-center", "px-4", "py-2", "rounded-full", "text-sm", "font-medium", "mb-6",
                                    "bg-gradient-to-r", "from-blue-100", "to-purple-100", "dark:from-blue-900/30", "dark:to-purple-900/30",
                                    "text-blue-700", "dark:text-blue-300", Motion::FadeInUp.class())}
                                style={Motion::FadeInUp.style(stagger.delay_for(0))}
                            >
                                <LucideIcon icon={Icon::Rocket} size={16} class={classes!("mr-2")} />
                                {format!("Welcome to {}", BUSINESS.company)}
                            </div>

                            <h1
                                class={classes!("text-5xl", "md:text-7xl", "font-bold", "mb-6", "leading-tight", Motion::FadeInUp.class())}
                                style={Motion::FadeInUp.style(stagger.delay_for(1))}
                            >
                                <span class="bg-gradient-to-r from-blue-600 via-purple-600 to-blue-800 bg-clip-text text-transparent">
                                    {"Crafting Digital"}
                                </span>
                                <br />
                                <span class="text-gray-900 dark:text-white">{"Experiences"}</span>
                            </h1>

                            <p
                                class={classes!("text-xl", "md:text-2xl", "text-gray-600", "dark:text-gray-300", "mb-8", "leading-relaxed", Motion::FadeInUp.class())}
                                style={Motion::FadeInUp.style(stagger.delay_for(2))}
                            >
                                {"I build modern, responsive websites and web applications that drive business growth and deliver exceptional user experiences."}
                            </p>

                            <div
                                class={classes!("flex", "flex-col", "sm:flex-row", "gap-4", "justify-center", "lg:justify-start", Motion::FadeInUp.class())}
                                style={Motion::FadeInUp.style(stagger.delay_for(3))}
                            >
                                <button type="button" class={classes!(styles::BUTTON_PRIMARY, "group")} onclick={go_to(SectionId::Contact)}>
                                    {"Start Your Project"}
                                    <LucideIcon icon={Icon::ArrowRight} class={classes!("group-hover:translate-x-1", "transition-transform")} />
                                </button>
                                <button type="button" class={styles::BUTTON_OUTLINE} onclick={go_to(SectionId::Projects)}>
                                    {"View My Work"}
                                </button>
                            </div>

                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-12">
                                { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                                    <div
                                        class={classes!("text-center", "p-4", "bg-white/50", "dark:bg-gray-800/50", "rounded-xl", "backdrop-blur-sm", Motion::ScaleIn.class())}
                                        style={Motion::ScaleIn.style(stagger.delay_for(4) + Stagger::LIST.delay_for(i))}
                                    >
                                        <div class="flex justify-center mb-2 text-blue-600 dark:text-blue-400">
                                            <LucideIcon icon={stat.icon} size={24} />
                                        </div>
                                        <div class="text-2xl font-bold text-gray-900 dark:text-white">{stat.number}</div>
                                        <div class="text-sm text-gray-600 dark:text-gray-400">{stat.label}</div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div
                            class={classes!("relative", "flex", "justify-center", "lg:justify-end", Motion::SlideInRight.class())}
                            style={Motion::SlideInRight.style(stagger.delay_for(1))}
                        >
                            <div class="relative animate-float">
                                <div class="animate-spin-slow absolute inset-0 rounded-full bg-gradient-to-r from-blue-400 to-purple-600 p-1">
                                    <div class="w-full h-full rounded-full bg-white dark:bg-gray-900" />
                                </div>
                                <div class="relative w-80 h-80 md:w-96 md:h-96 rounded-full overflow-hidden border-4 border-white dark:border-gray-800 shadow-2xl">
                                    <img
                                        src="/Webcraft-logo.jpg"
                                        alt={format!("{} - Web Developer", BUSINESS.owner)}
                                        class="w-full h-full object-cover"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-tr from-blue-500/20 to-purple-500/20" />
                                </div>
                                { for HERO_BADGES.iter().map(|(glyph, delay_ms, position)| html! {
                                    <div
                                        class={classes!("absolute", "w-12", "h-12", "bg-white", "dark:bg-gray-800", "rounded-full", "shadow-lg",
                                            "flex", "items-center", "justify-center", "text-2xl", "hover:scale-125", "transition-transform",
                                            Motion::ScaleIn.class())}
                                        style={format!("{} {}", position, Motion::ScaleIn.style(1_000 + delay_ms))}
                                    >
                                        {*glyph}
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>

                <button
                    type="button"
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-scroll-hint"
                    aria-label="Scroll to about"
                    onclick={go_to(SectionId::About)}
                >
                    <div class="w-6 h-10 border-2 border-gray-400 dark:border-gray-600 rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-gray-400 dark:bg-gray-600 rounded-full mt-2" />
                    </div>
                </button>
            </GradientBackground>
        </section>
    }
}
