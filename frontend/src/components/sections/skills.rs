use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Skill, SKILLS};
use webcraft_shared::SectionId;

use crate::components::{Reveal, SectionHeading};
use crate::hooks::use_reveal;
use crate::styles;

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: Skill,
}

/// The bar grows from zero to the skill level once it is on screen.
#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let width = if visible { props.skill.width_percent() } else { 0 };

    html! {
        <div ref={node} class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3 overflow-hidden">
            <div
                class="skill-bar h-full bg-gradient-to-r from-blue-600 to-purple-600 rounded-full"
                style={format!("width: {}%;", width)}
            />
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    html! {
        <section id={SectionId::Skills.as_str()} class={styles::SECTION_ALT}>
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    title="Technical Expertise"
                    subtitle="Mastering cutting-edge technologies to deliver exceptional results"
                />

                <div class="grid md:grid-cols-2 gap-8">
                    { for SKILLS.iter().enumerate().map(|(i, skill)| html! {
                        <Reveal motion={Motion::FadeInUp} delay_ms={Stagger::LIST.delay_for(i)} class={classes!("space-y-3")}>
                            <div class="flex justify-between items-center">
                                <div class="flex items-center space-x-3">
                                    <span class="text-2xl">{skill.icon}</span>
                                    <span class="font-semibold text-gray-900 dark:text-white">{skill.name}</span>
                                </div>
                                <span class="text-sm font-medium text-gray-600 dark:text-gray-400">
                                    {format!("{}%", skill.width_percent())}
                                </span>
                            </div>
                            <SkillBar skill={*skill} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
