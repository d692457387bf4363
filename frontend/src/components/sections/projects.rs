use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Icon, Project, PROJECTS};
use webcraft_shared::SectionId;

use crate::components::{LucideIcon, Reveal, SectionHeading};
use crate::styles;

fn media(project: &Project) -> Html {
    match project.video {
        Some(video) => html! {
            <iframe
                src={video}
                title={project.title}
                class="w-full h-full"
                frameborder="0"
                allow={Project::VIDEO_ALLOW}
                allowfullscreen={true}
            />
        },
        None => html! {
            <img
                src={project.image_or_placeholder()}
                alt={project.title}
                class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
            />
        },
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class={classes!(styles::SECTION, "bg-white", "dark:bg-gray-900")}>
            <div class={styles::CONTAINER}>
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Showcasing innovative solutions that drive business growth and user engagement"
                />

                <div class="grid md:grid-cols-2 gap-8">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <Reveal
                            motion={Motion::FadeInUp}
                            delay_ms={Stagger::CONTAINER.delay_for(i)}
                            class={classes!("group", "bg-white", "dark:bg-gray-800", "rounded-2xl", "overflow-hidden", "shadow-lg", "hover:shadow-2xl", "transition-all", "duration-300")}
                        >
                            <div class="relative h-64 overflow-hidden">
                                {media(project)}
                                <div class="absolute top-4 left-4">
                                    <span class="px-3 py-1 bg-white/90 dark:bg-gray-900/90 text-sm font-medium rounded-full text-gray-900 dark:text-white">
                                        {project.category}
                                    </span>
                                </div>
                            </div>
                            <div class="p-8">
                                <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-3">{project.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">{project.description}</p>
                                <div class="flex flex-wrap gap-2 mb-6">
                                    { for project.tags.iter().map(|tag| html! { <span class={styles::TAG}>{*tag}</span> }) }
                                </div>
                                <div class="flex gap-4">
                                    <a
                                        href={project.github}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-gray-900 dark:bg-gray-700 text-white rounded-lg hover:bg-gray-800 dark:hover:bg-gray-600 transition-colors"
                                    >
                                        <LucideIcon icon={Icon::Github} size={16} />
                                        {"Code"}
                                    </a>
                                    <a
                                        href={project.demo}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg hover:shadow-lg transition-all"
                                    >
                                        <LucideIcon icon={Icon::ExternalLink} size={16} />
                                        {"Live Demo"}
                                    </a>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
