use yew::prelude::*;
use webcraft_shared::content::NAV_ITEMS;
use webcraft_shared::{scroll_to_section, SectionId};

use crate::browser::DomSectionScroller;
use crate::components::sections::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, ServicesSection, SkillsSection, TestimonialsSection,
};
use crate::components::{Footer, Header, ScrollProgressBar};
use crate::hooks::{use_contact_form, use_document_metadata, use_mobile_menu, use_scroll_spy, use_theme, MenuAction};
use crate::styles;

/// The landing page. Owns the menu, the active section and the contact form.
#[function_component(Home)]
pub fn home() -> Html {
    use_document_metadata(None);

    let theme = use_theme();
    let menu = use_mobile_menu();
    let active_section = use_scroll_spy(&SectionId::ALL);
    let contact = use_contact_form();

    let on_navigate = use_callback(menu.clone(), move |section: SectionId, menu| {
        let next = scroll_to_section(&DomSectionScroller, menu.0, section);
        menu.dispatch(MenuAction::Set(next));
    });
    let on_toggle_menu = {
        let menu = menu.dispatcher();
        use_callback((), move |_: (), _| menu.dispatch(MenuAction::Toggle))
    };
    let on_pointer_down = {
        let menu = menu.dispatcher();
        use_callback((), move |inside_header: bool, _| {
            menu.dispatch(MenuAction::PointerDown { inside_header })
        })
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.toggle())
    };

    html! {
        <div class={styles::PAGE}>
            <ScrollProgressBar />
            <Header
                nav_items={NAV_ITEMS}
                {active_section}
                theme={theme.theme}
                menu_open={menu.0.is_open()}
                on_navigate={on_navigate.clone()}
                {on_toggle_theme}
                {on_toggle_menu}
                {on_pointer_down}
            />
            <main class="pt-16">
                <HeroSection on_navigate={on_navigate.clone()} />
                <AboutSection />
                <ServicesSection />
                <ProjectsSection />
                <SkillsSection />
                <TestimonialsSection />
                <ContactSection {contact} />
            </main>
            <Footer {on_navigate} />
        </div>
    }
}
