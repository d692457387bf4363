use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::constants::{SUBMIT_ERROR_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
use webcraft_shared::content::{Icon, CONTACT_DETAILS, SOCIAL_LINKS};
use webcraft_shared::{ContactField, SectionId, ServiceCategory, SubmitStatus};

use crate::components::{LucideIcon, Reveal, SectionHeading};
use crate::hooks::ContactFormHandle;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub contact: ContactFormHandle,
}

fn field_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = &props.contact.form;
    let data = form.data();
    let submitting = form.is_submitting();

    let on_field = |field: ContactField| {
        let on_input = props.contact.on_input.clone();
        Callback::from(move |e: Event| match field_value(&e) {
            Some(value) => on_input.emit((field, value)),
            None => log::warn!("{} changed but its value could not be read", field.as_str()),
        })
    };
    // `input` fires per keystroke on text controls; `change` covers the select.
    let on_text = |field: ContactField| {
        let on_field = on_field(field);
        Callback::from(move |e: InputEvent| on_field.emit(e.into()))
    };

    let onsubmit = {
        let on_submit = props.contact.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let input_class = |field: ContactField| {
        classes!(styles::INPUT, form.field_error(field).map(|_| styles::INPUT_INVALID))
    };
    let error_line = |field: ContactField| match form.field_error(field) {
        Some(message) => html! { <p id={format!("{}-error", field.as_str())} class={styles::FIELD_ERROR}>{message}</p> },
        None => html! {},
    };

    let banner = match form.status() {
        SubmitStatus::Success => html! {
            <div role="status" class={classes!(styles::ALERT_SUCCESS, "text-center")}>{SUBMIT_SUCCESS_MESSAGE}</div>
        },
        SubmitStatus::Error(_) => html! {
            <div role="alert" class={classes!(styles::ALERT_ERROR, "text-center")}>{SUBMIT_ERROR_MESSAGE}</div>
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
    };

    html! {
        <section id={SectionId::Contact.as_str()} class={styles::SECTION_ALT}>
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Let's Build Something Amazing"
                    subtitle="Ready to transform your digital presence? Let's discuss your project and bring your vision to life."
                />

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal motion={Motion::SlideInLeft} class={classes!("space-y-8")}>
                        <div class="bg-gradient-to-br from-blue-600 to-purple-700 text-white rounded-2xl p-8">
                            <h3 class="text-2xl font-bold mb-6">{"Get In Touch"}</h3>
                            <p class="mb-8 opacity-90 leading-relaxed">
                                {"Ready to start your next project? I'm here to help you create something extraordinary. Let's discuss how we can bring your vision to life with cutting-edge web solutions."}
                            </p>
                            <div class="space-y-6">
                                { for CONTACT_DETAILS.iter().enumerate().map(|(i, detail)| html! {
                                    <div
                                        class={classes!("flex", "items-center", "space-x-4", Motion::SlideInLeft.class())}
                                        style={Motion::SlideInLeft.style(Stagger::LIST.delay_for(i))}
                                    >
                                        <div class="bg-white/10 p-3 rounded-lg"><LucideIcon icon={detail.icon} /></div>
                                        <div>
                                            <p class="font-medium">{detail.label}</p>
                                            <p class="opacity-90">{detail.value}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                            <div class="flex space-x-4 mt-8">
                                { for SOCIAL_LINKS.iter().map(|social| html! {
                                    <a
                                        href={social.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={social.label}
                                        class="bg-white/10 p-3 rounded-lg hover:bg-white/20 transition-colors"
                                    >
                                        <LucideIcon icon={social.icon} />
                                    </a>
                                }) }
                            </div>
                        </div>
                    </Reveal>

                    <Reveal motion={Motion::SlideInRight} class={classes!("bg-white", "dark:bg-gray-900", "rounded-2xl", "p-8", "shadow-lg")}>
                        <form class="space-y-6" novalidate={true} onsubmit={onsubmit}>
                            <div class="grid md:grid-cols-2 gap-6">
                                <div>
                                    <label for="name" class={styles::FIELD_LABEL}>{"Full Name *"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        class={input_class(ContactField::Name)}
                                        value={data.name.clone()}
                                        oninput={on_text(ContactField::Name)}
                                        required={true}
                                        placeholder="Your full name"
                                    />
                                    {error_line(ContactField::Name)}
                                </div>
                                <div>
                                    <label for="email" class={styles::FIELD_LABEL}>{"Email Address *"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        class={input_class(ContactField::Email)}
                                        value={data.email.clone()}
                                        oninput={on_text(ContactField::Email)}
                                        required={true}
                                        placeholder="your@email.com"
                                    />
                                    {error_line(ContactField::Email)}
                                </div>
                            </div>

                            <div>
                                <label for="service" class={styles::FIELD_LABEL}>{"Service Needed"}</label>
                                <select
                                    id="service"
                                    name="service"
                                    class={styles::INPUT}
                                    onchange={on_field(ContactField::Service)}
                                >
                                    { for ServiceCategory::ALL.iter().map(|service| html! {
                                        <option value={service.as_str()} selected={*service == data.service}>
                                            {service.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div>
                                <label for="message" class={styles::FIELD_LABEL}>{"Project Details *"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    class={classes!(input_class(ContactField::Message), "resize-none")}
                                    value={data.message.clone()}
                                    oninput={on_text(ContactField::Message)}
                                    required={true}
                                    placeholder="Tell me about your project, timeline, and any specific requirements..."
                                />
                                {error_line(ContactField::Message)}
                            </div>

                            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full")} disabled={submitting}>
                                if submitting {
                                    <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin" />
                                } else {
                                    <LucideIcon icon={Icon::Send} />
                                }
                                {if submitting { "Sending..." } else { "Send Message" }}
                            </button>

                            {banner}
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
