use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{Icon, NavItem, BRAND};
use webcraft_shared::{SectionId, Theme};

use crate::components::LucideIcon;
use crate::hooks::use_pointer_down;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav_items: &'static [NavItem],
    pub active_section: SectionId,
    pub theme: Theme,
    pub menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    /// Fired for every pointer-down on the page; `true` when it hit the header.
    pub on_pointer_down: Callback<bool>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let header_ref = use_node_ref();
    use_pointer_down(header_ref.clone(), props.on_pointer_down.clone());

    let theme_button = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        let (icon, label) = match props.theme {
            Theme::Light => (Icon::Moon, "Switch to dark mode"),
            Theme::Dark => (Icon::Sun, "Switch to light mode"),
        };
        html! {
            <button
                type="button"
                class={styles::ICON_BUTTON}
                aria-label={label}
                onclick={Callback::from(move |_| on_toggle_theme.emit(()))}
            >
                <LucideIcon {icon} />
            </button>
        }
    };

    let nav_button = |index: usize, item: &NavItem, mobile: bool| {
        let active = item.id == props.active_section;
        let stagger = if mobile { Stagger::MOBILE_NAV } else { Stagger::NAV };
        let motion = if mobile { Motion::SlideInLeft } else { Motion::FadeInUp };
        let base = if mobile { styles::MOBILE_ITEM } else { styles::NAV_ITEM };
        let state = if active { styles::NAV_ITEM_ACTIVE } else { styles::NAV_ITEM_IDLE };
        let class = classes!(base, state, motion.class());
        let style = motion.style(stagger.delay_for(index));
        let icon = item.icon.map(|icon| html! { <LucideIcon {icon} size={18} /> });

        match item.href {
            Some(href) => html! {
                <a href={href} class={class} style={style}>
                    {icon}
                    <span>{item.label}</span>
                </a>
            },
            None => {
                let on_navigate = props.on_navigate.clone();
                let id = item.id;
                html! {
                    <button
                        type="button"
                        class={class}
                        style={style}
                        aria-current={active.then_some("true")}
                        onclick={Callback::from(move |_| on_navigate.emit(id))}
                    >
                        {icon}
                        <span>{item.label}</span>
                    </button>
                }
            }
        }
    };

    let on_brand = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(SectionId::Hero))
    };

    let on_toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_| on_toggle_menu.emit(()))
    };

    html! {
        <header ref={header_ref} class={styles::NAV}>
            <nav class={styles::NAV_INNER}>
                <button type="button" class={styles::NAV_BRAND} onclick={on_brand}>
                    {BRAND}
                    <span class={styles::NAV_BRAND_UNDERLINE} />
                </button>

                <div class="hidden md:flex items-center space-x-1">
                    { for props.nav_items.iter().enumerate().map(|(i, item)| nav_button(i, item, false)) }
                    <div class="ml-4">{theme_button.clone()}</div>
                </div>

                <div class="md:hidden flex items-center space-x-2">
                    {theme_button}
                    <button
                        type="button"
                        class={styles::ICON_BUTTON}
                        aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={props.menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <LucideIcon icon={if props.menu_open { Icon::X } else { Icon::Menu }} size={24} />
                    </button>
                </div>
            </nav>

            if props.menu_open {
                <div class={styles::MOBILE_PANEL}>
                    <div class="px-4 py-4 space-y-2">
                        { for props.nav_items.iter().enumerate().map(|(i, item)| nav_button(i, item, true)) }
                    </div>
                </div>
            }
        </header>
    }
}
