use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll::dom::{scroll_to_anchor, HEADER_ID};
use crate::scroll::ScrollState;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("why-choose", "Why Us"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scroll: ScrollState,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state_eq(|| false);

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let href = format!("#{}", id);
        let onclick = {
            let menu_open = menu_open.clone();
            let href = href.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_anchor(&href);
            })
        };
        html! {
            <li class="nav__item">
                <a {href} {onclick} class={classes!("nav__link", props.scroll.is_active(id).then_some("active-link"))}>
                    {label}
                </a>
            </li>
        }
    };

    let icon = if *menu_open { "fas fa-times" } else { "fas fa-bars" };

    html! {
        <header id={HEADER_ID} class="header" style={props.scroll.header_mode.style()}>
            <nav class="nav container">
                <a href="#home" class="nav__logo" onclick={Callback::from(|e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_anchor("#home");
                })}>
                    <img src="images/logo-black-terra.png" alt="Black Terra Energies" class="nav__logo-img" />
                </a>
                <div id="nav-menu" class={classes!("nav__menu", menu_open.then_some("show"))}>
                    <ul class="nav__list">
                        { for NAV_LINKS.iter().map(|&(id, label)| nav_link(id, label)) }
                    </ul>
                </div>
                <button id="nav-toggle" class="nav__toggle" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <i class={icon}></i>
                </button>
            </nav>
        </header>
    }
}
