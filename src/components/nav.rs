use yew::prelude::*;
use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

pub const SECTIONS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#admissions", "Admissions"),
    ("#facilities", "Facilities"),
    ("#stats", "Achievements"),
    ("#contact", "Contact"),
];

/// Smoothly scrolls to the element an in-page `#anchor` points at, if any.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No section for anchor {}", href);
            false
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_style = if *menu_open { "display: flex;" } else { "" };

    html! {
        <header id="header" class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                        z-index: 900;
                    }
                    .header.scrolled { background: #111; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3); }
                    .nav-content { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; }
                    .nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; }
                    .mobile-menu { display: none; background: none; border: none; cursor: pointer; }
                    .mobile-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    @media (max-width: 768px) {
                        .mobile-menu { display: block; }
                        .nav-menu { display: none; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; background: #111; padding: 1rem 2rem; }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <a href="#home" class="nav-logo" onclick={anchor_click("#home", menu_open.clone())}>
                    {"Bright Future School"}
                </a>
                <button class="mobile-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class="nav-menu" style={nav_style}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={anchor_click(*href, menu_open.clone())}>
                                {*label}
                            </a>
                        </li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}

fn anchor_click(href: &'static str, menu_open: UseStateHandle<bool>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(href);
        menu_open.set(false);
    })
}
