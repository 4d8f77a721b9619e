use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::{use_navigator, Section, View};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 20.0);
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |section: Section| {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigator.scroll_to(section);
        });
        html! {
            <a href={format!("#{}", section.anchor())} class="nav-link" {onclick}>
                {section.label()}
            </a>
        }
    };

    let on_appointment = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigator.navigate(View::AppointmentForm);
        })
    };

    let on_logo = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.scroll_to(Section::Hero);
        })
    };

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={on_logo}>
                    <img src="/logo.png" alt="VISONIXRO" />
                    <span>{"VISONIXRO"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Section::ALL.into_iter().map(section_link) }
                    <button class="nav-cta-button" onclick={on_appointment}>
                        {"Agendar cita"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
