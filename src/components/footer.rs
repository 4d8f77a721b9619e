use chrono::Datelike;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::content::{ABOUT_SUBTITLE, ADDRESS};
use crate::navigation::{use_navigator, Section};

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_navigator();
    let year = chrono::Local::now().year();

    let quick_link = |section: Section| {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.scroll_to(section);
        });
        html! {
            <li><a href={format!("#{}", section.anchor())} {onclick}>{section.label()}</a></li>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/logo.png" alt="VISONIXRO" />
                    <span>{"VISONIXRO"}</span>
                    <p>{ABOUT_SUBTITLE}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Enlaces Rápidos"}</h4>
                    <ul>
                        { for [Section::Hero, Section::About, Section::Services, Section::Contact]
                            .into_iter()
                            .map(quick_link) }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Contacto"}</h4>
                    <p>{ADDRESS}</p>
                    <p><a href={format!("tel:{}", CONTACT_PHONE)}>{CONTACT_PHONE}</a></p>
                    <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                </div>
            </div>
            <p class="footer-rights">
                {format!("© {} VISONIXRO. Todos los derechos reservados.", year)}
            </p>
        </footer>
    }
}
