use yew::prelude::*;

use crate::content::{HERO_DESCRIPTION, HERO_STATS, HERO_TITLE};
use crate::navigation::{use_navigator, Section, View};

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator();

    let to_services = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.scroll_to(Section::Services);
        })
    };

    html! {
        <section id={Section::Hero.anchor()} class="hero">
            <img src="/logo.png" alt="VISONIXRO" class="hero-logo" />
            <h1>{HERO_TITLE}</h1>
            <p class="hero-subtitle">{HERO_DESCRIPTION}</p>
            <div class="hero-actions">
                <button class="hero-cta" onclick={navigator.to(View::AppointmentForm)}>
                    {"Agenda tu cita"}
                </button>
                <button class="hero-secondary" onclick={to_services}>
                    {"Ver servicios"}
                </button>
            </div>
            <div class="hero-stats">
                { for HERO_STATS.iter().map(|(value, label)| html! {
                    <div class="hero-stat">
                        <span class="stat-value">{*value}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
