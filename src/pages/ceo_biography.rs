use yew::prelude::*;

use crate::components::page_header::PageHeader;
use crate::content::{CEO_BIOGRAPHY, CEO_NAME, CEO_ROLE, CEO_SKILLS};
use crate::navigation::{use_navigator, View};

#[function_component(CeoBiography)]
pub fn ceo_biography() -> Html {
    let navigator = use_navigator();

    html! {
        <div class="ceo-biography">
            <PageHeader />
            <section class="bio-hero">
                <img src="/perf.png" alt={CEO_NAME} class="bio-photo" />
                <h1>{CEO_NAME}</h1>
                <p class="bio-role">{CEO_ROLE}</p>
            </section>

            <section class="bio-body">
                { for CEO_BIOGRAPHY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }

                <h2>{"Especialidades"}</h2>
                <ul class="bio-skills">
                    { for CEO_SKILLS.iter().map(|skill| html! { <li>{*skill}</li> }) }
                </ul>

                <button class="hero-cta" onclick={navigator.to(View::AppointmentForm)}>
                    {"Agenda una reunión"}
                </button>
            </section>
        </div>
    }
}
