use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::content::{map_link, ADDRESS, COORDINATES, HOURS};
use crate::navigation::{use_navigator, Section, View};

#[function_component(Location)]
pub fn location() -> Html {
    let navigator = use_navigator();

    html! {
        <section id={Section::Contact.anchor()} class="location">
            <h2>{"Encuéntranos"}</h2>
            <div class="location-grid">
                <div class="location-info">
                    <p><strong>{"Dirección: "}</strong>{ADDRESS}</p>
                    <p><strong>{"Horario: "}</strong>{HOURS}</p>
                    <p>
                        <strong>{"Teléfono: "}</strong>
                        <a href={format!("tel:{}", CONTACT_PHONE)}>{CONTACT_PHONE}</a>
                    </p>
                    <p>
                        <strong>{"Correo: "}</strong>
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </p>
                    <p class="coordinates">
                        {"Coordenadas GPS: "}{format!("{}, {}", COORDINATES.0, COORDINATES.1)}
                    </p>
                </div>
                <div class="location-actions">
                    <a href={map_link()} target="_blank" rel="noopener noreferrer" class="hero-secondary">
                        {"¿Cómo llegar?"}
                    </a>
                    <button class="hero-cta" onclick={navigator.to(View::AppointmentForm)}>
                        {"Agenda una visita"}
                    </button>
                    <button class="hero-secondary" onclick={navigator.to(View::ContactForm)}>
                        {"Escríbenos"}
                    </button>
                </div>
            </div>
        </section>
    }
}
