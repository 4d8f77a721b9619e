use yew::prelude::*;

use crate::content::service;
use crate::navigation::{use_navigator, Section, ServiceKind, View};

#[function_component(Services)]
pub fn services() -> Html {
    let navigator = use_navigator();

    html! {
        <section id={Section::Services.anchor()} class="services">
            <h2>{"Nuestros Servicios"}</h2>
            <p class="section-subtitle">{"Soluciones digitales para cada etapa de tu negocio"}</p>

            <div class="services-grid">
                { for ServiceKind::ALL.into_iter().map(service).map(|service| html! {
                    <div
                        class={classes!("service-card", service.accent)}
                        onclick={navigator.to(View::Service(service.kind))}
                    >
                        <span class="service-icon">{service.icon}</span>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <span class="learn-more">{"Saber más →"}</span>
                    </div>
                }) }
            </div>

            <div class="services-cta">
                <h3>{"¿Listo para transformar tu visión digital?"}</h3>
                <p>
                    {"Contáctanos hoy y descubre cómo podemos llevar tu proyecto al siguiente nivel."}
                </p>
                <button class="hero-cta" onclick={navigator.to(View::ContactForm)}>
                    {"Comenzar Proyecto"}
                </button>
            </div>
        </section>
    }
}
