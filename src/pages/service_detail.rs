use yew::prelude::*;

use crate::components::page_header::PageHeader;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::content;
use crate::message::{business_whatsapp_link, service_inquiry_message};
use crate::navigation::{use_navigator, ServiceKind, View};

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub kind: ServiceKind,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let navigator = use_navigator();
    let service = content::service(props.kind);
    let whatsapp = business_whatsapp_link(&service_inquiry_message(service.title));

    html! {
        <div class={classes!("service-detail", service.accent)}>
            <PageHeader back_label="Volver a servicios" />

            <section class="service-hero">
                <span class="service-icon large">{service.icon}</span>
                <h1>{service.title}</h1>
                <p>{service.description}</p>
            </section>

            <section class="service-benefits">
                <h2>{"Beneficios de Digitalizar tu Negocio"}</h2>
                <p class="section-subtitle">
                    {"Descubre cómo nuestros servicios pueden transformar tu empresa"}
                </p>
                <div class="benefits-grid">
                    { for service.benefits.iter().map(|benefit| html! {
                        <div class="benefit-item">
                            <span class="benefit-check">{"✓"}</span>
                            <p>{*benefit}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="service-cta">
                <h3>{"¿Listo para Transformar tu Negocio?"}</h3>
                <p>
                    {"Contáctanos hoy y descubre cómo podemos ayudarte a llevar tu empresa al siguiente nivel digital."}
                </p>
                <div class="cta-buttons">
                    <a href={whatsapp} target="_blank" rel="noopener noreferrer" class="cta-whatsapp">
                        {"WhatsApp"}
                    </a>
                    <a href={format!("tel:{}", CONTACT_PHONE)} class="cta-phone">{CONTACT_PHONE}</a>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} class="cta-email">{CONTACT_EMAIL}</a>
                </div>
                <button class="hero-cta" onclick={navigator.to(View::AppointmentForm)}>
                    {"Agendar una cita"}
                </button>
            </section>
        </div>
    }
}
