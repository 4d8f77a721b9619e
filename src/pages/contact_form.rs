use yew::prelude::*;

use crate::components::form_field::{SelectField, TextField};
use crate::components::page_header::PageHeader;
use crate::components::submit_success::SubmitSuccess;
use crate::content::{BUSINESS_TYPES, SERVICE_TYPES};
use crate::forms::{ContactForm, Field};
use crate::hooks::use_lead_form;
use crate::message::contact_message;

#[function_component(ContactFormPage)]
pub fn contact_form_page() -> Html {
    let handle = use_lead_form::<ContactForm>();

    if *handle.submitted {
        return html! {
            <SubmitSuccess
                title="¡Mensaje enviado!"
                message="Gracias por escribirnos. Te contactaremos muy pronto."
            />
        };
    }

    let form = (*handle.form).clone();
    let onsubmit = handle.on_submit(contact_message);

    html! {
        <div class="form-page">
            <PageHeader />
            <section class="form-section">
                <h1>{"Contáctanos"}</h1>
                <p class="section-subtitle">{"Cuéntanos sobre tu negocio y el servicio que necesitas"}</p>

                <form class="lead-form" {onsubmit}>
                    <div class="form-row">
                        <TextField
                            label="Nombre"
                            value={form.name}
                            placeholder="Tu nombre completo"
                            error={handle.error(Field::Name)}
                            oninput={handle.on_input(Field::Name)}
                        />
                        <TextField
                            label="Teléfono"
                            input_type="tel"
                            value={form.phone}
                            placeholder="+504 9999-9999"
                            error={handle.error(Field::Phone)}
                            oninput={handle.on_input(Field::Phone)}
                        />
                    </div>
                    <TextField
                        label="Correo electrónico"
                        input_type="email"
                        value={form.email}
                        placeholder="tucorreo@ejemplo.com"
                        error={handle.error(Field::Email)}
                        oninput={handle.on_input(Field::Email)}
                    />
                    <div class="form-row">
                        <SelectField
                            label="Tipo de negocio"
                            value={form.business_type}
                            placeholder="Selecciona tipo de negocio"
                            options={BUSINESS_TYPES}
                            error={handle.error(Field::BusinessType)}
                            onchange={handle.on_input(Field::BusinessType)}
                        />
                        <SelectField
                            label="Servicio necesitado"
                            value={form.service_type}
                            placeholder="Selecciona el servicio"
                            options={SERVICE_TYPES}
                            error={handle.error(Field::ServiceType)}
                            onchange={handle.on_input(Field::ServiceType)}
                        />
                    </div>
                    <button type="submit" class="submit-button">{"Enviar por WhatsApp"}</button>
                    <p class="form-note">{"* Campos obligatorios"}</p>
                </form>
            </section>
        </div>
    }
}
