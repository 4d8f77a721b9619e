use yew::prelude::*;

use crate::components::form_field::{SelectField, TextField};
use crate::components::page_header::PageHeader;
use crate::components::submit_success::SubmitSuccess;
use crate::content::{BUSINESS_TYPES, CEO_NAME, CEO_ROLE, SERVICE_TYPES};
use crate::forms::{AppointmentForm, Field};
use crate::hooks::use_lead_form;
use crate::message::appointment_message;
use crate::validation::{self, DATE_FORMAT};

#[function_component(AppointmentFormPage)]
pub fn appointment_form_page() -> Html {
    let handle = use_lead_form::<AppointmentForm>();

    if *handle.submitted {
        return html! {
            <SubmitSuccess
                title="¡Cita Agendada!"
                message="Te contactaremos para confirmar la disponibilidad de tu cita."
            />
        };
    }

    let form = (*handle.form).clone();
    let onsubmit = handle.on_submit(appointment_message);
    let min_date = validation::today().format(DATE_FORMAT).to_string();

    html! {
        <div class="form-page">
            <PageHeader />
            <section class="form-section">
                <h1>{"Agenda tu Cita"}</h1>
                <p class="section-subtitle">{"Elige el día y la hora que mejor te convengan"}</p>

                <div class="form-layout">
                    <aside class="form-profile">
                        <img src="/perf.png" alt={CEO_NAME} />
                        <h3>{CEO_NAME}</h3>
                        <p>{CEO_ROLE}</p>
                    </aside>

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
                        <div class="form-row">
                            <TextField
                                label="Fecha"
                                input_type="date"
                                value={form.date}
                                min={Some(AttrValue::from(min_date))}
                                error={handle.error(Field::Date)}
                                oninput={handle.on_input(Field::Date)}
                            />
                            <TextField
                                label="Hora"
                                input_type="time"
                                value={form.time}
                                error={handle.error(Field::Time)}
                                oninput={handle.on_input(Field::Time)}
                            />
                        </div>
                        <button type="submit" class="submit-button">{"Agendar Cita"}</button>
                        <p class="form-note">{"* Campos obligatorios"}</p>
                    </form>
                </div>
            </section>
        </div>
    }
}
