use chrono::{Datelike, NaiveTime, Timelike, Weekday};

use crate::config;
use crate::forms::{AppointmentForm, ContactForm};
use crate::validation::parse_date;

const WEEKDAYS: [&str; 7] = ["lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo"];
const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

pub fn appointment_message(form: &AppointmentForm) -> String {
    format!(
        "Hola, me interesa agendar una cita:\n\
         \n\
         Nombre: {}\n\
         Teléfono: {}\n\
         Correo: {}\n\
         Tipo de negocio: {}\n\
         Servicio necesitado: {}\n\
         Fecha: {}\n\
         Hora: {}\n\
         \n\
         Espero confirmen la disponibilidad. Gracias.",
        form.name,
        form.phone,
        form.email,
        form.business_type,
        form.service_type,
        format_date(&form.date),
        format_time(&form.time),
    )
}

pub fn contact_message(form: &ContactForm) -> String {
    format!(
        "Hola, me interesa sus servicios:\n\
         \n\
         Nombre: {}\n\
         Teléfono: {}\n\
         Correo: {}\n\
         Tipo de negocio: {}\n\
         Servicio necesitado: {}\n\
         \n\
         Espero su contacto pronto. Gracias.",
        form.name, form.phone, form.email, form.business_type, form.service_type,
    )
}

pub fn service_inquiry_message(service_title: &str) -> String {
    format!("Hola, me interesa el servicio de {}", service_title)
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}?phone={}&text={}&type=phone_number&app_absent=0",
        config::WHATSAPP_SEND_URL,
        phone,
        urlencoding::encode(message),
    )
}

/// Link to the business number configured for this build.
pub fn business_whatsapp_link(message: &str) -> String {
    whatsapp_link(config::whatsapp_number(), message)
}

/// `2026-10-20` -> `martes, 20 de octubre de 2026`. Unparsable input is returned as is.
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => format!(
            "{}, {} de {} de {}",
            weekday_name(d.weekday()),
            d.day(),
            MONTHS[d.month0() as usize],
            d.year()
        ),
        None => date.to_string(),
    }
}

/// `14:30` -> `02:30 p. m.`
pub fn format_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(t) => {
            let (pm, hour) = t.hour12();
            format!("{:02}:{:02} {}", hour, t.minute(), if pm { "p. m." } else { "a. m." })
        }
        Err(_) => time.to_string(),
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AppointmentForm {
        AppointmentForm {
            name: "Ana Mejía".into(),
            phone: "+504 9999-9999".into(),
            email: "ana@negocio.hn".into(),
            business_type: "Restaurante".into(),
            service_type: "Página web".into(),
            date: "2026-10-20".into(),
            time: "14:30".into(),
        }
    }

    fn text_param(link: &str) -> String {
        let encoded = link
            .split('&')
            .find_map(|part| part.strip_prefix("text="))
            .unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn appointment_lists_fields_in_label_order() {
        let message = appointment_message(&form());
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hola, me interesa agendar una cita:",
                "",
                "Nombre: Ana Mejía",
                "Teléfono: +504 9999-9999",
                "Correo: ana@negocio.hn",
                "Tipo de negocio: Restaurante",
                "Servicio necesitado: Página web",
                "Fecha: martes, 20 de octubre de 2026",
                "Hora: 02:30 p. m.",
                "",
                "Espero confirmen la disponibilidad. Gracias.",
            ]
        );
    }

    #[test]
    fn link_text_decodes_to_message() {
        let message = appointment_message(&form());
        let link = whatsapp_link("50488857653", &message);
        assert!(link.starts_with("https://api.whatsapp.com/send/?phone=50488857653&text="));
        assert!(link.ends_with("&type=phone_number&app_absent=0"));
        assert_eq!(text_param(&link), message);
    }

    #[test]
    fn encoded_text_cannot_break_query() {
        let link = whatsapp_link("1", "a&type=x #1 + 100%");
        assert_eq!(link.matches('&').count(), 3);
        assert_eq!(text_param(&link), "a&type=x #1 + 100%");
    }

    #[test]
    fn contact_message_has_no_schedule() {
        let form = ContactForm {
            name: "Luis".into(),
            phone: "99999999".into(),
            email: "l@x.co".into(),
            business_type: "Tienda".into(),
            service_type: "Redes sociales".into(),
        };
        let message = contact_message(&form);
        assert!(message.starts_with("Hola, me interesa sus servicios:\n\nNombre: Luis\n"));
        assert!(!message.contains("Fecha:"));
        assert!(message.ends_with("Espero su contacto pronto. Gracias."));
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_time("00:05"), "12:05 a. m.");
        assert_eq!(format_time("09:00"), "09:00 a. m.");
        assert_eq!(format_time("12:00"), "12:00 p. m.");
        assert_eq!(format_time("23:59"), "11:59 p. m.");
        assert_eq!(format_time("later"), "later");
    }

    #[test]
    fn date_uses_spanish_long_form() {
        assert_eq!(format_date("2026-01-01"), "jueves, 1 de enero de 2026");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn service_inquiry() {
        assert_eq!(
            service_inquiry_message("Páginas Web"),
            "Hola, me interesa el servicio de Páginas Web"
        );
    }
}
