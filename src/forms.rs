use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::validation::{is_valid_date, is_valid_email, is_valid_phone};

pub const REQUIRED: &str = "Este campo es obligatorio";
pub const PHONE_INVALID: &str = "Ingresa un teléfono válido";
pub const EMAIL_INVALID: &str = "Ingresa un correo electrónico válido";
pub const DATE_IN_PAST: &str = "La fecha no puede ser anterior a hoy";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    BusinessType,
    ServiceType,
    Date,
    Time,
}

pub type FormErrors = BTreeMap<Field, &'static str>;

/// Shared surface of the contact and appointment forms.
pub trait LeadForm: Clone + Default + PartialEq {
    fn set(&mut self, field: Field, value: String);
    fn validate(&self, today: NaiveDate) -> Result<(), FormErrors>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub business_type: String,
    pub service_type: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub business_type: String,
    pub service_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
}

impl LeadForm for ContactForm {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::BusinessType => self.business_type = value,
            Field::ServiceType => self.service_type = value,
            Field::Date | Field::Time => {}
        }
    }

    fn validate(&self, _today: NaiveDate) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        check_lead_fields(
            &mut errors,
            &self.name,
            &self.phone,
            &self.email,
            &self.business_type,
            &self.service_type,
        );
        finish(errors)
    }
}

impl LeadForm for AppointmentForm {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::BusinessType => self.business_type = value,
            Field::ServiceType => self.service_type = value,
            Field::Date => self.date = value,
            Field::Time => self.time = value,
        }
    }

    fn validate(&self, today: NaiveDate) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        check_lead_fields(
            &mut errors,
            &self.name,
            &self.phone,
            &self.email,
            &self.business_type,
            &self.service_type,
        );

        if self.date.is_empty() {
            errors.insert(Field::Date, REQUIRED);
        } else if !is_valid_date(&self.date, today) {
            errors.insert(Field::Date, DATE_IN_PAST);
        }
        if self.time.is_empty() {
            errors.insert(Field::Time, REQUIRED);
        }
        finish(errors)
    }
}

fn check_lead_fields(
    errors: &mut FormErrors,
    name: &str,
    phone: &str,
    email: &str,
    business_type: &str,
    service_type: &str,
) {
    if name.trim().is_empty() {
        errors.insert(Field::Name, REQUIRED);
    }

    if phone.trim().is_empty() {
        errors.insert(Field::Phone, REQUIRED);
    } else if !is_valid_phone(phone) {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    if email.trim().is_empty() {
        errors.insert(Field::Email, REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    // Selects: the placeholder option has an empty value.
    if business_type.is_empty() {
        errors.insert(Field::BusinessType, REQUIRED);
    }
    if service_type.is_empty() {
        errors.insert(Field::ServiceType, REQUIRED);
    }
}

/// Stores `value` in `field` and clears that field's error. Other errors stay.
pub fn apply_edit<F: LeadForm>(form: &mut F, errors: &mut FormErrors, field: Field, value: String) {
    form.set(field, value);
    errors.remove(&field);
}

fn finish(errors: FormErrors) -> Result<(), FormErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::default();
        let mut errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 5);

        apply_edit(&mut form, &mut errors, Field::Email, "ana@".into());
        assert_eq!(form.email, "ana@");
        assert!(!errors.contains_key(&Field::Email));
        assert_eq!(errors.get(&Field::Name), Some(&REQUIRED));
        assert_eq!(errors.len(), 4);

        // Editing a field without an error leaves the map as is.
        apply_edit(&mut form, &mut errors, Field::Email, "ana@negocio.hn".into());
        assert_eq!(errors.len(), 4);
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn valid_appointment() -> AppointmentForm {
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

    #[test]
    fn valid_appointment_passes() {
        assert_eq!(valid_appointment().validate(today()), Ok(()));
    }

    #[test]
    fn empty_appointment_flags_every_field() {
        let errors = AppointmentForm::default().validate(today()).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(errors.values().all(|msg| *msg == REQUIRED));
    }

    #[test]
    fn only_failing_fields_are_reported() {
        let mut form = valid_appointment();
        form.set(Field::Email, "ana@negocio".into());
        form.set(Field::Time, String::new());
        form.set(Field::Date, "2026-10-13".into());

        let errors = form.validate(today()).unwrap_err();
        let expected: FormErrors = [
            (Field::Email, EMAIL_INVALID),
            (Field::Date, DATE_IN_PAST),
            (Field::Time, REQUIRED),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = ContactForm {
            name: "   ".into(),
            phone: "99999999".into(),
            email: "a@b.co".into(),
            business_type: "Tienda".into(),
            service_type: "Redes sociales".into(),
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Name]);

        form.set(Field::Name, "Luis".into());
        assert_eq!(form.validate(today()), Ok(()));
    }

    #[test]
    fn contact_form_ignores_schedule_fields() {
        let mut form = ContactForm::default();
        form.set(Field::Date, "2026-10-20".into());
        form.set(Field::Time, "10:00".into());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn invalid_phone_is_not_required_message() {
        let mut form = valid_appointment();
        form.set(Field::Phone, "123".into());
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::Phone), Some(&PHONE_INVALID));
        assert_eq!(errors.len(), 1);
    }
}
