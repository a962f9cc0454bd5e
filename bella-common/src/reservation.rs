//! Reservation form state machine
//!
//! Field values and the status banner are two independent pieces of state.
//! A rejected submission only touches the status so the visitor can fix
//! their input; an accepted one resets every field and asks the caller to
//! clear the status after [`STATUS_CLEAR_DELAY`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::Error;

/// How long the status banner stays up after a successful submission
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

pub const DEFAULT_GUESTS: &str = "2";

pub const VALIDATION_FAILED_MESSAGE: &str = "Por favor, completa todos los campos obligatorios.";
pub const SUBMITTED_MESSAGE: &str =
    "¡Reserva enviada con éxito! Te contactaremos pronto para confirmar tu reserva.";

/// Values offered by the guest count selector, with their labels
pub const GUEST_OPTIONS: [(&str, &str); 7] = [
    ("1", "1 persona"),
    ("2", "2 personas"),
    ("3", "3 personas"),
    ("4", "4 personas"),
    ("5", "5 personas"),
    ("6", "6 personas"),
    ("7+", "Más de 6 personas"),
];

/// Input of the reservation form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Date,
        FormField::Time,
        FormField::Guests,
        FormField::Message,
    ];

    pub const REQUIRED: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Date,
        FormField::Time,
    ];

    /// Value of the element's `name`/`id` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Guests => "guests",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nombre Completo *",
            FormField::Email => "Email *",
            FormField::Phone => "Teléfono *",
            FormField::Date => "Fecha *",
            FormField::Time => "Hora *",
            FormField::Guests => "Número de Personas",
            FormField::Message => "Comentarios adicionales",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Current values of every form input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl Default for ReservationFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            message: String::new(),
        }
    }
}

impl ReservationFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Guests => &self.guests,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Guests => &mut self.guests,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Required fields that are currently empty
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Banner shown above the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub submitted: bool,
    pub message: String,
}

impl FormStatus {
    pub fn success() -> Self {
        Self {
            submitted: true,
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }

    pub fn validation_failed() -> Self {
        Self {
            submitted: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
        }
    }

    /// Nothing to show
    pub fn is_idle(&self) -> bool {
        self.message.is_empty()
    }

    pub fn is_error(&self) -> bool {
        !self.submitted && !self.message.is_empty()
    }

    /// CSS modifier for the banner
    pub fn class(&self) -> &'static str {
        if self.submitted {
            "success"
        } else {
            "error"
        }
    }
}

/// Snapshot of an accepted reservation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl From<ReservationFields> for Reservation {
    fn from(fields: ReservationFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            date: fields.date,
            time: fields.time,
            guests: fields.guests,
            message: fields.message,
        }
    }
}

/// Result of [`ReservationForm::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The caller must clear the status once `clear_after` has elapsed
    Accepted {
        reservation: Reservation,
        clear_after: Duration,
    },
    Rejected { missing: Vec<FormField> },
}

/// State owned by the reservation form component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationForm {
    fields: ReservationFields,
    status: FormStatus,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Overwrite one input; no validation happens until submit
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Same as [`update_field`](Self::update_field) keyed by the element's `name` attribute
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> crate::Result<()> {
        let field = name.parse::<FormField>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "reservation rejected");
            self.status = FormStatus::validation_failed();
            return SubmitOutcome::Rejected { missing };
        }

        let reservation = Reservation::from(std::mem::take(&mut self.fields));
        tracing::info!(
            date = %reservation.date,
            time = %reservation.time,
            guests = %reservation.guests,
            "reservation submitted"
        );
        self.status = FormStatus::success();

        SubmitOutcome::Accepted {
            reservation,
            clear_after: STATUS_CLEAR_DELAY,
        }
    }

    /// Return the banner to idle; field values are not touched
    pub fn clear_status(&mut self) {
        self.status = FormStatus::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(outcome: SubmitOutcome) -> bool {
        matches!(outcome, SubmitOutcome::Accepted { .. })
    }

    fn filled_form() -> ReservationForm {
        let mut form = ReservationForm::new();
        form.update_field(FormField::Name, "Ana");
        form.update_field(FormField::Email, "a@b.com");
        form.update_field(FormField::Phone, "600000000");
        form.update_field(FormField::Date, "2024-01-01");
        form.update_field(FormField::Time, "20:00");
        form
    }

    #[test]
    fn test_defaults() {
        let form = ReservationForm::new();
        assert_eq!(form.value(FormField::Guests), "2");
        for field in FormField::ALL {
            if field != FormField::Guests {
                assert_eq!(form.value(field), "", "{field}");
            }
        }
        assert!(form.status().is_idle());
        assert!(!form.status().submitted);
    }

    #[test]
    fn test_successful_submit_resets_fields() {
        let mut form = filled_form();
        form.update_field(FormField::Guests, "4");
        form.update_field(FormField::Message, "Mesa junto a la ventana");

        let outcome = form.submit();

        match outcome {
            SubmitOutcome::Accepted { reservation, clear_after } => {
                assert_eq!(reservation.name, "Ana");
                assert_eq!(reservation.guests, "4");
                assert_eq!(reservation.message, "Mesa junto a la ventana");
                assert_eq!(clear_after, Duration::from_secs(5));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }

        assert!(form.status().submitted);
        assert_eq!(form.status().message, SUBMITTED_MESSAGE);
        assert_eq!(form.fields, ReservationFields::default());
        assert_eq!(form.value(FormField::Guests), "2");
    }

    #[test]
    fn test_submit_with_default_guests() {
        let mut form = filled_form();
        assert!(accepted(form.submit()));
        assert!(form.status().submitted);
        assert_eq!(form.fields, ReservationFields::default());
    }

    #[test]
    fn test_missing_name_keeps_input() {
        let mut form = filled_form();
        form.update_field(FormField::Name, "");
        let before = form.fields.clone();

        let outcome = form.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                missing: vec![FormField::Name]
            }
        );
        assert!(!form.status().submitted);
        assert!(!form.status().message.is_empty());
        assert!(form.status().is_error());
        assert_eq!(form.fields, before);
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in FormField::REQUIRED {
            let mut form = filled_form();
            form.update_field(field, "");
            assert_eq!(
                form.submit(),
                SubmitOutcome::Rejected { missing: vec![field] }
            );
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut form = filled_form();
        form.update_field(FormField::Guests, "");
        form.update_field(FormField::Message, "");
        assert!(accepted(form.submit()));
    }

    #[test]
    fn test_empty_form_reports_all_required() {
        let mut form = ReservationForm::new();
        match form.submit() {
            SubmitOutcome::Rejected { missing } => assert_eq!(missing, FormField::REQUIRED.to_vec()),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut form = filled_form();
        form.update_field(FormField::Name, " ");
        assert!(accepted(form.submit()));
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut form = filled_form();
        form.update_field(FormField::Phone, "");
        assert!(!accepted(form.submit()));

        form.update_field(FormField::Phone, "600000000");
        assert!(accepted(form.submit()));
        assert!(form.status().submitted);
    }

    #[test]
    fn test_clear_status() {
        let mut form = filled_form();
        form.submit();
        form.update_field(FormField::Name, "Luca");

        form.clear_status();

        assert_eq!(form.status(), &FormStatus::default());
        assert_eq!(form.value(FormField::Name), "Luca");
    }

    #[test]
    fn test_update_named() {
        let mut form = ReservationForm::new();
        form.update_named("guests", "7+").unwrap();
        assert_eq!(form.value(FormField::Guests), "7+");

        let err = form.update_named("nickname", "x").unwrap_err();
        assert_eq!(err, Error::UnknownField("nickname".to_string()));
    }

    #[test]
    fn test_form_filled_by_element_names() {
        let inputs = [
            ("name", "Ana"),
            ("email", "a@b.com"),
            ("phone", "600000000"),
            ("date", "2024-01-01"),
            ("time", "20:00"),
            ("guests", "5"),
            ("message", "Cumpleaños"),
        ];

        let mut form = ReservationForm::new();
        for (name, value) in inputs {
            form.update_named(name, value).unwrap();
        }
        for field in FormField::ALL {
            assert_ne!(form.value(field), "", "{field}");
        }

        match form.submit() {
            SubmitOutcome::Accepted { reservation, .. } => {
                assert_eq!(reservation.guests, "5");
                assert_eq!(reservation.message, "Cumpleaños");
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_element_name_changes_nothing() {
        let mut form = filled_form();
        let before = form.clone();

        assert!(form.update_named("", "x").is_err());
        assert!(form.update_named("Name", "x").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert!(FormField::Date.is_required());
        assert!(!FormField::Message.is_required());
    }

    #[test]
    fn test_status_class() {
        assert_eq!(FormStatus::success().class(), "success");
        assert_eq!(FormStatus::validation_failed().class(), "error");
    }

    #[test]
    fn test_guest_options_include_default() {
        assert!(GUEST_OPTIONS.iter().any(|(value, _)| *value == DEFAULT_GUESTS));
        assert_eq!(GUEST_OPTIONS.last().map(|(value, _)| *value), Some("7+"));
    }
}
