use crate::backend::BookingBackend;
use crate::error::{BackendError, SlotError};
use crate::forms::{BookingForm, FormErrors};
use crate::slots::{is_well_formed_slot, parse_time_slot};
use crate::types::{Booking, NewBooking};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use validator::Validate;

/// A date and time slot that passed [`check_slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedSlot {
    pub date: NaiveDate,
    pub time_slot: String,
    pub starts_at: DateTime<Local>,
}

/// Outcome of a submitted booking form for an open slot.
#[derive(Debug)]
pub enum Submission {
    Booked(Booking),
    Invalid(BookingForm, FormErrors),
}

/// Checks date, token, past time and conflicts, in that order.
pub fn check_slot<T: BookingBackend>(
    backend: &T,
    year: i32,
    month: u32,
    day: u32,
    time_slot: &str,
    now: DateTime<Local>,
) -> Result<RequestedSlot, SlotError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(SlotError::Malformed)?;

    if !is_well_formed_slot(time_slot) {
        return Err(SlotError::Malformed);
    }

    let time = parse_time_slot(time_slot).ok_or(SlotError::Malformed)?;
    // Fails for local times skipped by a DST change
    let starts_at = Local
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .earliest()
        .ok_or(SlotError::Malformed)?;

    if starts_at < now {
        return Err(SlotError::PastTime);
    }

    if backend.slot_taken(date, time_slot)? {
        return Err(SlotError::SlotTaken);
    }

    Ok(RequestedSlot {
        date,
        time_slot: time_slot.to_string(),
        starts_at,
    })
}

/// Validates the form and stores the booking. A failed insert (e.g. the slot
/// was taken after [`check_slot`]) is reported as a non-field form error.
pub fn submit_booking<T: BookingBackend>(
    backend: &T,
    slot: &RequestedSlot,
    form: BookingForm,
) -> Submission {
    let form = form.trimmed();
    if let Err(errors) = form.validate() {
        return Submission::Invalid(form, errors.into());
    }

    let result = backend.add_booking(NewBooking {
        name: form.name.clone(),
        date: slot.date,
        time_slot: slot.time_slot.clone(),
    });
    match result {
        Ok(booking) => Submission::Booked(booking),
        Err(err) => {
            let mut errors = FormErrors::default();
            errors.add_non_field(save_failed_message(&err));
            Submission::Invalid(form, errors)
        }
    }
}

fn save_failed_message(err: &BackendError) -> String {
    format!("Failed to save the booking. {err}")
}
