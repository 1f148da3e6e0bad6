use chrono::NaiveDate;
use thiserror::Error;

/// Errors reported by a [`crate::backend::BookingBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Booking {0} does not exist")]
    BookingNotFound(i32),

    #[error("Schedule {0} does not exist")]
    ScheduleNotFound(i32),

    /// The (date, time slot) pair is already taken by another booking.
    #[error("{date} {time_slot} is already booked")]
    SlotTaken { date: NaiveDate, time_slot: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BackendError::BookingNotFound(_) | BackendError::ScheduleNotFound(_)
        )
    }
}

/// Reasons a requested slot can't be booked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Invalid date or time slot token. Never shown to the user in detail.
    #[error("Malformed date or time slot")]
    Malformed,

    #[error("Past dates and times cannot be booked.")]
    PastTime,

    #[error("This time slot is already booked.")]
    SlotTaken,

    #[error(transparent)]
    Backend(#[from] BackendError),
}
