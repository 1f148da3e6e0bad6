use crate::error::BackendError;
use crate::types::{Booking, DateRange, NewBooking, NewSchedule, Schedule};
use chrono::NaiveDate;

pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn bookings(&self, range: DateRange) -> Result<Vec<Booking>, BackendError>;
    fn booking(&self, id: i32) -> Result<Booking, BackendError>;
    fn slot_taken(&self, date: NaiveDate, time_slot: &str) -> Result<bool, BackendError>;
    /// Must fail with [`BackendError::SlotTaken`] if the slot was taken in the meantime.
    fn add_booking(&self, booking: NewBooking) -> Result<Booking, BackendError>;
    fn remove_booking(&self, id: i32) -> Result<(), BackendError>;
    fn schedules(&self, range: DateRange) -> Result<Vec<Schedule>, BackendError>;
    fn add_schedule(&self, schedule: NewSchedule) -> Result<Schedule, BackendError>;
    fn remove_schedule(&self, id: i32) -> Result<(), BackendError>;
}
