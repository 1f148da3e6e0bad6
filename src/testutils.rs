use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
};

use chrono::NaiveDate;

use crate::{
    backend::BookingBackend,
    configuration::Configuration,
    error::BackendError,
    local_bookings::LocalBookings,
    types::{Booking, DateRange, NewBooking, NewSchedule, Schedule},
};

/// Counts calls and forwards them to an in-memory store. With `success`
/// cleared every call fails with a database error instead.
pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_bookings: AtomicU64,
    pub calls_to_booking: AtomicU64,
    pub calls_to_slot_taken: AtomicU64,
    pub calls_to_add_booking: AtomicU64,
    pub calls_to_remove_booking: AtomicU64,
    pub calls_to_schedules: AtomicU64,
    pub calls_to_add_schedule: AtomicU64,
    pub calls_to_remove_schedule: AtomicU64,
    pub store: LocalBookings,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_bookings: AtomicU64::default(),
            calls_to_booking: AtomicU64::default(),
            calls_to_slot_taken: AtomicU64::default(),
            calls_to_add_booking: AtomicU64::default(),
            calls_to_remove_booking: AtomicU64::default(),
            calls_to_schedules: AtomicU64::default(),
            calls_to_add_schedule: AtomicU64::default(),
            calls_to_remove_schedule: AtomicU64::default(),
            store: LocalBookings::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    fn record(&self, counter: &AtomicU64) -> Result<(), BackendError> {
        counter.fetch_add(1, Ordering::SeqCst);
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(BackendError::Database("Supposed to fail".into())),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings(&self, range: DateRange) -> Result<Vec<Booking>, BackendError> {
        self.record(&self.0.calls_to_bookings)?;
        self.0.store.bookings(range)
    }

    fn booking(&self, id: i32) -> Result<Booking, BackendError> {
        self.record(&self.0.calls_to_booking)?;
        self.0.store.booking(id)
    }

    fn slot_taken(&self, date: NaiveDate, time_slot: &str) -> Result<bool, BackendError> {
        self.record(&self.0.calls_to_slot_taken)?;
        self.0.store.slot_taken(date, time_slot)
    }

    fn add_booking(&self, booking: NewBooking) -> Result<Booking, BackendError> {
        self.record(&self.0.calls_to_add_booking)?;
        self.0.store.add_booking(booking)
    }

    fn remove_booking(&self, id: i32) -> Result<(), BackendError> {
        self.record(&self.0.calls_to_remove_booking)?;
        self.0.store.remove_booking(id)
    }

    fn schedules(&self, range: DateRange) -> Result<Vec<Schedule>, BackendError> {
        self.record(&self.0.calls_to_schedules)?;
        self.0.store.schedules(range)
    }

    fn add_schedule(&self, schedule: NewSchedule) -> Result<Schedule, BackendError> {
        self.record(&self.0.calls_to_add_schedule)?;
        self.0.store.add_schedule(schedule)
    }

    fn remove_schedule(&self, id: i32) -> Result<(), BackendError> {
        self.record(&self.0.calls_to_remove_schedule)?;
        self.0.store.remove_schedule(id)
    }
}

pub const ADMIN_PASSWORD: &str = "123";

#[derive(Debug, Clone)]
pub struct TestConfiguration {
    pub frontend_path: PathBuf,
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            frontend_path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/frontend/calendar.html"
            )),
        }
    }
}

impl Configuration for TestConfiguration {
    fn website_title(&self) -> String {
        "Test Booking".into()
    }

    fn admin_password(&self) -> String {
        ADMIN_PASSWORD.into()
    }

    fn calendar_template(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn database_url(&self) -> Option<String> {
        None
    }

    fn port(&self) -> String {
        "0".into()
    }
}
