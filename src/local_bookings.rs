use crate::{
    backend::BookingBackend,
    error::BackendError,
    types::{Booking, DateRange, NewBooking, NewSchedule, Schedule},
};
use chrono::{NaiveDate, Utc};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{error, info};

#[derive(Debug, Default)]
struct Store {
    bookings: BTreeMap<i32, Booking>,
    schedules: BTreeMap<i32, Schedule>,
    last_booking_id: i32,
    last_schedule_id: i32,
}

/// In-memory backend. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    store: Arc<Mutex<Store>>,
}

impl LocalBookings {
    fn store(&self) -> Result<MutexGuard<'_, Store>, BackendError> {
        self.store.lock().map_err(|err| {
            error!(%err, "Local booking store is poisoned");
            BackendError::Database("Local booking store is unavailable".into())
        })
    }
}

impl BookingBackend for LocalBookings {
    fn bookings(&self, range: DateRange) -> Result<Vec<Booking>, BackendError> {
        Ok(self
            .store()?
            .bookings
            .values()
            .filter(|booking| range.contains(booking.date))
            .cloned()
            .collect())
    }

    fn booking(&self, id: i32) -> Result<Booking, BackendError> {
        self.store()?
            .bookings
            .get(&id)
            .cloned()
            .ok_or(BackendError::BookingNotFound(id))
    }

    fn slot_taken(&self, date: NaiveDate, time_slot: &str) -> Result<bool, BackendError> {
        Ok(self
            .store()?
            .bookings
            .values()
            .any(|booking| booking.date == date && booking.time_slot == time_slot))
    }

    fn add_booking(&self, booking: NewBooking) -> Result<Booking, BackendError> {
        let mut store = self.store()?;
        // Checked under the same lock as the insert
        if store
            .bookings
            .values()
            .any(|other| other.date == booking.date && other.time_slot == booking.time_slot)
        {
            error!(date = %booking.date, time_slot = %booking.time_slot, "Slot was already booked");
            return Err(BackendError::SlotTaken {
                date: booking.date,
                time_slot: booking.time_slot,
            });
        }

        store.last_booking_id += 1;
        let booking = Booking {
            id: store.last_booking_id,
            name: booking.name,
            date: booking.date,
            time_slot: booking.time_slot,
            booked_at: Utc::now(),
        };
        store.bookings.insert(booking.id, booking.clone());
        info!(id = booking.id, date = %booking.date, time_slot = %booking.time_slot, "Booking added");
        Ok(booking)
    }

    fn remove_booking(&self, id: i32) -> Result<(), BackendError> {
        if self.store()?.bookings.remove(&id).is_none() {
            error!(id, "Booking does not exist and can't therefore not be removed");
            return Err(BackendError::BookingNotFound(id));
        }
        info!(id, "Booking removed");
        Ok(())
    }

    fn schedules(&self, range: DateRange) -> Result<Vec<Schedule>, BackendError> {
        Ok(self
            .store()?
            .schedules
            .values()
            .filter(|schedule| range.contains(schedule.date))
            .cloned()
            .collect())
    }

    fn add_schedule(&self, schedule: NewSchedule) -> Result<Schedule, BackendError> {
        let mut store = self.store()?;
        store.last_schedule_id += 1;
        let schedule = Schedule {
            id: store.last_schedule_id,
            title: schedule.title,
            description: schedule.description,
            date: schedule.date,
        };
        store.schedules.insert(schedule.id, schedule.clone());
        Ok(schedule)
    }

    fn remove_schedule(&self, id: i32) -> Result<(), BackendError> {
        if self.store()?.schedules.remove(&id).is_none() {
            error!(id, "Schedule does not exist and can't therefore not be removed");
            return Err(BackendError::ScheduleNotFound(id));
        }
        Ok(())
    }
}
