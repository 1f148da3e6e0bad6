//! Projection of stored bookings and schedules onto calendar events.

use crate::backend::BookingBackend;
use crate::error::BackendError;
use crate::slots::parse_time_slot;
use crate::types::{Booking, DateRange, Schedule};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SCHEDULE_COLOR: &str = "#6c757d";
const BOOKING_TITLE_SUFFIX: &str = "様";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Booking,
    Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProps {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_slot: Option<String>,
}

/// One entry of the calendar feed, in the shape the calendar widget expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub all_day: Option<bool>,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub border_color: Option<String>,
    pub extended_props: EventProps,
}

impl CalendarEvent {
    /// `None` if the stored time slot can't be parsed.
    pub fn from_booking(booking: &Booking) -> Option<Self> {
        let start = NaiveDateTime::new(booking.date, parse_time_slot(&booking.time_slot)?);
        let end = start + Duration::hours(1);
        Some(Self {
            title: format!("{}{BOOKING_TITLE_SUFFIX}", booking.name),
            start: start.format(DATETIME_FORMAT).to_string(),
            end: Some(end.format(DATETIME_FORMAT).to_string()),
            all_day: None,
            id: booking.id,
            background_color: None,
            border_color: None,
            extended_props: EventProps {
                kind: EventKind::Booking,
                time_slot: Some(booking.time_slot.clone()),
            },
        })
    }

    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            title: schedule.title.clone(),
            start: schedule.date.format("%Y-%m-%d").to_string(),
            end: None,
            all_day: Some(true),
            id: schedule.id,
            background_color: Some(SCHEDULE_COLOR.into()),
            border_color: Some(SCHEDULE_COLOR.into()),
            extended_props: EventProps {
                kind: EventKind::Schedule,
                time_slot: None,
            },
        }
    }
}

/// Bookings first, then schedules. Bookings with an unparsable time slot are
/// left out so the rest of the feed still renders.
pub fn calendar_events<T: BookingBackend>(
    backend: &T,
    range: DateRange,
) -> Result<Vec<CalendarEvent>, BackendError> {
    let bookings = backend.bookings(range)?;
    let schedules = backend.schedules(range)?;

    let mut events = Vec::with_capacity(bookings.len() + schedules.len());
    for booking in &bookings {
        match CalendarEvent::from_booking(booking) {
            Some(event) => events.push(event),
            None => warn!(
                booking_id = booking.id,
                time_slot = %booking.time_slot,
                "Skipping booking with invalid time slot"
            ),
        }
    }
    events.extend(schedules.iter().map(CalendarEvent::from_schedule));
    Ok(events)
}
