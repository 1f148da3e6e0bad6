use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref AVAILABLE_TIME_SLOTS: Vec<&'static str> = vec![
        "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
        "19:00",
    ];
    static ref SLOT_TOKEN: Regex = Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap();
}

/// Bookable slots, in display order. Each one covers one hour.
pub fn available_time_slots() -> &'static [&'static str] {
    &AVAILABLE_TIME_SLOTS
}

pub fn available_time_slots_json() -> String {
    serde_json::to_string(available_time_slots()).unwrap_or_else(|_| "[]".into())
}

/// Shape check only: `HH:MM` with ASCII digits. "25:00" passes here.
pub fn is_well_formed_slot(token: &str) -> bool {
    SLOT_TOKEN.is_match(token)
}

/// Parses `H:M` into a time of day. Both parts must be plain unsigned
/// integers and form a valid hour and minute.
pub fn parse_time_slot(token: &str) -> Option<NaiveTime> {
    let (hour, minute) = token.split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
