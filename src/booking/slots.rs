//! Bookable time slots.
//!
//! A booking must cover exactly one of the pairs in [`SLOT_TABLE`]. The table
//! holds 24-hour `HH:MM` strings and requests are normalised into the same
//! form before an exact comparison, so `07:30`-`08:30` never matches even
//! though it lies inside opening hours.

/// Permitted `(start, end)` pairs in 24-hour form.
///
/// Sixteen one-hour blocks from 07:00 to 23:00, followed by the two-hour
/// blocks. `11:00`-`12:00` is the only late-morning option; it is listed once.
pub static SLOT_TABLE: [(&str, &str); 23] = [
    ("07:00", "08:00"),
    ("08:00", "09:00"),
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:00", "12:00"),
    ("12:00", "13:00"),
    ("13:00", "14:00"),
    ("14:00", "15:00"),
    ("15:00", "16:00"),
    ("16:00", "17:00"),
    ("17:00", "18:00"),
    ("18:00", "19:00"),
    ("19:00", "20:00"),
    ("20:00", "21:00"),
    ("21:00", "22:00"),
    ("22:00", "23:00"),
    ("07:00", "09:00"),
    ("09:00", "11:00"),
    ("12:00", "14:00"),
    ("14:00", "16:00"),
    ("16:00", "18:00"),
    ("18:00", "20:00"),
    ("20:00", "22:00"),
];

/// Convert a 12-hour `HH:MM AM|PM` string into zero-padded 24-hour `HH:MM`.
///
/// `12:xx AM` maps to `00:xx` and `12:xx PM` stays `12:xx`. Returns `None`
/// when the input is not of the form `<hour>:<minutes> <AM|PM>`.
pub fn to_24_hour(time: &str) -> Option<String> {
    let (clock, marker) = time.trim().split_once(' ')?;
    let (hours, minutes) = clock.split_once(':')?;

    let mut hour: u8 = hours.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    if minutes.len() != 2 || !minutes.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match marker {
        "AM" if hour == 12 => hour = 0,
        "AM" => {}
        "PM" if hour != 12 => hour += 12,
        "PM" => {}
        _ => return None,
    }

    Some(format!("{hour:02}:{minutes}"))
}

/// Whether the 12-hour pair normalises to an entry of [`SLOT_TABLE`].
pub fn is_allowed_slot(start: &str, end: &str) -> bool {
    let (Some(start), Some(end)) = (to_24_hour(start), to_24_hour(end)) else {
        return false;
    };
    SLOT_TABLE
        .iter()
        .any(|(slot_start, slot_end)| *slot_start == start && *slot_end == end)
}
