//! Booking request validation.
//!
//! Checks run in a fixed order and the first failing one decides the verdict:
//!
//! 1. the date is not a Sunday
//! 2. requester name
//! 3. faculty name
//! 4. institutional email
//! 5. date format
//! 6. time slot
//! 7. students strength is a positive number
//! 8. students strength is at most [`MAX_STRENGTH`]
//!
//! An accepted request may carry an [`Advisory`] suggesting suitable rooms.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

use super::request::BookingRequest;
use super::slots;

/// Largest group a regular classroom can take.
pub const MAX_STRENGTH: u8 = 180;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("NAME_RE is a valid regex literal"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r[0-9]{6}@rguktrkv\.ac\.in$").expect("EMAIL_RE is a valid regex literal")
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("DATE_RE is a valid regex literal"));

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[6-9]|1[0-1]):[0-5][0-9] [AP]M$").expect("TIME_RE is a valid regex literal")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

impl Severity {
    /// Alert variant used by the templates.
    pub fn variant(self) -> &'static str {
        match self {
            Severity::Error => "danger",
            Severity::Info => "info",
        }
    }
}

/// Broad class of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A field does not have the expected shape.
    FieldFormat,
    /// Well-formed input that breaks a booking rule.
    BusinessRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Sunday,
    InvalidName,
    InvalidFacultyName,
    InvalidEmail,
    InvalidDate,
    SlotNotAllowed,
    InvalidStrength,
    StrengthExceeded,
}

impl Rejection {
    pub fn category(self) -> Category {
        match self {
            Rejection::Sunday | Rejection::SlotNotAllowed | Rejection::StrengthExceeded => {
                Category::BusinessRule
            }
            _ => Category::FieldFormat,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::Sunday => "Classroom cannot be booked on Sundays.",
            Rejection::InvalidName => "Name should not be empty and should only contain letters.",
            Rejection::InvalidFacultyName => {
                "Faculty name should not be empty and should only contain letters."
            }
            Rejection::InvalidEmail => "The email should start with r and end with @rguktrkv.ac.in",
            Rejection::InvalidDate => "Please enter a valid date in the format YYYY-MM-DD.",
            Rejection::SlotNotAllowed => {
                "The class can only be booked between 6:00 AM and 11:00 PM and for a maximum of 2 hours."
            }
            Rejection::InvalidStrength => "Student strength should be a positive number.",
            Rejection::StrengthExceeded => {
                "Student strength exceeds 180. Please choose the big seminar hall."
            }
        };
        f.write_str(msg)
    }
}

/// Room suggestion attached to an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// 90 students or fewer.
    GroundFloor,
    /// 91 to 120 students.
    LargeRooms,
}

impl Advisory {
    fn for_strength(strength: u8) -> Option<Self> {
        match strength {
            0..=90 => Some(Advisory::GroundFloor),
            91..=120 => Some(Advisory::LargeRooms),
            _ => None,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Advisory::GroundFloor => {
                "For student strength 90 or below, please choose classrooms on the ground floor, right-hand side."
            }
            Advisory::LargeRooms => {
                "For student strength between 90 and 120, please choose G9 or G10 classes for booking."
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted {
        strength: u8,
        advisory: Option<Advisory>,
    },
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// Text to show the user, if any. Accepted requests without an advisory
    /// have nothing to say.
    pub fn message(&self) -> Option<String> {
        match self {
            Verdict::Accepted { advisory, .. } => advisory.map(|a| a.to_string()),
            Verdict::Rejected(r) => Some(r.to_string()),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Verdict::Accepted { .. } => Severity::Info,
            Verdict::Rejected(_) => Severity::Error,
        }
    }
}

/// Run every check against `request` and return the first failure, or the
/// acceptance with its advisory.
pub fn validate(request: &BookingRequest) -> Verdict {
    match check(request) {
        Ok(strength) => Verdict::Accepted {
            strength,
            advisory: Advisory::for_strength(strength),
        },
        Err(rejection) => Verdict::Rejected(rejection),
    }
}

fn check(request: &BookingRequest) -> Result<u8, Rejection> {
    if is_sunday(&request.date) {
        return Err(Rejection::Sunday);
    }
    if !is_letters(&request.name) {
        return Err(Rejection::InvalidName);
    }
    if !is_letters(&request.faculty_name) {
        return Err(Rejection::InvalidFacultyName);
    }
    if request.email.trim().is_empty() || !EMAIL_RE.is_match(&request.email) {
        return Err(Rejection::InvalidEmail);
    }
    if parse_date(&request.date).is_none() {
        return Err(Rejection::InvalidDate);
    }
    if !is_valid_time(&request.start_time)
        || !is_valid_time(&request.end_time)
        || !slots::is_allowed_slot(&request.start_time, &request.end_time)
    {
        return Err(Rejection::SlotNotAllowed);
    }

    parse_strength(&request.students_strength)
}

/// Unparseable dates are not Sundays; the format check reports them later.
fn is_sunday(date: &str) -> bool {
    parse_date(date).is_some_and(|d| d.weekday() == Weekday::Sun)
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn is_letters(value: &str) -> bool {
    !value.trim().is_empty() && NAME_RE.is_match(value)
}

fn is_valid_time(value: &str) -> bool {
    !value.trim().is_empty() && TIME_RE.is_match(value)
}

/// Any number above the cap is over capacity whatever its shape; at or
/// below it the count must be a whole positive number.
fn parse_strength(value: &str) -> Result<u8, Rejection> {
    let n: f64 = value.trim().parse().map_err(|_| Rejection::InvalidStrength)?;
    if !n.is_finite() || n <= 0.0 {
        return Err(Rejection::InvalidStrength);
    }
    if n > f64::from(MAX_STRENGTH) {
        return Err(Rejection::StrengthExceeded);
    }
    if n.fract() != 0.0 {
        return Err(Rejection::InvalidStrength);
    }
    Ok(n as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday_request() -> BookingRequest {
        BookingRequest {
            name: "Asha Rao".to_string(),
            email: "r123456@rguktrkv.ac.in".to_string(),
            section: "CSE-A".to_string(),
            subject: "DBMS".to_string(),
            faculty_name: "Ravi Kumar".to_string(),
            date: "2024-06-10".to_string(),
            start_time: "09:00 AM".to_string(),
            end_time: "10:00 AM".to_string(),
            students_strength: "60".to_string(),
            description: "Lab review".to_string(),
            classroom: "G1".to_string(),
        }
    }

    #[test]
    fn sunday_wins_over_other_failures() {
        let req = BookingRequest {
            date: "2024-06-09".to_string(),
            name: String::new(),
            email: "nobody@example.com".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::Sunday));
    }

    #[test]
    fn malformed_date_is_reported_after_identity_fields() {
        let req = BookingRequest {
            date: "10/06/2024".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidDate));

        let req = BookingRequest {
            date: "2024-02-30".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidDate));
    }

    #[test]
    fn names_must_be_letters_and_spaces() {
        let req = BookingRequest {
            name: "   ".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidName));

        let req = BookingRequest {
            faculty_name: "Dr. Rao".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidFacultyName));
    }

    #[test]
    fn time_outside_pattern_is_rejected() {
        let req = BookingRequest {
            start_time: "9:00 AM".to_string(),
            ..monday_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::SlotNotAllowed));
    }

    #[test]
    fn strength_must_be_positive_integer() {
        for bad in ["", "abc", "0", "-5", "12.5", "NaN", "inf"] {
            let req = BookingRequest {
                students_strength: bad.to_string(),
                ..monday_request()
            };
            assert_eq!(
                validate(&req),
                Verdict::Rejected(Rejection::InvalidStrength),
                "strength {bad:?}"
            );
        }
    }

    #[test]
    fn any_number_over_cap_is_exceeded() {
        for big in ["181", "181.0", "4294967296", "5000000000", "1e9"] {
            let req = BookingRequest {
                students_strength: big.to_string(),
                ..monday_request()
            };
            assert_eq!(
                validate(&req),
                Verdict::Rejected(Rejection::StrengthExceeded),
                "strength {big:?}"
            );
        }
    }

    #[test]
    fn categories() {
        assert_eq!(Rejection::Sunday.category(), Category::BusinessRule);
        assert_eq!(Rejection::StrengthExceeded.category(), Category::BusinessRule);
        assert_eq!(Rejection::InvalidEmail.category(), Category::FieldFormat);
    }

    #[test]
    fn severity_maps_to_alert_variant() {
        assert_eq!(validate(&monday_request()).severity().variant(), "info");
        assert_eq!(Verdict::Rejected(Rejection::Sunday).severity().variant(), "danger");
    }
}
