//! Booking validator tests: check ordering, slot allow-list, strength
//! brackets and the documented example requests.

mod common;

use classbook::booking::slots::{SLOT_TABLE, to_24_hour};
use classbook::booking::{Advisory, BookingRequest, Rejection, Severity, Verdict, validate};
use common::*;

#[test]
fn test_example_request_accepted_with_ground_floor_advisory() {
    let verdict = validate(&valid_request());

    assert!(verdict.is_ok());
    assert_eq!(
        verdict,
        Verdict::Accepted {
            strength: 60,
            advisory: Some(Advisory::GroundFloor)
        }
    );
    assert_eq!(verdict.severity(), Severity::Info);
    assert!(verdict.message().expect("advisory").contains("ground floor"));
}

#[test]
fn test_sunday_rejected() {
    let req = BookingRequest {
        date: SUNDAY.to_string(),
        ..valid_request()
    };

    let verdict = validate(&req);
    assert_eq!(verdict, Verdict::Rejected(Rejection::Sunday));
    assert_eq!(verdict.severity(), Severity::Error);
    assert!(verdict.message().expect("message").contains("Sundays"));
}

#[test]
fn test_sunday_rejected_regardless_of_other_fields() {
    let broken = BookingRequest {
        name: "R2D2".to_string(),
        email: String::new(),
        faculty_name: String::new(),
        date: "2024-06-16".to_string(), // also a Sunday
        start_time: "09:00 AM".to_string(),
        end_time: "09:30 AM".to_string(),
        students_strength: "999".to_string(),
        ..BookingRequest::default()
    };
    assert_eq!(validate(&broken), Verdict::Rejected(Rejection::Sunday));
}

#[test]
fn test_half_hour_slot_rejected() {
    let verdict = validate(&with_times("09:00 AM", "09:30 AM"));
    assert_eq!(verdict, Verdict::Rejected(Rejection::SlotNotAllowed));
}

#[test]
fn test_well_formed_pairs_outside_table_rejected() {
    for (start, end) in [
        ("07:30 AM", "08:30 AM"),
        ("09:00 AM", "11:30 AM"),
        ("10:00 AM", "09:00 AM"),
        ("07:00 AM", "10:00 AM"),
        ("06:00 AM", "07:00 AM"),
        ("10:00 PM", "11:30 PM"),
    ] {
        assert_eq!(
            validate(&with_times(start, end)),
            Verdict::Rejected(Rejection::SlotNotAllowed),
            "{start} - {end}"
        );
    }
}

#[test]
fn test_allowed_slots_within_time_pattern_accepted() {
    for (start, end) in [
        ("07:00 AM", "08:00 AM"),
        ("07:00 AM", "09:00 AM"),
        ("09:00 AM", "11:00 AM"),
        ("06:00 PM", "08:00 PM"),
        ("08:00 PM", "10:00 PM"),
        ("10:00 PM", "11:00 PM"),
    ] {
        assert!(validate(&with_times(start, end)).is_ok(), "{start} - {end}");
    }
}

#[test]
fn test_times_outside_hour_pattern_rejected() {
    // Listed in the slot table, but 12 and 01-05 are not accepted hours.
    for (start, end) in [("12:00 PM", "01:00 PM"), ("02:00 PM", "04:00 PM")] {
        assert_eq!(
            validate(&with_times(start, end)),
            Verdict::Rejected(Rejection::SlotNotAllowed),
            "{start} - {end}"
        );
    }
}

#[test]
fn test_24_hour_conversion() {
    assert_eq!(to_24_hour("12:00 AM").as_deref(), Some("00:00"));
    assert_eq!(to_24_hour("12:00 PM").as_deref(), Some("12:00"));
    assert_eq!(to_24_hour("01:00 PM").as_deref(), Some("13:00"));
}

#[test]
fn test_slot_table_spans_seven_to_eleven() {
    assert_eq!(SLOT_TABLE.first(), Some(&("07:00", "08:00")));
    assert!(SLOT_TABLE.contains(&("22:00", "23:00")));
    assert!(SLOT_TABLE.iter().all(|(s, e)| s < e));
}

#[test]
fn test_strength_boundaries() {
    assert_eq!(
        validate(&with_strength("181")),
        Verdict::Rejected(Rejection::StrengthExceeded)
    );
    assert_eq!(
        validate(&with_strength("180")),
        Verdict::Accepted {
            strength: 180,
            advisory: None
        }
    );

    let v121 = validate(&with_strength("121"));
    assert!(v121.is_ok());
    assert_eq!(v121.message(), None);

    assert_eq!(
        validate(&with_strength("120")),
        Verdict::Accepted {
            strength: 120,
            advisory: Some(Advisory::LargeRooms)
        }
    );
    assert_eq!(
        validate(&with_strength("91")),
        Verdict::Accepted {
            strength: 91,
            advisory: Some(Advisory::LargeRooms)
        }
    );
    assert_eq!(
        validate(&with_strength("90")),
        Verdict::Accepted {
            strength: 90,
            advisory: Some(Advisory::GroundFloor)
        }
    );
}

#[test]
fn test_out_of_range_strength_is_over_capacity() {
    for big in ["5000000000", "181.0"] {
        let verdict = validate(&with_strength(big));
        assert_eq!(
            verdict,
            Verdict::Rejected(Rejection::StrengthExceeded),
            "strength {big:?}"
        );
        assert!(verdict.message().expect("message").contains("exceeds 180"));
    }
}

#[test]
fn test_fractional_strength_within_cap_rejected() {
    assert_eq!(
        validate(&with_strength("60.5")),
        Verdict::Rejected(Rejection::InvalidStrength)
    );
}

#[test]
fn test_large_rooms_advisory_names_rooms() {
    let message = validate(&with_strength("100")).message().expect("advisory");
    assert!(message.contains("G9") && message.contains("G10"));
}

#[test]
fn test_strength_checked_after_slot() {
    let req = BookingRequest {
        students_strength: "many".to_string(),
        ..with_times("09:00 AM", "09:30 AM")
    };
    assert_eq!(validate(&req), Verdict::Rejected(Rejection::SlotNotAllowed));
}

#[test]
fn test_email_checked_before_date_format() {
    let req = BookingRequest {
        email: "asha@gmail.com".to_string(),
        date: "June 10".to_string(),
        ..valid_request()
    };
    assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidEmail));
}

#[test]
fn test_institutional_email_pattern() {
    for bad in ["", "r12345@rguktrkv.ac.in", "s123456@rguktrkv.ac.in", "r123456@rgukt.ac.in"] {
        let req = BookingRequest {
            email: bad.to_string(),
            ..valid_request()
        };
        assert_eq!(validate(&req), Verdict::Rejected(Rejection::InvalidEmail), "{bad:?}");
    }
}

#[test]
fn test_revalidation_is_idempotent() {
    let req = valid_request();
    let first = validate(&req);
    let second = validate(&req);
    assert_eq!(first, second);

    let rejected = with_strength("0");
    assert_eq!(validate(&rejected), validate(&rejected));
}
