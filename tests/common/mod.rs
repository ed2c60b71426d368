//! Shared test fixtures for booking tests.
#![allow(dead_code)]

use classbook::booking::{BookingRequest, Identity};

pub const MONDAY: &str = "2024-06-10";
pub const SUNDAY: &str = "2024-06-09";
pub const TEST_USER_ID: i64 = 7;

/// The canonical valid request: a Monday morning slot in G1 for 60 students.
pub fn valid_request() -> BookingRequest {
    BookingRequest {
        name: "Asha Rao".to_string(),
        email: "r123456@rguktrkv.ac.in".to_string(),
        section: "CSE-A".to_string(),
        subject: "DBMS".to_string(),
        faculty_name: "Ravi Kumar".to_string(),
        date: MONDAY.to_string(),
        start_time: "09:00 AM".to_string(),
        end_time: "10:00 AM".to_string(),
        students_strength: "60".to_string(),
        description: "Unit test review".to_string(),
        classroom: "G1".to_string(),
    }
}

pub fn with_strength(strength: &str) -> BookingRequest {
    BookingRequest {
        students_strength: strength.to_string(),
        ..valid_request()
    }
}

pub fn with_times(start: &str, end: &str) -> BookingRequest {
    BookingRequest {
        start_time: start.to_string(),
        end_time: end.to_string(),
        ..valid_request()
    }
}

pub fn identity() -> Identity {
    Identity {
        user_id: TEST_USER_ID,
    }
}
