use serde::{Deserialize, Serialize};

/// A booking as typed into the booking form. Values are kept exactly as
/// entered; [`super::validate`] decides whether they are acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub faculty_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub students_strength: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub classroom: String,
}

impl BookingRequest {
    /// Blank request for the given classroom, as shown by a fresh or reset form.
    pub fn for_classroom(classroom: &str) -> Self {
        Self {
            classroom: classroom.to_string(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> BookingKey {
        BookingKey {
            classroom: self.classroom.clone(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

/// Two bookings with equal keys occupy the same room at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingKey {
    pub classroom: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}
