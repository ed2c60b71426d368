//! Static catalog of bookable classrooms, grouped by floor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classroom {
    pub name: &'static str,
    pub capacity: u32,
    /// Where on the floor the room is, shown next to its name.
    pub wing: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Floor {
    /// URL segment under `/classrooms/`.
    pub slug: &'static str,
    pub label: &'static str,
    pub rooms: &'static [Classroom],
}

const fn room(name: &'static str, capacity: u32, wing: &'static str) -> Classroom {
    Classroom { name, capacity, wing }
}

pub static FLOORS: [Floor; 3] = [
    Floor {
        slug: "ground-floor",
        label: "Ground Floor",
        rooms: &[
            room("G1", 90, "right-hand side"),
            room("G2", 90, "right-hand side"),
            room("G3", 90, "right-hand side"),
            room("G4", 90, "right-hand side"),
            room("G5", 60, "left-hand side"),
            room("G6", 60, "left-hand side"),
            room("G7", 60, "left-hand side"),
            room("G8", 60, "left-hand side"),
            room("G9", 120, "centre"),
            room("G10", 120, "centre"),
        ],
    },
    Floor {
        slug: "first-floor",
        label: "First Floor",
        rooms: &[
            room("F1", 90, "right-hand side"),
            room("F2", 90, "right-hand side"),
            room("F3", 90, "right-hand side"),
            room("F4", 60, "left-hand side"),
            room("F5", 60, "left-hand side"),
            room("F6", 60, "left-hand side"),
        ],
    },
    Floor {
        slug: "ab-1",
        label: "Academic Block-1",
        rooms: &[
            room("AB1-101", 180, "seminar wing"),
            room("AB1-102", 120, "seminar wing"),
            room("AB1-201", 90, "lecture wing"),
            room("AB1-202", 90, "lecture wing"),
        ],
    },
];

pub fn find_floor(slug: &str) -> Option<&'static Floor> {
    FLOORS.iter().find(|f| f.slug == slug)
}

/// Look up a classroom by name across all floors.
pub fn find(name: &str) -> Option<&'static Classroom> {
    FLOORS
        .iter()
        .flat_map(|f| f.rooms.iter())
        .find(|r| r.name == name)
}
