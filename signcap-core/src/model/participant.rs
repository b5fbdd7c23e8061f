use chrono::{DateTime, Utc};

/// Per-room presence record for one connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Stamps the record with the current wall-clock time. An absent or empty
    /// name becomes "Guest"; clients rely on that default.
    pub fn new(name: String, email: String) -> Self {
        let name = if name.is_empty() {
            "Guest".to_string()
        } else {
            name
        };

        Self {
            name,
            email,
            joined_at: Utc::now(),
        }
    }
}
