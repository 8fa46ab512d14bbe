//! Record shapes for the data-driven sections the platform will grow into.
//!
//! Nothing on the landing page constructs these yet. They pin down the
//! contract for profiles, the job board, the learning center and tech news,
//! so a future content source can be deserialized straight into them.
//!
//! Every field is a plain string, which keeps the JSON form flat:
//!
//! ```rust
//! use seagro_site::types::Job;
//!
//! let job: Job = serde_json::from_str(
//!     r#"{"id":"j1","title":"Rust Engineer","company":"SeaGro","location":"Remote","type":"full-time","description":"Build things"}"#,
//! ).unwrap();
//! assert_eq!(job.kind, "full-time");
//! ```

use serde::{Deserialize, Serialize};

/// A community member profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Job title or community role
    pub role: String,
    /// Short biography
    pub bio: String,
}

/// A job board posting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Stable identifier
    pub id: String,
    /// Position title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Office location or "Remote"
    pub location: String,
    /// Employment type ("full-time", "contract", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description
    pub description: String,
}

/// A learning center course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable identifier
    pub id: String,
    /// Course title
    pub title: String,
    /// Instructor name
    pub instructor: String,
    /// Human-readable duration ("6 weeks")
    pub duration: String,
    /// Difficulty level
    pub level: String,
    /// Thumbnail image URL
    pub thumbnail: String,
}

/// A tech news entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stable identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// One-paragraph summary
    pub summary: String,
    /// Publication date as displayed
    pub date: String,
    /// Lead image URL
    pub image: String,
}
