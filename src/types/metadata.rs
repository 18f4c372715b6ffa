//! Scrape metadata and its first-wins merge policy.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about one scrape of a course page.
///
/// Every field is a plain string defaulting to `""`; probes routinely
/// omit fields they cannot see. The merge policy is first-non-empty-wins
/// across the priority-ordered source list: once a field has a value,
/// later sources never overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO-8601 timestamp, stamped once per scrape invocation.
    #[serde(default)]
    pub scraped_at: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub lesson: String,
    #[serde(default)]
    pub path: String,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lesson = lesson.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Merge another metadata record into this one, field by field.
    ///
    /// A field is taken from `other` only if it is non-empty there and
    /// still empty here.
    pub fn merge_from(&mut self, other: &Metadata) {
        merge_field(&mut self.scraped_at, &other.scraped_at);
        merge_field(&mut self.url, &other.url);
        merge_field(&mut self.course, &other.course);
        merge_field(&mut self.lesson, &other.lesson);
        merge_field(&mut self.path, &other.path);
    }

    /// True if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.scraped_at.is_empty()
            && self.url.is_empty()
            && self.course.is_empty()
            && self.lesson.is_empty()
            && self.path.is_empty()
    }
}

fn merge_field(target: &mut String, candidate: &str) {
    if target.is_empty() && !candidate.is_empty() {
        *target = candidate.to_string();
    }
}
