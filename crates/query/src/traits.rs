//! The trait seam between the engine and the content domains.
//!
//! The engine filters and sorts anything that can describe itself through
//! `Queryable`; the three bundled domains (skills, photos, posts)
//! implement it here so the engine stays generic.

use content::{BlogPost, Photo, Proficiency, Skill};

/// A candidate item the engine can filter and sort.
///
/// Implementations are plain accessors; the engine never mutates items
/// and only holds references for the duration of a single call.
pub trait Queryable {
    /// Unique id, stable for the session.
    fn id(&self) -> &str;

    /// Display name, target of the substring search.
    fn name(&self) -> &str;

    /// Categorical tags used for inclusion filtering.
    fn tags(&self) -> &[String];

    /// Ranked attribute, if this domain has one. Domains without a rank
    /// (photos, posts) return `None` and are excluded by a non-empty
    /// level filter.
    fn rank(&self) -> Option<Proficiency>;

    /// Numeric or temporal attribute used as a descending sort key:
    /// years of experience, view count, or publish timestamp.
    fn weight(&self) -> f64;
}

impl Queryable for Skill {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn rank(&self) -> Option<Proficiency> {
        Some(self.proficiency)
    }

    fn weight(&self) -> f64 {
        f64::from(self.years)
    }
}

impl Queryable for Photo {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn rank(&self) -> Option<Proficiency> {
        None
    }

    fn weight(&self) -> f64 {
        f64::from(self.view_count)
    }
}

impl Queryable for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn rank(&self) -> Option<Proficiency> {
        None
    }

    fn weight(&self) -> f64 {
        self.published as f64
    }
}
