//! The in-memory content store.
//!
//! All content ships inside the binary as JSON documents. The store
//! deserializes and validates them once at load and is read-only from
//! then on; every accessor returns references into the store.

use crate::error::{ContentError, Result};
use crate::types::{BlogPost, CategoryDetail, Photo, Skill};
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashMap, HashSet};

const SKILLS_JSON: &str = include_str!("../data/skills.json");
const PHOTOS_JSON: &str = include_str!("../data/photos.json");
const POSTS_JSON: &str = include_str!("../data/posts.json");
const CATEGORY_DETAILS_JSON: &str = include_str!("../data/category_details.json");

/// Read-only store of every filterable portfolio section.
#[derive(Debug)]
pub struct ContentStore {
    skills: Vec<Skill>,
    photos: Vec<Photo>,
    posts: Vec<BlogPost>,
    /// Side-table of extra display data, keyed by item id. Sparse:
    /// absence of an entry is a normal, non-error case.
    category_details: HashMap<String, CategoryDetail>,
}

impl ContentStore {
    /// Load and validate the bundled content.
    ///
    /// Fails only on a broken bundle (malformed JSON, duplicate ids, or
    /// a side-table entry pointing at no known item), which is a
    /// packaging bug rather than a runtime condition.
    pub fn load_bundled() -> Result<Self> {
        let skills: Vec<Skill> = parse_doc("skills.json", SKILLS_JSON)?;
        let photos: Vec<Photo> = parse_doc("photos.json", PHOTOS_JSON)?;
        let posts: Vec<BlogPost> = parse_doc("posts.json", POSTS_JSON)?;
        let category_details: HashMap<String, CategoryDetail> =
            parse_doc("category_details.json", CATEGORY_DETAILS_JSON)?;

        check_unique_ids("skills.json", skills.iter().map(|s| s.id.as_str()))?;
        check_unique_ids("photos.json", photos.iter().map(|p| p.id.as_str()))?;
        check_unique_ids("posts.json", posts.iter().map(|p| p.id.as_str()))?;

        let known_ids: HashSet<&str> = skills
            .iter()
            .map(|s| s.id.as_str())
            .chain(photos.iter().map(|p| p.id.as_str()))
            .chain(posts.iter().map(|p| p.id.as_str()))
            .collect();
        for id in category_details.keys() {
            if !known_ids.contains(id.as_str()) {
                return Err(ContentError::DanglingDetail { id: id.clone() });
            }
        }

        Ok(Self {
            skills,
            photos,
            posts,
            category_details,
        })
    }

    /// All skills, in bundle order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// All gallery photos, in bundle order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// All blog posts, in bundle order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Extra display data for an item, if any.
    pub fn category_detail(&self, id: &str) -> Option<&CategoryDetail> {
        self.category_details.get(id)
    }

    /// Distinct tag vocabulary across the skills section, sorted.
    pub fn skill_tags(&self) -> BTreeSet<&str> {
        collect_tags(self.skills.iter().map(|s| s.tags.as_slice()))
    }

    /// Distinct tag vocabulary across the photo gallery, sorted.
    pub fn photo_tags(&self) -> BTreeSet<&str> {
        collect_tags(self.photos.iter().map(|p| p.tags.as_slice()))
    }

    /// Distinct tag vocabulary across the blog, sorted.
    pub fn post_tags(&self) -> BTreeSet<&str> {
        collect_tags(self.posts.iter().map(|p| p.tags.as_slice()))
    }

    /// Item counts per section, for startup logging.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.skills.len(), self.photos.len(), self.posts.len())
    }
}

fn parse_doc<T: DeserializeOwned>(doc: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| ContentError::Malformed { doc, source })
}

fn check_unique_ids<'a>(
    doc: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                doc,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn collect_tags<'a>(tag_lists: impl Iterator<Item = &'a [String]>) -> BTreeSet<&'a str> {
    tag_lists
        .flat_map(|tags| tags.iter().map(String::as_str))
        .collect()
}
