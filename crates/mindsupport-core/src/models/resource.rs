use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A self-help item in the resource library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: String,
    pub duration: Option<String>,
    pub language: String,
    pub url: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceKind {
    Video,
    Audio,
    Pdf,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Library search criteria. `None` on a facet means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResourceFilter {
    /// Case-insensitive substring of the title, description, or any tag.
    #[serde(default)]
    pub query: String,
    pub kind: Option<ResourceKind>,
    pub language: Option<String>,
    pub category: Option<String>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = resource.title.to_lowercase().contains(&query)
            || resource.description.to_lowercase().contains(&query)
            || resource
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&query));

        matches_search
            && self.kind.is_none_or(|k| resource.kind == k)
            && self.language.as_ref().is_none_or(|l| &resource.language == l)
            && self.category.as_ref().is_none_or(|c| &resource.category == c)
    }
}

/// Resources matching `filter`, in library order.
pub fn filter_resources<'a>(resources: &'a [Resource], filter: &ResourceFilter) -> Vec<&'a Resource> {
    resources.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct categories in first-seen order, for the category picker.
pub fn categories(resources: &[Resource]) -> Vec<&str> {
    distinct(resources.iter().map(|r| r.category.as_str()))
}

/// Distinct languages in first-seen order.
pub fn languages(resources: &[Resource]) -> Vec<&str> {
    distinct(resources.iter().map(|r| r.language.as_str()))
}

pub fn count_of_kind(resources: &[Resource], kind: ResourceKind) -> usize {
    resources.iter().filter(|r| r.kind == kind).count()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
