use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A peer-support forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp: jiff::Timestamp,
    pub category: String,
    pub language: String,
    pub replies: u32,
    pub likes: u32,
    /// Reported by a member and awaiting moderation.
    pub flagged: bool,
    /// Marked by moderators as touching on self-harm or crisis topics.
    pub is_risky: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PostSort {
    #[default]
    Newest,
    Oldest,
    MostReplies,
    MostLiked,
    /// Flagged posts first, for moderators.
    Flagged,
}

/// Posts in `category` (all posts when `None`), ordered by `sort`.
///
/// The sort is stable: posts that compare equal keep their feed order.
pub fn list_posts<'a>(posts: &'a [ForumPost], category: Option<&str>, sort: PostSort) -> Vec<&'a ForumPost> {
    let mut listed: Vec<&ForumPost> = posts
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();

    match sort {
        PostSort::Newest => listed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        PostSort::Oldest => listed.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        PostSort::MostReplies => listed.sort_by(|a, b| b.replies.cmp(&a.replies)),
        PostSort::MostLiked => listed.sort_by(|a, b| b.likes.cmp(&a.likes)),
        PostSort::Flagged => listed.sort_by(|a, b| b.flagged.cmp(&a.flagged)),
    }
    listed
}

/// Compact age label: `42m ago`, `5h ago`, `3d ago`.
pub fn time_ago(timestamp: jiff::Timestamp, now: jiff::Timestamp) -> String {
    let minutes = now.duration_since(timestamp).as_secs().max(0) / 60;
    if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}
