use mindsupport_core::models::forum::{ForumPost, PostSort, list_posts, time_ago};

fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

fn post(id: &str, category: &str, at: &str, replies: u32, likes: u32, flagged: bool) -> ForumPost {
    ForumPost {
        id: id.to_string(),
        title: format!("Post {id}"),
        content: String::new(),
        author: "Anonymous".to_string(),
        timestamp: ts(at),
        category: category.to_string(),
        language: "English".to_string(),
        replies,
        likes,
        flagged,
        is_risky: false,
        tags: Vec::new(),
    }
}

fn feed() -> Vec<ForumPost> {
    vec![
        post("a", "academic-stress", "2026-03-10T09:00:00Z", 4, 10, false),
        post("b", "anxiety", "2026-03-12T09:00:00Z", 9, 2, true),
        post("c", "academic-stress", "2026-03-11T09:00:00Z", 1, 25, false),
        post("d", "loneliness", "2026-03-09T09:00:00Z", 9, 0, true),
    ]
}

fn ids(posts: Vec<&ForumPost>) -> Vec<&str> {
    posts.into_iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn newest_and_oldest() {
    let feed = feed();
    assert_eq!(ids(list_posts(&feed, None, PostSort::Newest)), ["b", "c", "a", "d"]);
    assert_eq!(ids(list_posts(&feed, None, PostSort::Oldest)), ["d", "a", "c", "b"]);
}

#[test]
fn engagement_sorts_keep_feed_order_on_ties() {
    let feed = feed();
    assert_eq!(ids(list_posts(&feed, None, PostSort::MostReplies)), ["b", "d", "a", "c"]);
    assert_eq!(ids(list_posts(&feed, None, PostSort::MostLiked)), ["c", "a", "b", "d"]);
    assert_eq!(ids(list_posts(&feed, None, PostSort::Flagged)), ["b", "d", "a", "c"]);
}

#[test]
fn category_filter_applies_before_sorting() {
    let feed = feed();
    assert_eq!(
        ids(list_posts(&feed, Some("academic-stress"), PostSort::Newest)),
        ["c", "a"]
    );
    assert!(list_posts(&feed, Some("sleep"), PostSort::Newest).is_empty());
}

#[test]
fn sort_names_match_the_frontend() {
    assert_eq!(serde_json::to_value(PostSort::MostReplies).unwrap(), "most-replies");
    let sort: PostSort = serde_json::from_str(r#""most-liked""#).unwrap();
    assert_eq!(sort, PostSort::MostLiked);
    assert_eq!(PostSort::default(), PostSort::Newest);
}

#[test]
fn time_ago_buckets() {
    let now = ts("2026-03-12T12:00:00Z");
    assert_eq!(time_ago(ts("2026-03-12T11:18:00Z"), now), "42m ago");
    assert_eq!(time_ago(ts("2026-03-12T07:00:00Z"), now), "5h ago");
    assert_eq!(time_ago(ts("2026-03-09T11:00:00Z"), now), "3d ago");
    assert_eq!(time_ago(ts("2026-03-12T12:05:00Z"), now), "0m ago");
}
