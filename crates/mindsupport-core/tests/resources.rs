use mindsupport_core::models::resource::{
    Difficulty, Resource, ResourceFilter, ResourceKind, categories, count_of_kind,
    filter_resources, languages,
};

fn resource(id: &str, title: &str, kind: ResourceKind, category: &str, language: &str, tags: &[&str]) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("A guide about {}.", category.to_lowercase()),
        kind,
        category: category.to_string(),
        duration: None,
        language: language.to_string(),
        url: "#".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty: Difficulty::Beginner,
    }
}

fn library() -> Vec<Resource> {
    vec![
        resource("1", "Managing Academic Stress", ResourceKind::Video, "Academic Stress", "English", &["stress", "study"]),
        resource("2", "Mindfulness for Anxiety", ResourceKind::Audio, "Anxiety", "English", &["Meditation"]),
        resource("3", "Understanding Depression", ResourceKind::Pdf, "Depression", "English", &["awareness"]),
        resource("4", "Dormir mejor", ResourceKind::Video, "Sleep", "Spanish", &["sleep", "routine"]),
    ]
}

fn ids(found: Vec<&Resource>) -> Vec<&str> {
    found.into_iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn default_filter_keeps_everything() {
    let library = library();
    assert_eq!(ids(filter_resources(&library, &ResourceFilter::default())), ["1", "2", "3", "4"]);
}

#[test]
fn search_covers_title_description_and_tags_ignoring_case() {
    let library = library();
    let search = |query: &str| {
        let filter = ResourceFilter {
            query: query.to_string(),
            ..Default::default()
        };
        ids(filter_resources(&library, &filter))
    };

    assert_eq!(search("ANXIETY"), ["2"]);
    assert_eq!(search("guide about depression"), ["3"]);
    assert_eq!(search("meditation"), ["2"]);
    assert_eq!(search("ROUTINE"), ["4"]);
    assert!(search("nutrition").is_empty());
}

#[test]
fn facets_combine_with_search() {
    let library = library();
    let videos = ResourceFilter {
        kind: Some(ResourceKind::Video),
        ..Default::default()
    };
    assert_eq!(ids(filter_resources(&library, &videos)), ["1", "4"]);

    let spanish_videos = ResourceFilter {
        language: Some("Spanish".to_string()),
        ..videos.clone()
    };
    assert_eq!(ids(filter_resources(&library, &spanish_videos)), ["4"]);

    let mismatched = ResourceFilter {
        query: "stress".to_string(),
        category: Some("Sleep".to_string()),
        ..Default::default()
    };
    assert!(filter_resources(&library, &mismatched).is_empty());
}

#[test]
fn pickers_list_distinct_values_in_order() {
    let mut library = library();
    library.push(resource("5", "Exam Week", ResourceKind::Article, "Academic Stress", "English", &[]));
    assert_eq!(categories(&library), ["Academic Stress", "Anxiety", "Depression", "Sleep"]);
    assert_eq!(languages(&library), ["English", "Spanish"]);
    assert_eq!(count_of_kind(&library, ResourceKind::Video), 2);
    assert_eq!(count_of_kind(&library, ResourceKind::Article), 1);
}

#[test]
fn kind_serializes_as_type() {
    let json = serde_json::to_value(&library()[2]).unwrap();
    assert_eq!(json["type"], "pdf");
    assert_eq!(json["difficulty"], "beginner");
}
