use mindsupport_core::models::chat_history::{ChatHistory, ChatHistoryMessage, ChatRole};
use mindsupport_core::models::screening_record::{RecordedScore, ScreeningRecord};

fn phq9_entry() -> RecordedScore {
    RecordedScore {
        instrument_id: "phq9".to_string(),
        instrument_name: "PHQ-9".to_string(),
        heading: "Depression Screening".to_string(),
        score: 9,
        max_score: 27,
        level: "Mild".to_string(),
        description: "Mild depression symptoms.".to_string(),
    }
}

#[test]
fn new_history_is_empty() {
    let history = ChatHistory::new();
    assert!(history.messages.is_empty());
    assert!(history.last().is_none());
    assert!(!history.has_crisis());
}

#[test]
fn push_appends_and_tracks_crisis() {
    let mut history = ChatHistory::new();
    history.push(ChatHistoryMessage::user("I feel hopeless"));
    let reply = history.push(ChatHistoryMessage::bot("Please call 988.", true));
    assert_eq!(reply.role, ChatRole::Bot);
    assert_eq!(history.messages.len(), 2);
    assert!(history.has_crisis());
    assert_eq!(history.updated_at, history.messages[1].timestamp);
}

#[test]
fn history_survives_json() {
    let mut history = ChatHistory::new();
    history.push(ChatHistoryMessage::user("hello"));
    let json = history.to_json().unwrap();
    let restored = ChatHistory::from_json(&json).unwrap();
    assert_eq!(restored.id, history.id);
    assert_eq!(restored.messages[0].content, "hello");
    assert_eq!(restored.messages[0].role, ChatRole::User);
}

#[test]
fn missing_crisis_flag_defaults_to_false() {
    let json = r#"{
        "id": "6f1c9d3e-2a4b-4c5d-8e7f-0a1b2c3d4e5f",
        "role": "bot",
        "content": "Hello!",
        "timestamp": "2026-01-05T10:00:00Z"
    }"#;
    let message: ChatHistoryMessage = serde_json::from_str(json).unwrap();
    assert!(!message.is_crisis);
}

#[test]
fn record_looks_up_entries_by_instrument() {
    let date = jiff::civil::date(2026, 3, 14);
    let record = ScreeningRecord::new(date, vec![phq9_entry()]);
    assert_eq!(record.entry("phq9").map(|e| e.score), Some(9));
    assert!(record.entry("gad7").is_none());

    let restored = ScreeningRecord::from_json(&record.to_json().unwrap()).unwrap();
    assert_eq!(restored.taken_on, date);
    assert_eq!(restored.entries, record.entries);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ChatHistory::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}
