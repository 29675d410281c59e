use mindsupport_chat::crisis::CrisisDetector;
use mindsupport_chat::responder::{Responder, Topic};

#[test]
fn crisis_outranks_every_topic() {
    let responder = Responder::default();
    let reply = responder.reply("I'm so stressed about exams I feel hopeless", 0);
    assert_eq!(reply.topic, Topic::Crisis);
    assert!(reply.is_crisis);
    assert!(reply.content.contains("988"));
    assert!(reply.content.contains("911"));
}

#[test]
fn topics_follow_keyword_precedence() {
    let responder = Responder::default();
    assert_eq!(responder.classify("I'm really ANXIOUS today"), Topic::Anxiety);
    assert_eq!(responder.classify("feeling sad lately"), Topic::Depression);
    assert_eq!(responder.classify("so much pressure before the exam"), Topic::Stress);
    assert_eq!(responder.classify("I can't sleep"), Topic::Sleep);
    assert_eq!(responder.classify("fight with my friend"), Topic::Relationships);
    assert_eq!(responder.classify("my grade in chemistry"), Topic::Academic);
    assert_eq!(responder.classify("hello there"), Topic::General);
    // Anxiety is checked before sleep.
    assert_eq!(responder.classify("worried I'm always tired"), Topic::Anxiety);
}

#[test]
fn general_replies_rotate_by_turn() {
    let responder = Responder::default();
    let first = responder.reply("hi", 0);
    let second = responder.reply("hi", 1);
    let wrapped = responder.reply("hi", 5);
    assert_eq!(first.topic, Topic::General);
    assert!(!first.is_crisis);
    assert_ne!(first.content, second.content);
    assert_eq!(first.content, wrapped.content);
}

#[test]
fn replies_are_deterministic() {
    let responder = Responder::default();
    assert_eq!(responder.reply("I'm worried", 3), responder.reply("I'm worried", 3));
}

#[test]
fn custom_helpline_and_keywords() {
    let responder = Responder::new(CrisisDetector::new(["give up"]), "116 123");
    assert_eq!(responder.helpline(), "116 123");
    let reply = responder.reply("I want to give up", 0);
    assert!(reply.is_crisis);
    assert!(reply.content.contains("116 123"));
    assert!(!responder.reply("suicide", 0).is_crisis);
}
