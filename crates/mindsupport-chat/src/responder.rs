use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::ChatConfig;
use crate::crisis::CrisisDetector;

/// What a user message is about, as far as the keyword lists can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Topic {
    Crisis,
    Anxiety,
    Depression,
    Stress,
    Sleep,
    Relationships,
    Academic,
    General,
}

/// Checked in order; the first topic with a matching keyword wins.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Anxiety, &["anxious", "anxiety", "worried"]),
    (Topic::Depression, &["depressed", "sad", "down"]),
    (Topic::Stress, &["stress", "overwhelmed", "pressure"]),
    (Topic::Sleep, &["sleep", "insomnia", "tired"]),
    (Topic::Relationships, &["relationship", "friend", "family"]),
    (Topic::Academic, &["exam", "study", "grade", "school"]),
];

const GENERAL_REPLIES: [&str; 5] = [
    "Thank you for sharing that with me. It takes courage to talk about what you're going through. Can you tell me more about how this is affecting your daily life?",
    "I'm here to listen without judgment. Your feelings are valid, and it's okay to not be okay sometimes. What would be most helpful for you right now?",
    "It sounds like you're dealing with a lot. Remember that seeking help is a sign of strength, not weakness. What kind of support do you think would be most beneficial?",
    "I appreciate you trusting me with this. Everyone's mental health journey is unique. What coping strategies have you tried before, if any?",
    "Your wellbeing matters. Sometimes just talking about what we're going through can provide some relief. How long have you been feeling this way?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BotReply {
    pub content: String,
    pub topic: Topic,
    pub is_crisis: bool,
}

/// Produces the companion's canned replies.
#[derive(Debug, Clone)]
pub struct Responder {
    detector: CrisisDetector,
    helpline: String,
}

impl Responder {
    pub fn new(detector: CrisisDetector, helpline: impl Into<String>) -> Self {
        Self {
            detector,
            helpline: helpline.into(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            CrisisDetector::new(&config.crisis_keywords),
            config.helpline.clone(),
        )
    }

    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }

    pub fn helpline(&self) -> &str {
        &self.helpline
    }

    /// Crisis takes precedence over every other topic.
    pub fn classify(&self, text: &str) -> Topic {
        if self.detector.detect(text) {
            return Topic::Crisis;
        }
        let lower = text.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::General)
    }

    /// Reply to `text`. `turn` picks among the general replies so a
    /// conversation doesn't repeat itself while staying reproducible.
    pub fn reply(&self, text: &str, turn: usize) -> BotReply {
        let topic = self.classify(text);
        let content = match topic {
            Topic::Crisis => format!(
                "I'm very concerned about what you've shared. Your life has value and there are people who want to help. \
                 Please consider reaching out to a crisis helpline immediately at {}, or if you're in immediate danger, call 911. \
                 Would you like me to help you find local resources or schedule an appointment with a counselor?",
                self.helpline,
            ),
            Topic::Anxiety => "I hear that you're feeling anxious. That's a very common experience, especially for college students. \
                Try this breathing exercise: Breathe in for 4 counts, hold for 4, breathe out for 6. Repeat this 4 times. \
                What specific situation is making you feel anxious?"
                .to_string(),
            Topic::Depression => "I'm sorry you're feeling this way. Depression can make everything feel overwhelming, \
                but please know that these feelings can improve with support. Small steps like getting some sunlight, \
                gentle exercise, or talking to someone can help. Have you been able to maintain your daily routines?"
                .to_string(),
            Topic::Stress => "Stress is your body's natural response to challenges, but too much can be harmful. \
                Let's break this down - what's the main source of your stress right now? Sometimes creating a priority list \
                and tackling one thing at a time can help make things feel more manageable."
                .to_string(),
            Topic::Sleep => "Sleep problems are very common among students. Good sleep hygiene can really help: \
                try to go to bed at the same time each night, avoid screens 1 hour before bed, and create a relaxing bedtime routine. \
                What's your current sleep pattern like?"
                .to_string(),
            Topic::Relationships => "Relationships can be both a source of support and stress. \
                It's important to communicate openly and set healthy boundaries. What specific relationship challenge are you facing? \
                Remember, healthy relationships should make you feel supported, not drained."
                .to_string(),
            Topic::Academic => "Academic pressure is one of the top stressors for college students. \
                Remember that your worth isn't defined by your grades. Try breaking study sessions into 25-minute focused blocks \
                with 5-minute breaks. What subject or exam is causing you the most stress?"
                .to_string(),
            Topic::General => GENERAL_REPLIES[turn % GENERAL_REPLIES.len()].to_string(),
        };

        BotReply {
            content,
            topic,
            is_crisis: topic == Topic::Crisis,
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}
