//! Built-in insight content.
//!
//! The default implementation of the InsightLibrary port, holding the
//! editorial tables that ship with the app.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::ValueId;
use crate::domain::insight::BridgingKey;
use crate::ports::InsightLibrary;

const BRIDGING_MESSAGES: &[(&str, &str, &str)] = &[
    (
        "fairness",
        "freedom",
        "You value both fairness and freedom. Many Americans share this. The debate is often about how best to achieve both at once.",
    ),
    (
        "community",
        "responsibility",
        "You believe in both community and personal responsibility. This combination drives both conservative and progressive visions of a good society.",
    ),
    (
        "security",
        "compassion",
        "You want people to be both safe and cared for. Most Americans agree; they differ on which threats are most urgent and which solutions work best.",
    ),
    (
        "truth",
        "voice",
        "You want honest information and for regular people to have a say. This is foundational to democracy itself.",
    ),
    (
        "tradition",
        "opportunity",
        "You value both honoring the past and creating new possibilities. This tension has always been at the heart of the American story.",
    ),
    (
        "freedom",
        "community",
        "You believe in both individual liberty and caring for each other. The American experiment has always tried to balance these.",
    ),
    (
        "stewardship",
        "opportunity",
        "You want to protect what we have while creating new chances. Balancing these has been a challenge for every generation.",
    ),
    (
        "respect",
        "truth",
        "You value treating people with dignity and being honest. These values are essential for any real dialogue across differences.",
    ),
];

const VALUE_CONTEXT: &[(&str, &str)] = &[
    ("fairness", "90% of Americans believe everyone deserves a fair chance, regardless of political party."),
    ("freedom", "Over 85% of both Democrats and Republicans say freedom is a core American value."),
    ("community", "77% of Americans say they wish people in their community knew each other better."),
    ("security", "Both parties rank safety as a top concern, though they define threats differently."),
    ("truth", "83% of Americans say they're concerned about the spread of misinformation."),
    ("compassion", "Most Americans, regardless of party, donate time or money to help those in need."),
    ("opportunity", "The 'American Dream', the idea that anyone can succeed, is believed by majorities in both parties."),
    ("respect", "Over 90% of Americans say they want to be treated with basic dignity and respect."),
];

const DISCUSSION_PROMPTS: &[&str] = &[
    "You both value [SHARED_VALUE]. Talk about a time when that value guided a decision you made.",
    "You both care about [SHARED_VALUE]. What do you think threatens that value today?",
    "Looking at where you both value [SHARED_VALUE], can you think of something you could work on together locally?",
    "You see [SHARED_VALUE] differently in some ways. What experiences shaped how you think about it?",
    "If we agree on [SHARED_VALUE], why do you think we sometimes end up supporting different policies?",
    "What's one thing you learned about [SHARED_VALUE] from someone who votes differently than you?",
];

static BRIDGING: Lazy<HashMap<BridgingKey, &'static str>> = Lazy::new(|| {
    BRIDGING_MESSAGES
        .iter()
        .map(|(a, b, message)| (BridgingKey::pair((*a).into(), (*b).into()), *message))
        .collect()
});

static CONTEXT: Lazy<HashMap<ValueId, &'static str>> = Lazy::new(|| {
    VALUE_CONTEXT
        .iter()
        .map(|(id, context)| (ValueId::from(*id), *context))
        .collect()
});

/// Insight library backed by the built-in editorial tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticInsightLibrary;

impl StaticInsightLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl InsightLibrary for StaticInsightLibrary {
    fn bridging_message(&self, key: &BridgingKey) -> Option<String> {
        BRIDGING.get(key).map(|message| message.to_string())
    }

    fn value_context(&self, value_id: &ValueId) -> Option<String> {
        CONTEXT.get(value_id).map(|context| context.to_string())
    }

    fn discussion_prompts(&self) -> Vec<String> {
        DISCUSSION_PROMPTS.iter().map(|p| p.to_string()).collect()
    }
}
