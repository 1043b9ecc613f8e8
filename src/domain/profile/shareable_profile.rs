//! ShareableProfile - the exportable bundle of a completed quiz.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::RankedValue;

/// Link included on share cards.
pub const APP_URL: &str = "https://peopleoverpartysd.com";

const SHARE_BLURB: &str = "I discovered my core values using the Common Ground Finder in the \
People Over Party app. What are yours?";

const SHARE_HASHTAGS: &str = "#PeopleOverParty #CommonGround #CivicEngagement";

/// How many values the share text and card show.
const SHARED_VALUE_COUNT: usize = 3;

/// Top values plus generated text, stamped with its creation time.
///
/// Created on demand and never mutated; there is no backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareableProfile {
    pub top_values: Vec<RankedValue>,
    pub summary: String,
    pub bridging_statement: Option<String>,
    pub context: String,
    pub created_at: Timestamp,
}

/// A (name, icon) pair shown on a share card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardValue {
    pub name: String,
    pub icon: String,
}

/// Data for rendering a social share card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCard {
    pub title: String,
    pub subtitle: String,
    pub values: Vec<CardValue>,
    pub insight: String,
    pub app_url: String,
}

impl ShareableProfile {
    /// Plain-text share payload.
    ///
    /// Names the top three values, then the bridging statement when one was
    /// found, then the app blurb and hashtags. With no top values the
    /// summary takes the place of the value list.
    pub fn share_text(&self) -> String {
        let names: Vec<&str> = self
            .top_values
            .iter()
            .take(SHARED_VALUE_COUNT)
            .map(RankedValue::name)
            .collect();

        let headline = if names.is_empty() {
            self.summary.clone()
        } else {
            format!("My Top Values: {}", names.join(", "))
        };

        let mut paragraphs = vec![headline];
        if let Some(bridging) = &self.bridging_statement {
            paragraphs.push(bridging.clone());
        }
        paragraphs.push(SHARE_BLURB.to_string());
        paragraphs.push(SHARE_HASHTAGS.to_string());

        paragraphs.join("\n\n")
    }

    /// Share card data; the insight is the bridging statement, or the
    /// summary when there is none.
    pub fn share_card(&self) -> ShareCard {
        ShareCard {
            title: "My Core Values".to_string(),
            subtitle: "Discovered with People Over Party".to_string(),
            values: self
                .top_values
                .iter()
                .take(SHARED_VALUE_COUNT)
                .map(|v| CardValue {
                    name: v.value.name.clone(),
                    icon: v.value.icon.clone(),
                })
                .collect(),
            insight: self
                .bridging_statement
                .clone()
                .unwrap_or_else(|| self.summary.clone()),
            app_url: APP_URL.to_string(),
        }
    }

    /// JSON export for the rendering layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
