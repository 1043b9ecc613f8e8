//! Built-in core values.
//!
//! These values are shared across the political spectrum, though they are
//! prioritized and expressed differently. Declaration order is the catalog
//! order and therefore the scoring tie-break order.

use super::CoreValue;
use crate::domain::foundation::ValueId;

fn value(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    left_frame: &str,
    right_frame: &str,
    common_ground: &str,
) -> CoreValue {
    CoreValue {
        id: ValueId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        left_frame: left_frame.to_string(),
        right_frame: right_frame.to_string(),
        common_ground: common_ground.to_string(),
    }
}

pub(super) fn core_values() -> Vec<CoreValue> {
    vec![
        value(
            "fairness",
            "Fairness",
            "scale.3d",
            "Everyone should be treated justly and given a fair chance.",
            "Everyone deserves equal opportunity, and systems should be changed when they produce unequal outcomes.",
            "People should be judged by their actions and effort, not given advantages based on group membership.",
            "We all want a society where hard work is rewarded and no one is held back unfairly.",
        ),
        value(
            "freedom",
            "Freedom",
            "bird.fill",
            "People should be free to live their lives as they choose.",
            "Freedom from oppression, discrimination, and systems that limit human potential.",
            "Freedom from government overreach and the ability to make your own choices.",
            "We all believe individuals should have maximum control over their own lives.",
        ),
        value(
            "security",
            "Safety & Security",
            "shield.fill",
            "People deserve to feel safe in their homes and communities.",
            "Security means healthcare, housing stability, and protection from hate.",
            "Security means strong borders, law enforcement, and national defense.",
            "We all want to protect our families and communities from harm.",
        ),
        value(
            "community",
            "Community",
            "person.3.fill",
            "We're stronger together than alone.",
            "Society has an obligation to care for all its members, especially the vulnerable.",
            "Strong families, churches, and local organizations are the backbone of society.",
            "We all believe in taking care of each other and looking out for our neighbors.",
        ),
        value(
            "responsibility",
            "Personal Responsibility",
            "figure.stand",
            "People should take ownership of their choices and actions.",
            "Those with more should give more; we're responsible to society.",
            "Success comes from hard work; people should earn their own way.",
            "We all believe in working hard and being accountable for our actions.",
        ),
        value(
            "respect",
            "Respect & Dignity",
            "hand.raised.fill",
            "Every person deserves to be treated with basic respect.",
            "Respecting identity, culture, and lived experience.",
            "Respecting tradition, earned authority, and different viewpoints.",
            "We all want to be treated with dignity and extend that to others.",
        ),
        value(
            "truth",
            "Truth & Honesty",
            "checkmark.seal.fill",
            "Honesty matters, and people should be able to trust information.",
            "Science, facts, and expertise should guide policy decisions.",
            "People and institutions should be honest; skepticism of elites is healthy.",
            "We all want to know the truth and make decisions based on honest information.",
        ),
        value(
            "opportunity",
            "Opportunity",
            "arrow.up.right",
            "Everyone should have a chance to build a good life.",
            "Systems should ensure everyone has access to education, jobs, and upward mobility.",
            "Government shouldn't pick winners; the free market creates opportunity.",
            "We all want our children to have the chance to do better than we did.",
        ),
        value(
            "tradition",
            "Heritage & Tradition",
            "clock.arrow.circlepath",
            "The wisdom of the past has value.",
            "Honoring the struggles of those who came before us.",
            "Preserving the institutions and values that made America great.",
            "We all value learning from history and honoring those who built what we have.",
        ),
        value(
            "compassion",
            "Compassion",
            "heart.fill",
            "We should care about the suffering of others.",
            "Government programs should help those in need.",
            "Charity and community support are the best way to help people.",
            "We all feel called to help those who are struggling.",
        ),
        value(
            "stewardship",
            "Stewardship",
            "leaf.fill",
            "We should take care of what we've been given.",
            "Protecting the environment for future generations.",
            "Responsible use of resources; conservation through ownership.",
            "We all want to leave the world better than we found it for our children.",
        ),
        value(
            "voice",
            "Having a Voice",
            "megaphone.fill",
            "People deserve to be heard and have a say in decisions that affect them.",
            "Every vote should count equally; marginalized voices need amplification.",
            "Local control matters; people closest to problems should decide.",
            "We all believe citizens should have a real say in how they're governed.",
        ),
    ]
}
