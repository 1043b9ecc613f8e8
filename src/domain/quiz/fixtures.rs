//! Built-in value-surfacing questions.
//!
//! Questions reveal values without asking about policy; the framing avoids
//! partisan triggers. Every option reinforces two values at full weight.

use super::{AnswerOption, Question};
use crate::domain::foundation::Weight;

fn option(text: &str, values: &[&str]) -> AnswerOption {
    AnswerOption::reinforcing(text, values, Weight::ONE)
}

pub(super) fn value_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What's MOST important for a society to thrive?",
            vec![
                option("People looking out for each other", &["community", "compassion"]),
                option("Individual freedom to pursue your own path", &["freedom", "opportunity"]),
                option("Strong institutions and rule of law", &["security", "truth"]),
                option("A sense of shared history and values", &["tradition", "respect"]),
            ],
        )
        .revealing("community"),
        Question::new(
            "What makes you MOST proud about America?",
            vec![
                option("That we keep trying to live up to our ideals", &["fairness", "opportunity"]),
                option("Our freedom compared to other countries", &["freedom", "voice"]),
                option("How we come together in times of crisis", &["community", "compassion"]),
                option("What our founders and ancestors built", &["tradition", "stewardship"]),
            ],
        )
        .revealing("tradition"),
        Question::new(
            "What bothers you MOST about the current state of things?",
            vec![
                option("People aren't treated fairly", &["fairness", "respect"]),
                option("You can't trust what you hear", &["truth", "responsibility"]),
                option("People don't take care of each other", &["community", "compassion"]),
                option("People feel unsafe in their communities", &["security", "voice"]),
            ],
        )
        .revealing("fairness"),
        Question::new(
            "What do you MOST want for the next generation?",
            vec![
                option("A fair shot at success, no matter where they start", &["opportunity", "fairness"]),
                option("Freedom to live according to their own values", &["freedom", "respect"]),
                option("A safe and stable world", &["security", "stewardship"]),
                option("Strong communities and families", &["community", "tradition"]),
            ],
        )
        .revealing("opportunity"),
        Question::new(
            "What quality do you value MOST in a leader?",
            vec![
                option("Honesty, even when it's hard", &["truth", "responsibility"]),
                option("Stands up for people who need it", &["compassion", "fairness"]),
                option("Keeps us safe and secure", &["security", "responsibility"]),
                option("Listens to regular people, not just elites", &["voice", "respect"]),
            ],
        )
        .revealing("responsibility"),
        Question::new(
            "When someone in your community is struggling, what's the best way to help?",
            vec![
                option("Neighbors and community stepping up", &["community", "responsibility"]),
                option("Programs that give everyone a safety net", &["compassion", "security"]),
                option("Giving them the tools to help themselves", &["opportunity", "freedom"]),
                option("Churches and charities that know them personally", &["community", "tradition"]),
            ],
        )
        .revealing("compassion"),
        Question::new(
            "What's MOST worth protecting for future generations?",
            vec![
                option("The natural world: land, water, air", &["stewardship", "responsibility"]),
                option("Our rights and freedoms", &["freedom", "tradition"]),
                option("Economic opportunity and prosperity", &["opportunity", "security"]),
                option("Our culture, history, and way of life", &["tradition", "community"]),
            ],
        )
        .revealing("stewardship"),
        Question::new(
            "What makes you MOST hopeful about the future?",
            vec![
                option("Young people are engaged and care", &["voice", "stewardship"]),
                option("People are waking up to problems", &["truth", "responsibility"]),
                option("We've overcome hard times before", &["tradition", "community"]),
                option("There are still good people everywhere", &["compassion", "respect"]),
            ],
        )
        .revealing("voice"),
        Question::new(
            "What frustrates you MOST about politics today?",
            vec![
                option("No one listens to each other anymore", &["respect", "community"]),
                option("Regular people's voices don't matter", &["voice", "fairness"]),
                option("You can't tell what's true anymore", &["truth", "responsibility"]),
                option("Nothing ever actually gets better", &["opportunity", "security"]),
            ],
        )
        .revealing("truth"),
        Question::new(
            "What MOST defines a good neighbor?",
            vec![
                option("They help when you need it", &["compassion", "community"]),
                option("They respect your privacy and property", &["respect", "freedom"]),
                option("They're honest and trustworthy", &["truth", "responsibility"]),
                option("They look out for the whole community", &["security", "stewardship"]),
            ],
        )
        .revealing("respect"),
    ]
}
