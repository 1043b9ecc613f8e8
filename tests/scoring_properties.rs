//! Property tests for the scoring engine over the standard content.

use proptest::prelude::*;

use common_ground::domain::catalog::ValueCatalog;
use common_ground::domain::quiz::{Answer, QuestionBank};
use common_ground::domain::scoring::ScoringEngine;

const QUESTIONS: usize = 10;
const OPTIONS: usize = 4;

fn valid_answers() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec((0..QUESTIONS, 0..OPTIONS), 0..30)
        .prop_map(|pairs| pairs.into_iter().map(Answer::from).collect())
}

fn unknown_question_answers() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec((QUESTIONS..QUESTIONS * 10, 0..OPTIONS * 3), 1..8)
        .prop_map(|pairs| pairs.into_iter().map(Answer::from).collect())
}

proptest! {
    #[test]
    fn property_scoring_is_deterministic(answers in valid_answers()) {
        let engine = ScoringEngine::standard();
        prop_assert_eq!(engine.compute_scores(&answers), engine.compute_scores(&answers));
    }

    #[test]
    fn property_every_value_is_ranked_exactly_once(answers in valid_answers()) {
        let catalog = ValueCatalog::standard();
        let ranked = ScoringEngine::standard().compute_top_values(&answers);

        prop_assert_eq!(ranked.len(), catalog.len());
        for (position, value) in ranked.iter().enumerate() {
            prop_assert_eq!(value.rank, position + 1);
        }

        let mut ids: Vec<&str> = ranked.iter().map(|v| v.id().as_str()).collect();
        let mut expected: Vec<&str> = catalog.all_values().iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn property_ranking_descends_and_ties_keep_catalog_order(answers in valid_answers()) {
        let catalog = ValueCatalog::standard();
        let ranked = ScoringEngine::standard().compute_top_values(&answers);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(catalog.position(pair[0].id()) < catalog.position(pair[1].id()));
            }
        }
    }

    #[test]
    fn property_duplicates_score_like_their_last_answer(answers in valid_answers()) {
        let engine = ScoringEngine::standard();
        let deduped = ScoringEngine::dedup_answers(&answers);

        prop_assert!(deduped.len() <= QUESTIONS);
        prop_assert_eq!(engine.compute_top_values(&answers), engine.compute_top_values(&deduped));
    }

    #[test]
    fn property_unknown_questions_are_ignored(
        answers in valid_answers(),
        noise in unknown_question_answers(),
    ) {
        let engine = ScoringEngine::standard();
        let mut noisy = noise.clone();
        noisy.extend(answers.iter().copied());

        let clean = engine.compute_scores(&answers);
        let outcome = engine.compute_scores(&noisy);

        prop_assert_eq!(&outcome.ranked, &clean.ranked);
        let distinct_noise = ScoringEngine::dedup_answers(&noise).len();
        prop_assert_eq!(outcome.discarded.len(), distinct_noise);
    }

    #[test]
    fn property_scores_are_sums_of_chosen_weights(answers in valid_answers()) {
        let catalog = ValueCatalog::standard();
        let bank = QuestionBank::standard();
        let outcome = ScoringEngine::standard().compute_scores(&answers);
        let deduped = ScoringEngine::dedup_answers(&answers);

        for value in catalog.all_values() {
            let expected: f64 = deduped
                .iter()
                .filter_map(|answer| bank.resolve(*answer).ok())
                .filter_map(|option| option.weight_for(&value.id))
                .map(|weight| weight.value())
                .sum();

            prop_assert_eq!(outcome.score_of(&value.id), Some(expected));
        }
    }
}
