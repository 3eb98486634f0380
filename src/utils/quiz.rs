use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::models::question::Question;

/// Picks the next quiz question.
///
/// Candidates already in `previous` are dropped and one of the remaining ones is
/// drawn uniformly. `None` means every candidate has been asked (quiz complete).
pub fn select_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();

    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn question(id: i64) -> Question {
        Question {
            id,
            question: Some(format!("Question {id}")),
            answer: Some("A".to_string()),
            category: Some(1),
            difficulty: Some(1),
        }
    }

    #[test]
    fn never_returns_a_previous_question() {
        let candidates: Vec<Question> = (1..=10).map(question).collect();
        let previous = [1, 2, 3, 5, 8];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let picked = select_question(&candidates, &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_candidates_complete_the_quiz() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(select_question(&candidates, &[1, 2, 3], &mut rng).is_none());
        assert!(select_question(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn single_remaining_question_is_always_chosen() {
        let candidates: Vec<Question> = (1..=4).map(question).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let picked = select_question(&candidates, &[1, 2, 4], &mut rng).unwrap();
            assert_eq!(picked.id, 3);
        }
    }

    #[test]
    fn unknown_previous_ids_are_ignored() {
        let candidates: Vec<Question> = (1..=2).map(question).collect();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(select_question(&candidates, &[99, 100], &mut rng).is_some());
    }

    #[test]
    fn every_remaining_question_gets_drawn() {
        let candidates: Vec<Question> = (1..=5).map(question).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            seen.insert(select_question(&candidates, &[2], &mut rng).unwrap().id);
        }
        assert_eq!(seen, HashSet::from([1, 3, 4, 5]));
    }
}
