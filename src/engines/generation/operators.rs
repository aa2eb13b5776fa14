use crate::engines::generation::alphabet::Alphabet;
use crate::engines::generation::genome::{Candidate, Target};
use rand::Rng;

/// Roulette wheel selection: probability proportional to score.
///
/// Returns an index into `scores`. When every score is zero the wheel has no
/// area, so the pick falls back to a uniform choice.
pub fn roulette_selection<R: Rng>(scores: &[usize], rng: &mut R) -> usize {
    let total: usize = scores.iter().sum();

    if total == 0 {
        return rng.gen_range(0..scores.len());
    }

    let spin = rng.gen_range(0..total);
    let mut cumulative = 0;

    for (i, &score) in scores.iter().enumerate() {
        cumulative += score;
        if spin < cumulative {
            return i;
        }
    }

    // Unreachable while spin < total
    scores.len() - 1
}

/// Tournament selection: best of K uniformly drawn candidates
pub fn tournament_selection<R: Rng>(
    scores: &[usize],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    let mut best_idx = rng.gen_range(0..scores.len());
    let mut best_score = scores[best_idx];

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..scores.len());
        if scores[idx] > best_score {
            best_idx = idx;
            best_score = scores[idx];
        }
    }

    best_idx
}

/// Uniform index in `0..len` other than `exclude`; needs `len >= 2`.
fn uniform_excluding<R: Rng>(len: usize, exclude: usize, rng: &mut R) -> usize {
    let idx = rng.gen_range(0..len - 1);
    if idx >= exclude { idx + 1 } else { idx }
}

/// Roulette selection of a mate for `exclude`.
///
/// The excluded candidate's share is removed from the wheel. When nothing
/// else has a positive score the pick is uniform among the others.
pub fn roulette_selection_excluding<R: Rng>(
    scores: &[usize],
    exclude: usize,
    rng: &mut R,
) -> usize {
    if scores.len() < 2 {
        return exclude;
    }

    let total: usize = scores.iter().sum::<usize>() - scores[exclude];

    if total == 0 {
        return uniform_excluding(scores.len(), exclude, rng);
    }

    let spin = rng.gen_range(0..total);
    let mut cumulative = 0;

    for (i, &score) in scores.iter().enumerate() {
        if i == exclude {
            continue;
        }
        cumulative += score;
        if spin < cumulative {
            return i;
        }
    }

    // Unreachable while spin < total
    uniform_excluding(scores.len(), exclude, rng)
}

/// Tournament selection of a mate for `exclude`: contestants never include it
pub fn tournament_selection_excluding<R: Rng>(
    scores: &[usize],
    tournament_size: usize,
    exclude: usize,
    rng: &mut R,
) -> usize {
    if scores.len() < 2 {
        return exclude;
    }

    let mut best_idx = uniform_excluding(scores.len(), exclude, rng);
    let mut best_score = scores[best_idx];

    for _ in 1..tournament_size {
        let idx = uniform_excluding(scores.len(), exclude, rng);
        if scores[idx] > best_score {
            best_idx = idx;
            best_score = scores[idx];
        }
    }

    best_idx
}

/// Single-point crossover: swap tails after a random cut
pub fn crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> (Candidate, Candidate) {
    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1.chars_mut()[point..len].copy_from_slice(&parent2.chars()[point..len]);
    child2.chars_mut()[point..len].copy_from_slice(&parent1.chars()[point..len]);

    (child1, child2)
}

/// Target-guided crossover: each child keeps its own parent's correct
/// characters and borrows every other position from the other parent.
pub fn target_guided_crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    target: &Target,
) -> (Candidate, Candidate) {
    let pick = |own: &Candidate, other: &Candidate| -> Candidate {
        let chars = own
            .chars()
            .iter()
            .zip(other.chars())
            .zip(target.chars())
            .map(|((&mine, &theirs), &wanted)| if mine == wanted { mine } else { theirs })
            .collect();
        Candidate::from_chars(chars)
    };

    (pick(parent1, parent2), pick(parent2, parent1))
}

/// Mutation: independently redraw each character with probability `mutation_rate`
pub fn mutate<R: Rng>(
    candidate: &mut Candidate,
    mutation_rate: f64,
    alphabet: &Alphabet,
    rng: &mut R,
) {
    for c in candidate.chars_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *c = alphabet.sample(rng);
        }
    }
}

/// Generate random candidate
pub fn random_candidate<R: Rng>(
    length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Candidate {
    Candidate::from_chars((0..length).map(|_| alphabet.sample(rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc() -> Alphabet {
        Alphabet::new("ABC".chars()).unwrap()
    }

    #[test]
    fn test_roulette_skips_zero_scores() {
        let mut rng = StdRng::seed_from_u64(1);
        let scores = [0, 3, 0, 1];

        for _ in 0..500 {
            let idx = roulette_selection(&scores, &mut rng);
            assert!(idx == 1 || idx == 3, "picked zero-score index {}", idx);
        }
    }

    #[test]
    fn test_roulette_is_proportional() {
        let mut rng = StdRng::seed_from_u64(2);
        let scores = [1, 3];
        let picks = (0..4000)
            .filter(|_| roulette_selection(&scores, &mut rng) == 1)
            .count();

        let share = picks as f64 / 4000.0;
        assert!((0.70..0.80).contains(&share), "share was {}", share);
    }

    #[test]
    fn test_roulette_zero_total_is_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let scores = [0; 4];
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            counts[roulette_selection(&scores, &mut rng)] += 1;
        }

        for count in counts {
            assert!((800..1200).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_tournament_full_draw_finds_best() {
        let mut rng = StdRng::seed_from_u64(4);
        let scores = [1, 9, 2];
        // With a large tournament the best index is all but certain to be drawn
        assert_eq!(tournament_selection(&scores, 64, &mut rng), 1);
    }

    #[test]
    fn test_roulette_excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(10);
        let scores = [0, 5, 1, 0];

        for _ in 0..500 {
            let idx = roulette_selection_excluding(&scores, 1, &mut rng);
            assert_eq!(idx, 2, "only index 2 has weight once 1 is excluded");
        }
    }

    #[test]
    fn test_roulette_excluding_falls_back_to_uniform_over_others() {
        let mut rng = StdRng::seed_from_u64(11);
        // All the weight sits on the excluded candidate
        let scores = [0, 0, 7];
        let mut counts = [0usize; 3];

        for _ in 0..2000 {
            counts[roulette_selection_excluding(&scores, 2, &mut rng)] += 1;
        }

        assert_eq!(counts[2], 0);
        assert!((800..1200).contains(&counts[0]), "counts {:?}", counts);
        assert!((800..1200).contains(&counts[1]), "counts {:?}", counts);
    }

    #[test]
    fn test_tournament_excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(12);
        let scores = [1, 9, 2];

        for _ in 0..200 {
            assert_ne!(tournament_selection_excluding(&scores, 5, 1, &mut rng), 1);
        }
        assert_eq!(tournament_selection_excluding(&scores, 64, 1, &mut rng), 2);
    }

    #[test]
    fn test_excluding_with_single_candidate() {
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(roulette_selection_excluding(&[3], 0, &mut rng), 0);
        assert_eq!(tournament_selection_excluding(&[3], 3, 0, &mut rng), 0);
    }

    #[test]
    fn test_crossover_children_are_complementary() {
        let mut rng = StdRng::seed_from_u64(5);
        let p1 = Candidate::from("AAAAAA");
        let p2 = Candidate::from("BBBBBB");

        let (c1, c2) = crossover(&p1, &p2, &mut rng);

        assert_eq!(c1.len(), 6);
        assert_eq!(c2.len(), 6);
        for i in 0..6 {
            assert_ne!(c1.chars()[i], c2.chars()[i]);
        }
        // Cut point is never 0, so the head always comes from the own parent
        assert_eq!(c1.chars()[0], 'A');
        assert_eq!(c2.chars()[0], 'B');
    }

    #[test]
    fn test_crossover_single_character() {
        let mut rng = StdRng::seed_from_u64(6);
        let (c1, c2) = crossover(&Candidate::from("A"), &Candidate::from("B"), &mut rng);
        assert_eq!(c1, Candidate::from("A"));
        assert_eq!(c2, Candidate::from("B"));
    }

    #[test]
    fn test_target_guided_crossover() {
        let target = Target::new("HELLO");
        let p1 = Candidate::from("HEXXX");
        let p2 = Candidate::from("YYLLO");

        let (c1, c2) = target_guided_crossover(&p1, &p2, &target);

        assert_eq!(c1, Candidate::from("HELLO"));
        assert_eq!(c2, Candidate::from("HELLO"));

        let (c1, c2) =
            target_guided_crossover(&Candidate::from("HAAAA"), &Candidate::from("BBBBB"), &target);
        assert_eq!(c1, Candidate::from("HBBBB"));
        assert_eq!(c2, Candidate::from("HAAAA"));
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut candidate = Candidate::from("ABCABC");
        mutate(&mut candidate, 0.0, &abc(), &mut rng);
        assert_eq!(candidate, Candidate::from("ABCABC"));
    }

    #[test]
    fn test_mutation_rate_one_redraws_everything() {
        let mut rng = StdRng::seed_from_u64(8);
        let alphabet = Alphabet::new("AB".chars()).unwrap();
        let mut candidate = Candidate::from_chars(vec!['A'; 2000]);

        mutate(&mut candidate, 1.0, &alphabet, &mut rng);

        let redrawn = candidate.chars().iter().filter(|c| **c == 'B').count();
        let share = redrawn as f64 / 2000.0;
        assert!((0.45..0.55).contains(&share), "share was {}", share);
    }

    #[test]
    fn test_random_candidate_uses_alphabet() {
        let mut rng = StdRng::seed_from_u64(9);
        let alphabet = abc();
        let candidate = random_candidate(50, &alphabet, &mut rng);

        assert_eq!(candidate.len(), 50);
        assert!(candidate.chars().iter().all(|c| alphabet.contains(*c)));
    }
}
