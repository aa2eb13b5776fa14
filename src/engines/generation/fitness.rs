use crate::engines::generation::genome::{Candidate, Target};

/// Number of positions where `candidate` agrees with `target`.
pub fn score(candidate: &Candidate, target: &Target) -> usize {
    candidate
        .chars()
        .iter()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count()
}

/// Score scaled to [0, 1] by the target length.
pub fn fitness_ratio(score: usize, target_len: usize) -> f64 {
    if target_len == 0 {
        return 0.0;
    }
    score as f64 / target_len as f64
}

pub fn score_population(population: &[Candidate], target: &Target) -> Vec<usize> {
    population.iter().map(|c| score(c, target)).collect()
}

/// Index of the highest score; the first one wins ties.
pub fn best_index(scores: &[usize]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (i, &s)| match best {
            Some((_, top)) if top >= s => best,
            _ => Some((i, s)),
        })
        .map(|(i, _)| i)
}
