use crate::config::evolution::{CrossoverMethod, EvolutionConfig, SelectionMethod};
use crate::config::traits::ConfigSection;
use crate::engines::generation::{
    alphabet::Alphabet,
    fitness::{best_index, fitness_ratio, score_population},
    genome::{Candidate, Target},
    operators::*,
};
use crate::error::GeorgeError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

pub struct EvolutionEngine {
    config: EvolutionConfig,
    target: Target,
    alphabet: Alphabet,
    population: Vec<Candidate>,
    scores: Vec<usize>,
    generation: usize,
    rng: StdRng,
}

/// Best member of a population together with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidate {
    pub candidate: Candidate,
    pub score: usize,
    pub target_len: usize,
}

impl BestCandidate {
    pub fn fitness_ratio(&self) -> f64 {
        fitness_ratio(self.score, self.target_len)
    }
}

/// Result of [`EvolutionEngine::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    pub converged: bool,
    pub generation: usize,
    pub best: BestCandidate,
}

impl fmt::Display for EvolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.converged {
            write!(
                f,
                "Target acquired: {} (generation {})",
                self.best.candidate, self.generation
            )
        } else {
            write!(
                f,
                "Need more evolution rounds! Closest to target: {} (fitness {:.2}%, generation {})",
                self.best.candidate,
                self.best.fitness_ratio() * 100.0,
                self.generation
            )
        }
    }
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best: &BestCandidate);
}

impl EvolutionEngine {
    /// Random initial population for `target` with default settings otherwise.
    pub fn initialize(
        population_size: usize,
        target: &str,
        mutation_rate: f64,
    ) -> Result<Self, GeorgeError> {
        Self::from_config(EvolutionConfig::new(population_size, target, mutation_rate))
    }

    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn from_config(config: EvolutionConfig) -> Result<Self, GeorgeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: EvolutionConfig, mut rng: StdRng) -> Result<Self, GeorgeError> {
        config.validate()?;

        let target = Target::new(&config.target);
        let alphabet = Alphabet::from_source(&config.alphabet, &config.target)?;
        let population = (0..config.population_size)
            .map(|_| random_candidate(target.len(), &alphabet, &mut rng))
            .collect();

        Ok(Self::assemble(config, target, alphabet, population, rng))
    }

    /// Start from a caller-supplied generation 0.
    pub fn with_population(
        config: EvolutionConfig,
        population: Vec<Candidate>,
        rng: StdRng,
    ) -> Result<Self, GeorgeError> {
        config.validate()?;

        if population.len() != config.population_size {
            return Err(GeorgeError::Configuration(format!(
                "Expected {} candidates, got {}",
                config.population_size,
                population.len()
            )));
        }

        let target = Target::new(&config.target);
        let alphabet = Alphabet::from_source(&config.alphabet, &config.target)?;

        for candidate in &population {
            if candidate.len() != target.len() {
                return Err(GeorgeError::InvalidCandidate {
                    expected: target.len(),
                    actual: candidate.len(),
                });
            }
            if let Some(c) = candidate.chars().iter().find(|c| !alphabet.contains(**c)) {
                return Err(GeorgeError::Configuration(format!(
                    "Candidate {:?} uses {:?}, which is not in the alphabet",
                    candidate.to_string(),
                    c
                )));
            }
        }

        Ok(Self::assemble(config, target, alphabet, population, rng))
    }

    fn assemble(
        config: EvolutionConfig,
        target: Target,
        alphabet: Alphabet,
        population: Vec<Candidate>,
        rng: StdRng,
    ) -> Self {
        let scores = score_population(&population, &target);

        log::debug!(
            "Initialized population of {} for a {}-character target ({} symbols, mutation rate {})",
            population.len(),
            target.len(),
            alphabet.len(),
            config.mutation_rate
        );

        Self {
            config,
            target,
            alphabet,
            population,
            scores,
            generation: 0,
            rng,
        }
    }

    /// Breed the next generation from the current scores, replace the
    /// population and return its best member.
    pub fn step(&mut self) -> BestCandidate {
        let next = self.create_next_generation();

        self.population = next;
        self.scores = score_population(&self.population, &self.target);
        self.generation += 1;

        let best = self.best();
        log::trace!(
            "Generation {}: best {:?} ({}/{})",
            self.generation,
            best.candidate.to_string(),
            best.score,
            best.target_len
        );
        best
    }

    pub fn is_converged(&self) -> bool {
        self.population[self.best_idx()].matches(&self.target)
    }

    /// Step until converged or `max_generations` further generations have run.
    pub fn run<C: ProgressCallback>(
        &mut self,
        max_generations: usize,
        callback: &mut C,
    ) -> EvolutionOutcome {
        if self.generation == 0 {
            callback.on_generation_complete(0, &self.best());
        }

        for _ in 0..max_generations {
            if self.is_converged() {
                break;
            }

            callback.on_generation_start(self.generation + 1);
            let best = self.step();
            callback.on_generation_complete(self.generation, &best);
        }

        let outcome = EvolutionOutcome {
            converged: self.is_converged(),
            generation: self.generation,
            best: self.best(),
        };

        if outcome.converged {
            log::info!(
                "Converged on {:?} at generation {}",
                self.target.as_str(),
                outcome.generation
            );
        } else {
            log::info!(
                "Stopped at generation {} without converging ({}/{} characters)",
                outcome.generation,
                outcome.best.score,
                outcome.best.target_len
            );
        }

        outcome
    }

    fn create_next_generation(&mut self) -> Vec<Candidate> {
        let size = self.config.population_size;
        let mut next_generation = Vec::with_capacity(size);

        // Elitism: copy top performers
        if self.config.elitism_count > 0 {
            let mut ranked: Vec<usize> = (0..self.population.len()).collect();
            ranked.sort_by(|a, b| self.scores[*b].cmp(&self.scores[*a]));
            for &i in ranked.iter().take(self.config.elitism_count) {
                next_generation.push(self.population[i].clone());
            }
        }

        // Generate offspring
        while next_generation.len() < size {
            let i1 = self.select();
            let i2 = self.select_mate(i1);
            let parent1 = &self.population[i1];
            let parent2 = &self.population[i2];

            let (mut child1, mut child2) = match self.config.crossover_method {
                CrossoverMethod::SinglePoint => crossover(parent1, parent2, &mut self.rng),
                CrossoverMethod::TargetGuided => {
                    target_guided_crossover(parent1, parent2, &self.target)
                }
            };

            mutate(&mut child1, self.config.mutation_rate, &self.alphabet, &mut self.rng);
            mutate(&mut child2, self.config.mutation_rate, &self.alphabet, &mut self.rng);

            next_generation.push(child1);
            if next_generation.len() < size {
                next_generation.push(child2);
            }
        }

        next_generation
    }

    fn select(&mut self) -> usize {
        match self.config.selection_method {
            SelectionMethod::Roulette => roulette_selection(&self.scores, &mut self.rng),
            SelectionMethod::Tournament => {
                tournament_selection(&self.scores, self.config.tournament_size, &mut self.rng)
            }
        }
    }

    /// Second parent, distinct from `first` whenever the population allows it.
    fn select_mate(&mut self, first: usize) -> usize {
        match self.config.selection_method {
            SelectionMethod::Roulette => {
                roulette_selection_excluding(&self.scores, first, &mut self.rng)
            }
            SelectionMethod::Tournament => tournament_selection_excluding(
                &self.scores,
                self.config.tournament_size,
                first,
                &mut self.rng,
            ),
        }
    }

    fn best_idx(&self) -> usize {
        // The population is never empty once constructed
        best_index(&self.scores).unwrap_or(0)
    }

    pub fn best(&self) -> BestCandidate {
        let idx = self.best_idx();
        BestCandidate {
            candidate: self.population[idx].clone(),
            score: self.scores[idx],
            target_len: self.target.len(),
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn scores(&self) -> &[usize] {
        &self.scores
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
