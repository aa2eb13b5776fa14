use super::traits::ConfigSection;
use crate::engines::generation::alphabet::Alphabet;
use crate::error::GeorgeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: String,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub alphabet: AlphabetSource,
    pub selection_method: SelectionMethod,
    pub tournament_size: usize,
    pub crossover_method: CrossoverMethod,
    pub elitism_count: usize,
    pub seed: Option<u64>,
    /// Generations between console progress lines.
    pub report_interval: usize,
}

/// Where the permitted characters for random generation and mutation come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetSource {
    /// Distinct characters of the target string.
    Target,
    /// `' '` through `'~'`.
    PrintableAscii,
    Custom { symbols: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    Roulette,
    Tournament,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverMethod {
    /// Swap tails after a random cut point.
    SinglePoint,
    /// Keep each parent's characters that already match the target, fill the
    /// rest from the other parent.
    TargetGuided,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: "To be or not to be".to_string(),
            population_size: 100,
            mutation_rate: 0.01,
            max_generations: 1000,
            alphabet: AlphabetSource::Target,
            selection_method: SelectionMethod::Roulette,
            tournament_size: 3,
            crossover_method: CrossoverMethod::SinglePoint,
            elitism_count: 0,
            seed: None,
            report_interval: 10,
        }
    }
}

impl EvolutionConfig {
    /// Config with defaults for everything but the three core parameters.
    pub fn new(population_size: usize, target: &str, mutation_rate: f64) -> Self {
        Self {
            target: target.to_string(),
            population_size,
            mutation_rate,
            ..Self::default()
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GeorgeError> {
        if self.population_size == 0 {
            return Err(GeorgeError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.target.is_empty() {
            return Err(GeorgeError::Configuration(
                "Target string must not be empty".to_string(),
            ));
        }
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeorgeError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(GeorgeError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(GeorgeError::Configuration(
                "Elitism count must be smaller than the population size".to_string(),
            ));
        }
        if self.report_interval == 0 {
            return Err(GeorgeError::Configuration(
                "Report interval must be at least 1".to_string(),
            ));
        }

        let alphabet = Alphabet::from_source(&self.alphabet, &self.target)?;
        if let Some(missing) = self.target.chars().find(|c| !alphabet.contains(*c)) {
            return Err(GeorgeError::Configuration(format!(
                "Target character {:?} is not in the alphabet",
                missing
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_core_parameters() {
        let cases = [
            EvolutionConfig::new(0, "ABC", 0.05),
            EvolutionConfig::new(10, "", 0.05),
            EvolutionConfig::new(10, "ABC", -0.1),
            EvolutionConfig::new(10, "ABC", 1.5),
            EvolutionConfig::new(10, "ABC", f64::NAN),
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(GeorgeError::Configuration(_))),
                "expected rejection for {:?}",
                config
            );
        }
    }

    #[test]
    fn test_mutation_rate_bounds_inclusive() {
        assert!(EvolutionConfig::new(10, "ABC", 0.0).validate().is_ok());
        assert!(EvolutionConfig::new(10, "ABC", 1.0).validate().is_ok());
    }

    #[test]
    fn test_alphabet_must_cover_target() {
        let mut config = EvolutionConfig::new(10, "HELLO", 0.05);
        config.alphabet = AlphabetSource::Custom {
            symbols: "HEL".to_string(),
        };
        assert!(config.validate().is_err());

        config.alphabet = AlphabetSource::Custom {
            symbols: "HELOX".to_string(),
        };
        assert!(config.validate().is_ok());

        config.alphabet = AlphabetSource::PrintableAscii;
        config.target = "naïve".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_elitism_and_tournament_limits() {
        let mut config = EvolutionConfig::new(5, "ABC", 0.05);
        config.elitism_count = 5;
        assert!(config.validate().is_err());

        config.elitism_count = 4;
        config.tournament_size = 0;
        assert!(config.validate().is_err());
    }
}
