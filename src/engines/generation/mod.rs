pub mod alphabet;
pub mod genome;
pub mod fitness;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use alphabet::Alphabet;
pub use genome::{Candidate, Target};
pub use evolution_engine::{BestCandidate, EvolutionEngine, EvolutionOutcome, ProgressCallback};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
