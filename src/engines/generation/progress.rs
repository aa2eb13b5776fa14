use super::evolution_engine::{BestCandidate, ProgressCallback};

/// Logs the best candidate every `report_interval` generations and whenever
/// the target is hit.
pub struct ConsoleProgressCallback {
    report_interval: usize,
}

impl ConsoleProgressCallback {
    pub fn new(report_interval: usize) -> Self {
        Self {
            report_interval: report_interval.max(1),
        }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best: &BestCandidate) {
        if generation % self.report_interval == 0 || best.score == best.target_len {
            log::info!(
                "Generation {}: [{}] fitness {}/{} ({:.2}%)",
                generation,
                best.candidate,
                best.score,
                best.target_len,
                best.fitness_ratio() * 100.0
            );
        }
    }
}

// For handing progress to another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best: String, score: usize, target_len: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best: &BestCandidate) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best: best.candidate.to_string(),
            score: best.score,
            target_len: best.target_len,
        });
    }
}
