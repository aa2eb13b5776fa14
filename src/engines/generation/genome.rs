//! String representation for the evolutionary search
//!
//! Both the target and every candidate are stored as `Vec<char>` rather than
//! `String`, so positions line up one-to-one for any Unicode text:
//! - **Fitness**: compare position `i` of the candidate with position `i` of the target
//! - **Crossover**: slice at a character index, never inside a UTF-8 sequence
//! - **Mutation**: overwrite a single position in place
//!
//! A candidate always has exactly `target.len()` characters.

use std::fmt;

/// The fixed string the population evolves toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    chars: Vec<char>,
}

impl Target {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One member of the population.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(Vec<char>);

impl Candidate {
    pub fn from_chars(chars: Vec<char>) -> Self {
        Self(chars)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn chars_mut(&mut self) -> &mut [char] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, target: &Target) -> bool {
        self.0 == target.chars
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self(text.chars().collect())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_count_characters() {
        let target = Target::new("naïve");
        assert_eq!(target.len(), 5);
        assert_eq!(Candidate::from("naïve").len(), 5);
    }

    #[test]
    fn test_candidate_matches_target() {
        let target = Target::new("ABC");
        assert!(Candidate::from("ABC").matches(&target));
        assert!(!Candidate::from("ABD").matches(&target));
        assert_eq!(Candidate::from("ABC").to_string(), "ABC");
    }
}
