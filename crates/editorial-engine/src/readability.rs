//! Readability scoring adapter
//!
//! The scorer is a collaborator behind a trait so tests can substitute it
//! and embedders can swap formulas without touching rule logic. The
//! default implementation computes Flesch Reading Ease and Flesch-Kincaid
//! Grade Level from sentence, word, and syllable heuristics.
//!
//! The family has exactly one gating rule: reading ease against the
//! policy threshold. Grade level and the banded interpretation are
//! surfaced as metrics only.

use shared_markup::{strip_markup, Document};
use shared_types::{Finding, MetricValue};

use crate::validator::Validator;

/// Required capability of a readability collaborator
pub trait ReadabilityScorer {
    /// Reading-ease score; higher is easier (Flesch scale: 0-100)
    fn reading_ease(&self, text: &str) -> f64;
    /// U.S. school grade level
    fn grade_level(&self, text: &str) -> f64;
}

/// Minimum reading-ease score. A policy constant, not law.
#[derive(Debug, Clone, Copy)]
pub struct ReadabilityPolicy {
    pub threshold: f64,
}

impl Default for ReadabilityPolicy {
    fn default() -> Self {
        Self { threshold: 60.0 }
    }
}

/// Readability battery: a single gating rule plus descriptive metrics
pub fn validator<S>(scorer: S, policy: ReadabilityPolicy) -> Validator
where
    S: ReadabilityScorer + 'static,
{
    Validator::new().rule("reading_ease", move |doc, metrics| {
        // Emptiness after stripping is a fatal input error and was
        // rejected before this validator was built.
        let plain = strip_markup(&doc.raw_source);

        let ease = round1(scorer.reading_ease(&plain));
        let grade = round1(scorer.grade_level(&plain));

        metrics.insert("reading_ease".to_string(), MetricValue::Number(ease));
        metrics.insert("grade_level".to_string(), MetricValue::Number(grade));
        metrics.insert(
            "threshold".to_string(),
            MetricValue::Number(policy.threshold),
        );
        metrics.insert(
            "interpretation".to_string(),
            MetricValue::from(interpret_score(ease)),
        );

        if ease < policy.threshold {
            vec![Finding::critical(format!(
                "Reading ease {:.1} is below the required minimum {:.1}; \
                 use shorter sentences and simpler words",
                ease, policy.threshold
            ))]
        } else {
            Vec::new()
        }
    })
}

/// Banded interpretation of a Flesch Reading Ease score
fn interpret_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very easy to read (5th grade level)"
    } else if score >= 80.0 {
        "Easy to read (6th grade level)"
    } else if score >= 70.0 {
        "Fairly easy to read (7th grade level)"
    } else if score >= 60.0 {
        "Plain English (8th-9th grade level)"
    } else if score >= 50.0 {
        "Fairly difficult to read (10th-12th grade level)"
    } else if score >= 30.0 {
        "Difficult to read (college level)"
    } else {
        "Very difficult to read (college graduate level)"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Default scorer: Flesch formulas over English text heuristics
pub struct FleschScorer;

impl ReadabilityScorer for FleschScorer {
    fn reading_ease(&self, text: &str) -> f64 {
        let sentences = count_sentences(text).max(1) as f64;
        let words = count_words(text).max(1) as f64;
        let syllables = count_syllables(text).max(1) as f64;

        206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
    }

    fn grade_level(&self, text: &str) -> f64 {
        let sentences = count_sentences(text).max(1) as f64;
        let words = count_words(text).max(1) as f64;
        let syllables = count_syllables(text).max(1) as f64;

        0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
    }
}

/// Sentence terminators as a proxy for sentence count
fn count_sentences(text: &str) -> usize {
    text.chars()
        .filter(|c| *c == '.' || *c == '!' || *c == '?')
        .count()
        .max(1)
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(count_word_syllables).sum()
}

/// Vowel-group heuristic with silent-e handling
fn count_word_syllables(word: &str) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    if word.is_empty() {
        return 0;
    }
    if word.len() <= 3 {
        return 1;
    }

    let vowels = ['a', 'e', 'i', 'o', 'u', 'y'];
    let mut count = 0;
    let mut prev_vowel = false;

    for ch in word.chars() {
        if vowels.contains(&ch) {
            if !prev_vowel {
                count += 1;
            }
            prev_vowel = true;
        } else {
            prev_vowel = false;
        }
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DocumentKind, Severity};

    #[test]
    fn test_syllable_heuristics() {
        assert_eq!(count_word_syllables("hello"), 2);
        assert_eq!(count_word_syllables("the"), 1);
        assert_eq!(count_word_syllables("accessibility"), 6);
        assert_eq!(count_word_syllables("a"), 1);
        assert_eq!(count_word_syllables("12%"), 0);
    }

    #[test]
    fn test_simple_text_scores_easy() {
        let simple = "The cat sat on the mat. The dog ran fast. I am happy.";
        let ease = FleschScorer.reading_ease(simple);
        assert!(ease > 90.0, "expected very easy, got {:.1}", ease);

        let grade = FleschScorer.grade_level(simple);
        assert!(grade < 6.0, "expected low grade, got {:.1}", grade);
    }

    #[test]
    fn test_dense_text_scores_harder_than_simple() {
        let simple = "The cat sat on the mat. The dog ran fast.";
        let dense = "Organizational inefficiencies necessitate comprehensive \
                     transformational methodologies notwithstanding considerable \
                     implementation complexities.";
        assert!(FleschScorer.reading_ease(dense) < FleschScorer.reading_ease(simple));
    }

    #[test]
    fn test_interpretation_bands() {
        assert_eq!(interpret_score(95.0), "Very easy to read (5th grade level)");
        assert_eq!(interpret_score(60.0), "Plain English (8th-9th grade level)");
        assert_eq!(
            interpret_score(10.0),
            "Very difficult to read (college graduate level)"
        );
    }

    #[test]
    fn test_gate_passes_at_threshold() {
        let doc = Document::parse(
            "The cat sat on the mat. The dog ran fast. I am happy.",
            DocumentKind::Plain,
        );
        let report = validator(FleschScorer, ReadabilityPolicy { threshold: 60.0 }).run(&doc);
        assert!(report.passed);
        assert!(report.metrics.contains_key("reading_ease"));
        assert!(report.metrics.contains_key("grade_level"));
        assert!(report.metrics.contains_key("interpretation"));
    }

    #[test]
    fn test_gate_fails_below_threshold() {
        struct FixedScorer(f64);
        impl ReadabilityScorer for FixedScorer {
            fn reading_ease(&self, _: &str) -> f64 {
                self.0
            }
            fn grade_level(&self, _: &str) -> f64 {
                14.0
            }
        }

        let doc = Document::parse("Some body text.", DocumentKind::Plain);
        let report = validator(FixedScorer(42.5), ReadabilityPolicy::default()).run(&doc);
        assert!(!report.passed);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Critical);
        assert!(report.findings[0].message.contains("42.5"));
    }
}
