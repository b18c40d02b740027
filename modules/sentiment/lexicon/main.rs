//! Deterministic word-list pipeline used when no external model is wired in.

/// Sentence and token segmentation.
pub mod helper;
/// Built-in vocabulary.
pub mod words;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::pipeline::{PipelineError, SentimentPipeline};

pub use helper::Segmenter;

/// Default number of tokens a negator reaches forward.
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Largest accepted word valence magnitude.
pub const MAX_VALENCE: i32 = 5;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    words: HashMap<String, i32>,
}

/// Builder for [`LexiconPipeline`].
#[derive(Debug, Clone)]
pub struct LexiconPipelineBuilder {
    lexicon_path: Option<PathBuf>,
    overrides: Vec<(String, i32)>,
    negation_window: usize,
}

impl LexiconPipelineBuilder {
    /// Starts from the built-in vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon_path: None,
            overrides: Vec::new(),
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    /// Merges a TOML lexicon file (`[words]` table of `word = valence`).
    #[must_use]
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Sets or replaces one word valence. Applied after any lexicon file.
    #[must_use]
    pub fn word(mut self, word: impl Into<String>, valence: i32) -> Self {
        self.overrides.push((word.into(), valence));
        self
    }

    /// Number of tokens after a negator that can still be flipped.
    #[must_use]
    pub fn negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Loads resources and builds the pipeline.
    pub fn build(self) -> Result<LexiconPipeline, PipelineError> {
        if self.negation_window == 0 {
            return Err(PipelineError::ModelLoad(
                "negation window must be at least 1".into(),
            ));
        }
        let mut valences: HashMap<String, i32> = words::BUILTIN_VALENCES
            .iter()
            .map(|(word, valence)| ((*word).to_string(), *valence))
            .collect();
        if let Some(path) = &self.lexicon_path {
            valences.extend(read_lexicon(path)?);
        }
        for (word, valence) in self.overrides {
            let valence = check_valence(&word, valence).map_err(PipelineError::ModelLoad)?;
            valences.insert(word.to_lowercase(), valence);
        }
        Ok(LexiconPipeline {
            segmenter: Segmenter::new()?,
            valences,
            negation_window: self.negation_window,
        })
    }
}

impl Default for LexiconPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn read_lexicon(path: &Path) -> Result<HashMap<String, i32>, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|err| {
        PipelineError::ModelLoad(format!("reading lexicon {}: {err}", path.display()))
    })?;
    let file: LexiconFile = toml::from_str(&raw).map_err(|err| {
        PipelineError::ModelLoad(format!("parsing lexicon {}: {err}", path.display()))
    })?;
    file.words
        .into_iter()
        .map(|(word, valence)| -> Result<(String, i32), PipelineError> {
            let valence = check_valence(&word, valence).map_err(|msg| {
                PipelineError::ModelLoad(format!("lexicon {}: {msg}", path.display()))
            })?;
            Ok((word.to_lowercase(), valence))
        })
        .collect()
}

fn check_valence(word: &str, valence: i32) -> Result<i32, String> {
    if (-MAX_VALENCE..=MAX_VALENCE).contains(&valence) {
        Ok(valence)
    } else {
        Err(format!(
            "valence {valence} for {word:?} outside [-{MAX_VALENCE}, {MAX_VALENCE}]"
        ))
    }
}

/// Scores sentences by summing word valences with negation and emphasis.
#[derive(Debug, Clone)]
pub struct LexiconPipeline {
    segmenter: Segmenter,
    valences: HashMap<String, i32>,
    negation_window: usize,
}

impl LexiconPipeline {
    /// Pipeline over the built-in vocabulary.
    pub fn new() -> Result<Self, PipelineError> {
        LexiconPipelineBuilder::new().build()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> LexiconPipelineBuilder {
        LexiconPipelineBuilder::new()
    }

    /// Valence of a single lowercase word, if known.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<i32> {
        self.valences.get(word).copied()
    }

    /// Raw score of one sentence.
    #[must_use]
    pub fn sentence_score(&self, sentence: &str) -> i32 {
        let mut sum = 0i32;
        let mut negate_for = 0usize;
        let mut boost = 0i32;
        for token in self.segmenter.tokenize(sentence) {
            if words::is_negator(&token) {
                negate_for = self.negation_window;
                boost = 0;
                continue;
            }
            if words::is_intensifier(&token) {
                boost = boost.saturating_add(1);
                continue;
            }
            match self.valence(&token) {
                Some(valence) if valence != 0 => {
                    let mut scored =
                        valence.saturating_add(valence.signum().saturating_mul(boost));
                    if negate_for > 0 {
                        scored = scored.saturating_neg();
                        negate_for = 0;
                    }
                    sum = sum.saturating_add(scored);
                }
                _ => negate_for = negate_for.saturating_sub(1),
            }
            boost = 0;
        }
        if sum != 0 && sentence.trim_end().ends_with('!') {
            sum = sum.saturating_add(sum.signum());
        }
        sum
    }

    /// Buckets a sentence score into the five-class index space.
    #[must_use]
    pub const fn score_to_class(score: i32) -> usize {
        match score {
            i32::MIN..=-3 => 0,
            -2..=-1 => 1,
            0 => 2,
            1..=2 => 3,
            _ => 4,
        }
    }

    /// Number of words in the vocabulary.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.valences.len()
    }
}

impl SentimentPipeline for LexiconPipeline {
    fn segment_and_classify(&self, text: &str) -> Result<Vec<usize>, PipelineError> {
        Ok(self
            .segmenter
            .split_sentences(text)
            .into_iter()
            .map(|sentence| Self::score_to_class(self.sentence_score(sentence)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pipeline() -> LexiconPipeline {
        LexiconPipeline::new().unwrap()
    }

    #[test]
    fn party_sentences_cover_every_class() {
        let p = pipeline();
        let cases = [
            ("This is a disgusting party!", 0),
            ("This party is gross.", 1),
            ("This is a party.", 2),
            ("This party is good.", 3),
            ("This party is amazing!", 4),
        ];
        for (text, want) in cases {
            assert_eq!(p.segment_and_classify(text).unwrap(), vec![want], "{text}");
        }
    }

    #[test]
    fn one_index_per_sentence() {
        let p = pipeline();
        let got = p
            .segment_and_classify("This party is gross.  This party is good.")
            .unwrap();
        assert_eq!(got, vec![1, 3]);
    }

    #[test]
    fn negation_flips_within_window() {
        let p = pipeline();
        assert_eq!(p.sentence_score("not good"), -2);
        assert_eq!(p.sentence_score("This party isn't a good one"), -2);
        // window of 3 has run out by the time "good" arrives
        assert_eq!(p.sentence_score("not at all in the least good"), 2);
    }

    #[test]
    fn intensifiers_and_exclamation_add_weight() {
        let p = pipeline();
        assert_eq!(p.sentence_score("very good"), 3);
        assert_eq!(p.sentence_score("really very bad"), -4);
        assert_eq!(p.sentence_score("good!"), 3);
        assert_eq!(p.sentence_score("a party!"), 0);
    }

    #[test]
    fn score_buckets() {
        let got: Vec<usize> = [-9, -3, -2, -1, 0, 1, 2, 3, 9]
            .into_iter()
            .map(LexiconPipeline::score_to_class)
            .collect();
        assert_eq!(got, vec![0, 0, 1, 1, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn lexicon_file_and_overrides_merge() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.toml");
        fs::write(&path, "[words]\nParty = 2\ngross = 0\n").unwrap();
        let p = LexiconPipeline::builder()
            .lexicon_file(&path)
            .word("shindig", -1)
            .build()
            .unwrap();
        assert_eq!(p.valence("party"), Some(2));
        assert_eq!(p.valence("gross"), Some(0));
        assert_eq!(p.valence("shindig"), Some(-1));
        assert_eq!(p.segment_and_classify("This party is gross.").unwrap(), vec![3]);
        assert!(p.vocabulary_len() > words::BUILTIN_VALENCES.len());
    }

    #[test]
    fn unreadable_lexicon_is_a_model_load_error() {
        let dir = tempdir().unwrap();
        let err = LexiconPipeline::builder()
            .lexicon_file(dir.path().join("missing.toml"))
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelLoad(_)));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[words]\ngood = \"yes\"\n").unwrap();
        let err = LexiconPipeline::builder()
            .lexicon_file(&bad)
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelLoad(ref msg) if msg.contains("parsing")));
    }

    #[test]
    fn extreme_valences_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.toml");
        fs::write(&path, "[words]\nsuperb = 2147483647\n").unwrap();
        let err = LexiconPipeline::builder()
            .lexicon_file(&path)
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelLoad(ref msg) if msg.contains("superb")));

        let err = LexiconPipeline::builder()
            .word("bleh", i32::MIN)
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelLoad(ref msg) if msg.contains("bleh")));
    }

    #[test]
    fn largest_valences_score_without_overflow() {
        let p = LexiconPipeline::builder()
            .word("superb", MAX_VALENCE)
            .word("bleh", -MAX_VALENCE)
            .build()
            .unwrap();
        assert_eq!(p.sentence_score("This is very superb."), MAX_VALENCE + 1);
        assert_eq!(p.sentence_score("superb superb!"), 2 * MAX_VALENCE + 1);
        assert_eq!(p.sentence_score("not bleh"), MAX_VALENCE);
        assert_eq!(p.segment_and_classify("superb superb.").unwrap(), vec![4]);
    }

    #[test]
    fn zero_negation_window_is_rejected() {
        let err = LexiconPipeline::builder()
            .negation_window(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelLoad(_)));
    }
}
