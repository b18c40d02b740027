use regex::Regex;

use crate::pipeline::PipelineError;

/// Sentence and token boundaries used by the lexicon pipeline.
#[derive(Debug, Clone)]
pub struct Segmenter {
    sentence_re: Regex,
    token_re: Regex,
}

impl Segmenter {
    /// Compiles the boundary patterns.
    pub fn new() -> Result<Self, PipelineError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|err| PipelineError::ModelLoad(err.to_string()))
        };
        Ok(Self {
            sentence_re: compile(r"(?s).*?(?:[.!?]+(?:\s|$)|$)")?,
            token_re: compile(r"[\p{L}\p{N}']+")?,
        })
    }

    /// Splits text into sentences on `.`, `!`, `?` runs followed by whitespace
    /// or end of input, so `4.5` stays whole. Abbreviations such as `Dr. Smith`
    /// still end a sentence.
    ///
    /// Segments without any letter or digit are dropped.
    #[must_use]
    pub fn split_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.sentence_re
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .collect()
    }

    /// Lowercased word tokens; typographic apostrophes are folded to `'`.
    #[must_use]
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let folded = sentence.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase();
        self.token_re
            .find_iter(&folded)
            .map(|m| m.as_str().trim_matches('\'').to_string())
            .filter(|token| !token.is_empty())
            .collect()
    }
}
