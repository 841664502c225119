//! Key based classification of uploaded objects.
//!
//! A [Classifier] is an ordered table of [SuffixRule]s. New file types are supported by
//! appending a rule, the dispatch loop only ever asks for the [FileCategory] of a key.

use std::{borrow::Cow, fmt::Display};

/// The kind of content an object holds, judged by its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Text,
    Image,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Text => "text",
            FileCategory::Image => "image",
        }
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps keys ending in any of `suffixes` to `category`.
/// Matching is case sensitive.
#[derive(Debug, Clone)]
pub struct SuffixRule {
    suffixes: Vec<Cow<'static, str>>,
    category: FileCategory,
}

impl SuffixRule {
    pub fn new<I, S>(suffixes: I, category: FileCategory) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            category,
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| key.ends_with(suffix.as_ref()))
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<SuffixRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::empty()
            .with_rule(SuffixRule::new([".txt"], FileCategory::Text))
            .with_rule(SuffixRule::new([".jpg", ".png"], FileCategory::Image))
    }
}

impl Classifier {
    /// A classifier which matches nothing
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Earlier rules take precedence.
    pub fn with_rule(mut self, rule: SuffixRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The category of the first rule matching `key`, if any
    pub fn classify(&self, key: &str) -> Option<FileCategory> {
        self.rules
            .iter()
            .find(|rule| rule.matches(key))
            .map(SuffixRule::category)
    }
}
