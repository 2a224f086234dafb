use regex::Regex;
use regex::bytes::Regex as BytesRegex;

use crate::descriptor::{Binding, FieldKind};
use crate::errors::{Constraint, ConstraintViolation, DefinitionError, FieldError};
use crate::value::{Value, ValueKind};

/// How a text value is trimmed before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Trim {
    #[default]
    Off,
    Whitespace,
    Chars(String),
}

/// A regex matched from the start of the value, for both text and bytes.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    text: Regex,
    bytes: BytesRegex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, DefinitionError> {
        let anchored = format!(r"\A(?:{source})");
        let invalid = |source_err: regex::Error| DefinitionError::InvalidRegex {
            pattern: source.to_string(),
            source: source_err,
        };
        Ok(Self {
            source: source.to_string(),
            text: Regex::new(&anchored).map_err(invalid)?,
            bytes: BytesRegex::new(&anchored).map_err(invalid)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Text(text) => self.text.is_match(text),
            Value::Bytes(bytes) => self.bytes.is_match(bytes),
            _ => false,
        }
    }
}

/// String and byte-string field.
///
/// Constraints run in the order blank, `max_length`, `min_length`, regex.
/// Lengths count chars for text and bytes for byte strings.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    max_length: Option<usize>,
    min_length: Option<usize>,
    blank: bool,
    regex: Option<Pattern>,
    trim: Trim,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Allows zero-length values. Blank values are rejected by default.
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Compiles `pattern` once; values must match it starting at their first character.
    pub fn regex(mut self, pattern: &str) -> Result<Self, DefinitionError> {
        self.regex = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Strips surrounding whitespace before validation.
    pub fn trim(mut self) -> Self {
        self.trim = Trim::Whitespace;
        self
    }

    /// Strips any of `chars` from both ends before validation.
    ///
    /// Byte strings are trimmed by the UTF-8 encoding of each char.
    pub fn trim_chars(mut self, chars: impl Into<String>) -> Self {
        self.trim = Trim::Chars(chars.into());
        self
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.regex.as_ref()
    }
}

fn length(value: &Value) -> usize {
    match value {
        Value::Text(text) => text.chars().count(),
        Value::Bytes(bytes) => bytes.len(),
        _ => 0,
    }
}

/// Strips whole UTF-8 encodings of `chars` from both ends, never a partial character.
fn trim_bytes<'a>(mut bytes: &'a [u8], chars: &str) -> &'a [u8] {
    let mut buf = [0u8; 4];
    let encoded: Vec<Vec<u8>> = chars.chars().map(|ch| ch.encode_utf8(&mut buf).as_bytes().to_vec()).collect();
    while let Some(rest) = encoded.iter().find_map(|enc| bytes.strip_prefix(enc.as_slice())) {
        bytes = rest;
    }
    while let Some(rest) = encoded.iter().find_map(|enc| bytes.strip_suffix(enc.as_slice())) {
        bytes = rest;
    }
    bytes
}

impl FieldKind for TextField {
    fn name(&self) -> &'static str {
        "text"
    }

    fn valid_types(&self) -> &[ValueKind] {
        &[ValueKind::Text, ValueKind::Bytes]
    }

    fn transform(&self, value: Value) -> Value {
        match (&self.trim, value) {
            (Trim::Off, value) => value,
            (Trim::Whitespace, Value::Text(text)) => Value::Text(text.trim().to_string()),
            (Trim::Whitespace, Value::Bytes(bytes)) => Value::Bytes(bytes.trim_ascii().to_vec()),
            (Trim::Chars(chars), Value::Text(text)) => {
                Value::Text(text.trim_matches(|ch: char| chars.contains(ch)).to_string())
            }
            (Trim::Chars(chars), Value::Bytes(bytes)) => Value::Bytes(trim_bytes(&bytes, chars).to_vec()),
            (_, value) => value,
        }
    }

    fn validate(&self, binding: &Binding, value: &Value) -> Result<(), FieldError> {
        let field = binding.field();
        let len = length(value);
        if !self.blank && len == 0 {
            return Err(ConstraintViolation::new(field, Constraint::Blank, value, None).into());
        }
        if let Some(max) = self.max_length
            && len > max
        {
            return Err(ConstraintViolation::new(field, Constraint::MaxLength, value, Some(&max)).into());
        }
        if let Some(min) = self.min_length
            && len < min
        {
            return Err(ConstraintViolation::new(field, Constraint::MinLength, value, Some(&min)).into());
        }
        if let Some(pattern) = &self.regex
            && !pattern.matches(value)
        {
            return Err(ConstraintViolation::new(field, Constraint::Regex, value, Some(&pattern.as_str())).into());
        }
        Ok(())
    }
}
