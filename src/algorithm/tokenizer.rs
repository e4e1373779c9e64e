//! Case-driven greedy splitting of words into element symbols
//!
//! A symbol is the first pending character followed by every lowercase ASCII
//! letter after it. Any other character, or the end of the input, closes the
//! symbol and starts the next one. The scan never backtracks: when the greedy
//! split names something that is not an element the whole call fails, even if
//! another split of the same input would have worked.

use crate::catalog::{Catalog, ElementRecord};
use crate::io::error::{Result, unknown_symbol};

/// Elements spelling out one input string, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Word<'c> {
    elements: Vec<&'c ElementRecord>,
}

impl<'c> Word<'c> {
    /// Build a word from already resolved records
    pub const fn new(elements: Vec<&'c ElementRecord>) -> Self {
        Self { elements }
    }

    /// Records in spelling order
    pub fn elements(&self) -> &[&'c ElementRecord] {
        &self.elements
    }

    /// Symbols in spelling order
    pub fn symbols(&self) -> Vec<&'c str> {
        self.elements.iter().map(|e| e.symbol.as_str()).collect()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the word holds no element
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Splits raw strings into [`Word`]s using a catalog
pub struct Tokenizer<'c> {
    catalog: &'c Catalog,
}

impl<'c> Tokenizer<'c> {
    /// Tokenizer resolving symbols against `catalog`
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Split every input into elements
    ///
    /// Empty inputs produce no word. Output order follows input order.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicError::UnknownSymbol`](crate::PeriodicError::UnknownSymbol)
    /// for the first symbol missing from the catalog; no words are returned
    /// for any input in that case.
    pub fn tokenize<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<Word<'c>>> {
        let mut words = Vec::with_capacity(inputs.len());
        for input in inputs {
            if let Some(word) = self.tokenize_one(input.as_ref())? {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Split a single input; `None` for the empty string
    ///
    /// # Errors
    ///
    /// Returns an error if a greedily extracted symbol is not in the catalog
    pub fn tokenize_one(&self, input: &str) -> Result<Option<Word<'c>>> {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return Ok(None);
        };

        let mut elements = Vec::new();
        let mut pending = String::from(first);

        // The trailing `None` closes the final symbol
        for next in chars.map(Some).chain(std::iter::once(None)) {
            match next {
                Some(ch) if ch.is_ascii_lowercase() => pending.push(ch),
                _ => {
                    let record = self
                        .catalog
                        .get(&pending)
                        .ok_or_else(|| unknown_symbol(&pending, input))?;
                    log::debug!("{} ({})", record.symbol, record.name);
                    elements.push(record);
                    pending = next.map(String::from).unwrap_or_default();
                }
            }
        }

        Ok(Some(Word::new(elements)))
    }
}
