//! CSV dialect configuration.
//!
//! The source and target files use different delimiters, quote characters and
//! encodings. Both are described by a [`CsvDialect`]; the defaults match the
//! product export and offer import formats.

use serde::{Deserialize, Serialize};

/// Character encoding of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1 (Latin-1).
    Latin1,
}

impl TextEncoding {
    /// Conventional label of the encoding.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }
}

/// Delimiter, quoting and encoding settings for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvDialect {
    /// Field separator.
    pub delimiter: u8,
    /// Quote character around fields.
    pub quote: u8,
    /// Escape character for quotes inside quoted fields.
    pub escape: u8,
    /// File encoding.
    pub encoding: TextEncoding,
    /// Quote every field when writing, not only those that need it.
    pub quote_all: bool,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self::input()
    }
}

impl CsvDialect {
    /// Dialect of the source product file: `;`, `"`, `\`, UTF-8.
    pub fn input() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
            escape: b'\\',
            encoding: TextEncoding::Utf8,
            quote_all: false,
        }
    }

    /// Dialect of the target offer file: `|`, `'`, `\`, ISO-8859-1, all fields quoted.
    pub fn output() -> Self {
        Self {
            delimiter: b'|',
            quote: b'\'',
            escape: b'\\',
            encoding: TextEncoding::Latin1,
            quote_all: true,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }
}
