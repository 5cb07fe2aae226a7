//! Builder‐style helper for constructing **Markdown prompts**.
//!
//! Writing long Markdown strings inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use folio_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_line_bold("Basic Info:")
//!     .add_bullet_key_value("Name", "Ada Lovelace")
//!     .add_blank_line()
//!     .add_line("Be concise.")
//!     .finalize();
//!
//! assert_eq!(md, "**Basic Info:**\n- Name: Ada Lovelace\n\nBe concise.\n");
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested, which keeps rendered
//! prompts byte-stable for tests.

use std::fmt::{Display, Write as _};

/// Indentation used for entries nested under a bold heading line.
const ENTRY_INDENT: &str = "   ";
/// Indentation used for bullets nested under an entry.
const NESTED_INDENT: &str = "     ";

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a bold line (`**text**`) and a trailing newline.
    pub fn add_line_bold(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "**{line}**").expect("failed to write buffer");
        self
    }

    /// Add a bold line followed by a parenthesised annotation:
    /// `**Title** (note)`
    pub fn add_line_bold_annotated(mut self, line: impl Display, note: impl Display) -> Self {
        writeln!(self.buffer, "**{line}** ({note})").expect("failed to write buffer");
        self
    }

    /// Add a top-level bullet: `- text`
    pub fn add_bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "- {line}").expect("failed to write buffer");
        self
    }

    /// Add a top-level key–value bullet: `- Key: Value`
    pub fn add_bullet_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "- {key}: {value}").expect("failed to write buffer");
        self
    }

    /// Add a bullet indented under an entry heading: `   - text`
    pub fn add_entry_bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{ENTRY_INDENT}- {line}").expect("failed to write buffer");
        self
    }

    /// Add a key–value bullet indented under an entry heading:
    /// `   - Key: Value`
    pub fn add_entry_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{ENTRY_INDENT}- {key}: {value}").expect("failed to write buffer");
        self
    }

    /// Add a second-level bullet: `     * text`
    pub fn add_nested_bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{NESTED_INDENT}* {line}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a paragraph: the text, then a blank line.
    pub fn add_paragraph(self, text: impl Display) -> Self {
        self.add_line(text).add_blank_line()
    }

    /// Append the output of another builder verbatim.
    pub fn append(mut self, other: PromptBuilder) -> Self {
        self.buffer.push_str(&other.buffer);
        self
    }

    /// Apply `f` to every item, threading the builder through.
    ///
    /// Handy for rendering collections without breaking the chain:
    ///
    /// ```rust
    /// use folio_prompt::builder::PromptBuilder;
    ///
    /// let md = PromptBuilder::new()
    ///     .for_each(["a", "b"], |b, item| b.add_bullet(item))
    ///     .finalize();
    /// assert_eq!(md, "- a\n- b\n");
    /// ```
    pub fn for_each<I, F>(self, items: I, mut f: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(Self, I::Item) -> Self,
    {
        items.into_iter().fold(self, |builder, item| f(builder, item))
    }

    /// Apply `f` only when `value` is present.
    pub fn maybe<T, F>(self, value: Option<T>, f: F) -> Self
    where
        F: FnOnce(Self, T) -> Self,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
