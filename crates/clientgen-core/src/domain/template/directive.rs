//! Directive types: what a marker in a template turns into.
//!
//! A [`ReplacerTable`] is an ordered list of `(marker, Directive)` pairs.
//! Scalar directives replace every literal occurrence of their marker.
//! Block directives own the text between
//!
//! ```text
//! MARKER
//! ...content...
//! MARKER/**/
//! ```
//!
//! and replace the whole span (both markers and the sentinel) with whatever
//! the directive renders from the content.

use std::collections::HashMap;
use std::fmt;

use crate::domain::error::DomainError;

/// Closes a block when it directly follows the block's marker.
pub const END_SENTINEL: &str = "/**/\n";

/// A block handler: receives the captured content and the per-call context.
pub type BlockHandler<'a> =
    Box<dyn Fn(&str, &mut ExpansionContext) -> Result<String, DomainError> + 'a>;

/// What a marker expands to.
pub enum Directive<'a> {
    /// Scalar: replace every occurrence with this text.
    Literal(String),
    /// Scalar: replace every occurrence with a value captured earlier in the
    /// same expansion. Missing captures expand to the empty string.
    Captured(String),
    /// Block: keep the content when `true`, drop it when `false`.
    Conditional(bool),
    /// Block: store the trimmed content under the given slot, expand to
    /// nothing.
    Capture(String),
    /// Block: render the content once per item.
    Repeated(Repetition<'a>),
    /// Block: arbitrary handler. It must never re-emit its own marker pair.
    Custom(BlockHandler<'a>),
}

impl Directive<'_> {
    pub fn is_block(&self) -> bool {
        !matches!(self, Self::Literal(_) | Self::Captured(_))
    }
}

impl fmt::Debug for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Captured(slot) => f.debug_tuple("Captured").field(slot).finish(),
            Self::Conditional(keep) => f.debug_tuple("Conditional").field(keep).finish(),
            Self::Capture(slot) => f.debug_tuple("Capture").field(slot).finish(),
            Self::Repeated(rep) => f.debug_tuple("Repeated").field(rep).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ── Repetition ────────────────────────────────────────────────────────────────

/// A repeated block.
///
/// `prepare` tables run once over the block body before iteration (this is
/// where a value embedded in the body is captured and hoisted). Each table
/// in `items` is then applied to a fresh copy of the prepared body, and the
/// renderings are joined with `separator`.
#[derive(Debug, Default)]
pub struct Repetition<'a> {
    prepare: Vec<ReplacerTable<'a>>,
    items: Vec<ReplacerTable<'a>>,
    separator: String,
}

impl<'a> Repetition<'a> {
    pub fn new(items: Vec<ReplacerTable<'a>>) -> Self {
        Self {
            prepare: Vec::new(),
            items,
            separator: String::new(),
        }
    }

    pub fn prepare(mut self, table: ReplacerTable<'a>) -> Self {
        self.prepare.push(table);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn prepare_tables(&self) -> &[ReplacerTable<'a>] {
        &self.prepare
    }

    /// Slots written by capture blocks in the prepare tables.
    pub fn capture_slots(&self) -> impl Iterator<Item = &str> {
        self.prepare.iter().flat_map(|table| {
            table.entries().filter_map(|(_, directive)| match directive {
                Directive::Capture(slot) => Some(slot.as_str()),
                _ => None,
            })
        })
    }

    pub fn items(&self) -> &[ReplacerTable<'a>] {
        &self.items
    }

    pub fn joiner(&self) -> &str {
        &self.separator
    }
}

// ── ReplacerTable ─────────────────────────────────────────────────────────────

/// Ordered marker → directive table. Applied as one pass, entry by entry.
///
/// Re-inserting a marker replaces its directive but keeps its original
/// position.
#[derive(Debug, Default)]
pub struct ReplacerTable<'a> {
    entries: Vec<(String, Directive<'a>)>,
}

impl<'a> ReplacerTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, marker: impl Into<String>, directive: Directive<'a>) {
        let marker = marker.into();
        match self.entries.iter_mut().find(|(m, _)| *m == marker) {
            Some((_, existing)) => *existing = directive,
            None => self.entries.push((marker, directive)),
        }
    }

    pub fn with(mut self, marker: impl Into<String>, directive: Directive<'a>) -> Self {
        self.insert(marker, directive);
        self
    }

    pub fn literal(self, marker: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(marker, Directive::Literal(value.into()))
    }

    pub fn captured(self, marker: impl Into<String>, slot: impl Into<String>) -> Self {
        self.with(marker, Directive::Captured(slot.into()))
    }

    pub fn conditional(self, marker: impl Into<String>, keep: bool) -> Self {
        self.with(marker, Directive::Conditional(keep))
    }

    /// A block that is always stripped, e.g. authoring comments.
    pub fn strip(self, marker: impl Into<String>) -> Self {
        self.conditional(marker, false)
    }

    pub fn capture(self, marker: impl Into<String>, slot: impl Into<String>) -> Self {
        self.with(marker, Directive::Capture(slot.into()))
    }

    pub fn repeated(self, marker: impl Into<String>, repetition: Repetition<'a>) -> Self {
        self.with(marker, Directive::Repeated(repetition))
    }

    pub fn custom<F>(self, marker: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &mut ExpansionContext) -> Result<String, DomainError> + 'a,
    {
        self.with(marker, Directive::Custom(Box::new(handler)))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Directive<'a>)> {
        self.entries.iter().map(|(m, d)| (m.as_str(), d))
    }

    pub fn get(&self, marker: &str) -> Option<&Directive<'a>> {
        self.entries
            .iter()
            .find_map(|(m, d)| (m == marker).then_some(d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── ExpansionContext ──────────────────────────────────────────────────────────

/// Mutable state scoped to one generation call.
///
/// Capture blocks write into it; `Captured` scalars and custom handlers read
/// from it. Nothing in here outlives the call that created it.
#[derive(Debug, Clone, Default)]
pub struct ExpansionContext {
    captures: HashMap<String, String>,
    blocks_expanded: usize,
}

impl ExpansionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        self.captures.insert(slot.into(), value.into());
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.captures.get(slot).map(String::as_str)
    }

    pub fn release(&mut self, slot: &str) {
        self.captures.remove(slot);
    }

    /// Number of block spans replaced so far.
    pub fn blocks_expanded(&self) -> usize {
        self.blocks_expanded
    }

    pub(crate) fn record_block(&mut self) {
        self.blocks_expanded += 1;
    }
}
