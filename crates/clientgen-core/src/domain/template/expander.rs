//! Directive-driven template expansion.
//!
//! Tables are applied in sequence, each over the previous result. Inside a
//! table, entries are processed in order:
//!
//! - scalar entries replace every occurrence of their marker;
//! - block entries run a fixed-point loop: find the first
//!   `MARKER\n<content>MARKER/**/\n` span (non-greedy content), replace it
//!   with the rendered block, and search again until nothing matches.
//!
//! The loop is capped so a handler that re-emits its own block surfaces as
//! [`DomainError::ExpansionDiverged`] instead of hanging. With strict
//! markers on, an opening marker left without a closing pair is reported as
//! [`DomainError::UnterminatedBlock`].

use std::ops::Range;

use regex::Regex;

use super::directive::{Directive, END_SENTINEL, ExpansionContext, ReplacerTable, Repetition};
use crate::domain::error::DomainError;

/// Upper bound on block replacements per marker per pass.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Applies [`ReplacerTable`]s to template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateExpander {
    max_iterations: usize,
    strict_markers: bool,
}

impl Default for TemplateExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateExpander {
    pub const fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            strict_markers: true,
        }
    }

    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// When `false`, unmatched block markers are left in the text.
    pub const fn strict_markers(mut self, strict: bool) -> Self {
        self.strict_markers = strict;
        self
    }

    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub const fn is_strict(&self) -> bool {
        self.strict_markers
    }

    /// Apply each table in order, each operating on the previous output.
    pub fn expand(
        &self,
        template: &str,
        tables: &[ReplacerTable<'_>],
        ctx: &mut ExpansionContext,
    ) -> Result<String, DomainError> {
        tables
            .iter()
            .try_fold(template.to_owned(), |code, table| self.apply(&code, table, ctx))
    }

    /// Apply a single table.
    pub fn apply(
        &self,
        template: &str,
        table: &ReplacerTable<'_>,
        ctx: &mut ExpansionContext,
    ) -> Result<String, DomainError> {
        let mut code = template.to_owned();

        for (marker, directive) in table.entries() {
            code = match directive {
                Directive::Literal(value) => code.replace(marker, value),
                Directive::Captured(slot) => code.replace(marker, ctx.get(slot).unwrap_or_default()),
                Directive::Conditional(keep) => self.expand_blocks(code, marker, ctx, |content, _| {
                    Ok(if *keep { content.to_owned() } else { String::new() })
                })?,
                Directive::Capture(slot) => self.expand_blocks(code, marker, ctx, |content, ctx| {
                    ctx.capture(slot.as_str(), content.trim());
                    Ok(String::new())
                })?,
                Directive::Repeated(repetition) => {
                    self.expand_blocks(code, marker, ctx, |content, ctx| {
                        self.render_repetition(repetition, content, ctx)
                    })?
                }
                Directive::Custom(handler) => self.expand_blocks(code, marker, ctx, |content, ctx| {
                    handler(content, ctx)
                })?,
            };
        }

        Ok(code)
    }

    /// Fixed-point replacement of every `marker` block in `code`.
    fn expand_blocks<F>(
        &self,
        mut code: String,
        marker: &str,
        ctx: &mut ExpansionContext,
        mut render: F,
    ) -> Result<String, DomainError>
    where
        F: FnMut(&str, &mut ExpansionContext) -> Result<String, DomainError>,
    {
        let pattern = block_pattern(marker);
        let mut iterations = 0;

        while let Some((span, content)) = next_block(&pattern, &code) {
            if iterations == self.max_iterations {
                return Err(DomainError::ExpansionDiverged {
                    marker: marker.to_owned(),
                    iterations,
                });
            }
            iterations += 1;

            let rendered = render(&content, ctx)?;
            code.replace_range(span, &rendered);
            ctx.record_block();
        }

        if self.strict_markers && code.contains(marker) {
            return Err(DomainError::UnterminatedBlock {
                marker: marker.to_owned(),
            });
        }

        Ok(code)
    }

    fn render_repetition(
        &self,
        repetition: &Repetition<'_>,
        body: &str,
        ctx: &mut ExpansionContext,
    ) -> Result<String, DomainError> {
        // Each block instance captures afresh.
        for slot in repetition.capture_slots() {
            ctx.release(slot);
        }
        let body = self.expand(body, repetition.prepare_tables(), ctx)?;

        let rendered = repetition
            .items()
            .iter()
            .map(|item| self.apply(&body, item, ctx))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rendered.join(repetition.joiner()))
    }
}

/// `MARKER\n(content)MARKER/**/\n`, content matched lazily across lines.
fn block_pattern(marker: &str) -> Regex {
    let escaped = regex::escape(marker);
    let source = format!(
        r"(?s){escaped}\n(.*?){escaped}{end}",
        end = regex::escape(END_SENTINEL)
    );
    // Every component is escaped, so the pattern is always valid.
    Regex::new(&source).expect("escaped block pattern is a valid regex")
}

fn next_block(pattern: &Regex, code: &str) -> Option<(Range<usize>, String)> {
    let caps = pattern.captures(code)?;
    let span = caps.get(0)?.range();
    let content = caps.get(1)?.as_str().to_owned();
    Some((span, content))
}
