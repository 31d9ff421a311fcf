//! Template expansion engine.
//!
//! Supports scalar substitution, single-level conditional blocks, repeated
//! blocks, and capture blocks whose value is hoisted out of a repeated
//! region before it is iterated. Nothing else: no nested loops, no
//! expressions.

pub mod directive;
pub mod expander;

pub use directive::{
    BlockHandler, Directive, END_SENTINEL, ExpansionContext, ReplacerTable, Repetition,
};
pub use expander::{DEFAULT_MAX_ITERATIONS, TemplateExpander};
