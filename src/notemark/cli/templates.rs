//! # CLI Templates Module
//!
//! Terminal output goes through the outstanding crate, which renders
//! minijinja templates with named styles from the theme.
//!
//! Templates live in stand-alone files — separating them from code makes
//! them easier and safer to edit and diff — and are included here as string
//! constants.
//!
//! Two house rules, learned the hard way:
//!
//! 1. Whitespace is explicit. Every block tag trims what follows it, and
//!    all indentation and padding arrives precomputed from Rust, so the
//!    templates never fight minijinja over blank lines.
//! 2. Templates branch on what to output, not how to style it. Style
//!    selection that needs logic happens in Rust and is passed in as a
//!    style name.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const TOPIC_TEMPLATE: &str = include_str!("templates/topic.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const DEMO_TEMPLATE: &str = include_str!("templates/demo.tmp");
