//! GrammarFix: type a sentence, have a language model point out the
//! mistakes, and see them highlighted in place.
//!
//! - [`engine`] tokenizes text and aligns corrections onto it
//! - [`provider`] talks to the suggestion service
//! - [`session`] keeps the local "logged in" record
//! - [`app`] and [`ui`] drive the terminal interface

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod logging;
pub mod provider;
pub mod session;
pub mod ui;
