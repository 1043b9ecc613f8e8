//! Common Ground - Core Values Engine
//!
//! This crate scores the "Core Values" quiz and turns the result into a
//! shareable profile: ranked values, a summary sentence, an optional
//! cross-partisan bridging statement and a context line.
//!
//! # Example
//!
//! ```
//! use common_ground::application::{CompleteQuizCommand, ValuesEngine};
//! use common_ground::domain::quiz::Answer;
//!
//! let engine = ValuesEngine::default();
//! let answers: Vec<Answer> = (0..10).map(|q| Answer::new(q, 0)).collect();
//!
//! let result = engine.complete_quiz_handler().handle(CompleteQuizCommand::new(answers));
//! assert_eq!(result.ranked.len(), 12);
//! println!("{}", result.profile.share_text());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
