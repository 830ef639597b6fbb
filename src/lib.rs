//! Changelings
//!
//! Solves the word-ladder puzzle: the shortest chain of dictionary words from a start word to a
//! target word, changing exactly one letter per step.
//!
//! # Quick Start
//!
//! ```rust
//! use changelings::index::Language;
//! use changelings::solver::solve;
//!
//! // Index a dictionary
//! let language = Language::new(["cat", "cot", "cog", "dog", "dot"]);
//!
//! // Find the shortest ladder
//! let ladder = solve(&language, "cat", "dog").unwrap().unwrap();
//! assert_eq!(ladder.steps(), 3);
//! println!("{ladder}");
//! ```

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Neighbor index
pub mod index;

// Shortest-ladder search
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
