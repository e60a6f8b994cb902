// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of partitions and tableaux, and Kostka-Foulkes polynomials.
//!
//! # Architecture
//!
//! ## Generators
//!
//! Every combinatorial family is produced by a lazy iterator that owns its
//! working buffers and steps with a successor algorithm:
//! - [`partition`]: all partitions (ZS1), partitions into bounded or distinct
//!   parts (Riha-James), multiset partitions (Knuth's Algorithm M)
//! - [`tableau`]: semistandard tableaux with bounded entries or fixed weight,
//!   standard tableaux, and the Robinson-Schensted correspondence
//!
//! ## Kostka-Foulkes search
//!
//! [`kostka::kostka_polynomial`] sums the fermionic formula over admissible
//! configurations. The configurations are found by a backtracking search
//! engine driven by predicates:
//! - [`trail`]: registers with O(1) checkpoint and rewind
//! - [`engine`]: WAM-style try/retry execution with suspend and resume
//! - [`context`]: the state of one search
//! - [`predicates`]: the configuration chooser and terminal predicates
//! - [`state`]: search statistics
//!
//! ## Arithmetic
//!
//! [`ring`] provides the `Ring` abstraction, integer polynomials, and
//! q-analogues (quantum numbers and Gaussian binomials).
//!
//! # Example
//!
//! ```
//! use kostka_search::{kostka_polynomial, Partition};
//!
//! let lambda = Partition::new(vec![3, 1]).unwrap();
//! let mu = Partition::new(vec![1, 1, 1, 1]).unwrap();
//! let k = kostka_polynomial(&lambda, &mu).unwrap();
//! assert_eq!(k.to_string(), "t^3 + t^4 + t^5");
//! ```
//!
//! # References
//!
//! - Zoghbi, A. and Stojmenovic, I. (1998). "Fast algorithms for generating integer partitions."
//! - Riha, W. and James, K. R. (1976). "Algorithm 29: Efficient algorithms for doing arithmetic with partitions."
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 4A, Algorithm 7.1.2.5M.
//! - Kirillov, A. N. and Reshetikhin, N. Yu. (1988). "Bethe ansatz and the combinatorics of Young tableaux."

pub mod context;
pub mod engine;
pub mod error;
pub mod kostka;
pub mod partition;
pub mod predicates;
pub mod ring;
pub mod state;
pub mod tableau;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{CombinatoricsError, Result};
pub use kostka::{kostka_polynomial, kostka_polynomial_with, KostkaMethod};
pub use partition::{partitions, Partition};
pub use ring::Polynomial;
pub use tableau::Tableau;
pub use trail::Trail;
