// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state that is not tracked on the trail.

pub mod statistics;

pub use statistics::{Counters, Statistics};
