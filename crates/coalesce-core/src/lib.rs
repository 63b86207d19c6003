// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Coalesce Core
//!
//! Foundational math primitives for the Coalesce interval-set library.
//! This crate holds the reusable building blocks that the canonical set
//! crate is built on, with a focus on correctness at the boundaries and
//! ergonomic, generic APIs.
//!
//! ## Modules
//!
//! - `math`: Closed-open interval `[start, end)` primitives with checked
//!   construction, range-bound decomposition and validation, the overlap
//!   and adjacency predicates the set algebra relies on, interval
//!   difference, and conversions to/from `std::ops::Range`.
//!
//! ## Purpose
//!
//! Interval bookkeeping is riddled with off-by-one and boundary traps.
//! Concentrating the primitive and its validation in one place keeps the
//! higher-level set logic free of ad hoc bound arithmetic.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
