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

//! Coalesce‑Set: canonical integer interval sets
//!
//! High‑level crate that implements an ordered, self‑coalescing set of
//! integers stored as a minimal list of disjoint half‑open intervals.
//! Adding a range performs a set union that also merges touching
//! neighbors; removing a range performs a set difference that clips,
//! splits, or deletes the stored intervals it overlaps.
//!
//! Core flow
//! - Create a `set::IntervalSet<T>` (empty, or with preallocated capacity).
//! - Mutate it through `add` and `remove`, which validate their range
//!   argument and re-establish canonical form before returning.
//! - Read it back through `intervals()` or serialize it with `to_text()`.
//!
//! Design highlights
//! - Canonical invariant: after every successful call the stored sequence
//!   is sorted by start, strictly disjoint with a gap between neighbors,
//!   and free of empty members, so it is the minimal representation of
//!   its contents.
//! - Fail-safe mutation: a call that returns an error never changes the
//!   stored sequence.
//! - Deterministic given deterministic inputs; no interior mutability.
//!
//! Module map
//! - `set`: the `IntervalSet` container, its removal errors, and the
//!   text serialization.

pub mod set;
