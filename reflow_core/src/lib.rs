// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark scene for responsive charts.
//!
//! Chart renderers in `reflow_charts` are pure: on every resize they emit the
//! *full* list of marks for the current container size. This crate turns that
//! into backend work:
//! - **Marks** are stable-identity visual elements (rects, circles, paths,
//!   text) with explicit z-order.
//! - **[`Scene::tick`]** diffs a freshly emitted frame against the previous
//!   one into `Enter`/`Update`/`Exit` diffs, which map one-to-one onto a
//!   drawing backend's create-element / set-attribute / remove-element calls.
//!
//! Text shaping and event wiring are out of scope; text marks store unshaped
//! strings and backends own input subscription.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    CircleMark, Mark, MarkId, MarkKind, MarkPayload, PathMark, RectMark, RoundRectMark, TextAnchor,
    TextBaseline, TextMark,
};
pub use scene::{MarkDiff, Scene};
