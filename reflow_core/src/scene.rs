// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene retention and frame diffing.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// One backend operation produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that did not exist in the previous frame: create its element.
    Enter {
        /// The mark's stable id.
        id: MarkId,
        /// The mark's kind (stable for the lifetime of the id).
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// The payload to render.
        new: MarkPayload,
        /// Geometric bounds, when the payload has intrinsic bounds.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or z-order changed: update its element's
    /// attributes in place.
    Update {
        /// The mark's stable id.
        id: MarkId,
        /// Render order after the update.
        new_z_index: i32,
        /// The payload after the update.
        new: MarkPayload,
    },
    /// A mark absent from the new frame: remove its element.
    Exit {
        /// The mark's stable id.
        id: MarkId,
    },
}

/// A retained set of marks that diffs successive frames.
///
/// Renderers emit the full mark list every frame; the scene compares it with
/// the retained previous frame and reports only what changed. Ticking the
/// same frame twice therefore produces no diffs, which is what makes chart
/// `resize()` idempotent from the backend's point of view.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene retains no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained z-index and payload for a mark, if present.
    pub fn get(&self, id: MarkId) -> Option<(i32, &MarkPayload)> {
        self.marks.get(&id).map(|(z, payload)| (*z, payload))
    }

    /// Returns all retained mark ids sorted by `(z_index, id)`.
    ///
    /// Backends that repaint from scratch should draw in this order; the id
    /// tie-break keeps paint order deterministic across frames.
    pub fn draw_order(&self) -> Vec<MarkId> {
        let mut ids: Vec<MarkId> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z, _payload) = &self.marks[id];
            (*z, *id)
        });
        ids
    }

    /// Replaces the retained frame with `frame` and returns the diffs.
    ///
    /// Frames must not contain two marks with the same id; when they do, the
    /// last occurrence wins.
    pub fn tick(&mut self, frame: Vec<Mark>) -> Vec<MarkDiff> {
        let mut out = Vec::new();
        let mut seen: SmallVec<[MarkId; 32]> = SmallVec::new();

        for mark in frame {
            seen.push(mark.id);
            match self.marks.entry(mark.id) {
                Entry::Occupied(mut e) => {
                    let (z, payload) = e.get();
                    if *z != mark.z_index || *payload != mark.payload {
                        out.push(MarkDiff::Update {
                            id: mark.id,
                            new_z_index: mark.z_index,
                            new: mark.payload.clone(),
                        });
                        *e.get_mut() = (mark.z_index, mark.payload);
                    }
                }
                Entry::Vacant(e) => {
                    out.push(MarkDiff::Enter {
                        id: mark.id,
                        kind: mark.payload.kind(),
                        z_index: mark.z_index,
                        new: mark.payload.clone(),
                        bounds: mark.payload.bounds(),
                    });
                    e.insert((mark.z_index, mark.payload));
                }
            }
        }

        let mut exited: SmallVec<[MarkId; 8]> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        exited.sort_unstable();
        for id in exited {
            self.marks.remove(&id);
            out.push(MarkDiff::Exit { id });
        }

        out
    }
}
