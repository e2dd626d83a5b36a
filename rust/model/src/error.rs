// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a model
#[derive(Error, Debug)]
pub enum Error {
    /// An index-based accessor was called with an index past the end of the
    /// backing array. A caller bug, surfaced immediately instead of silently
    /// defaulting.
    #[error("{what} index {index} out of range (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// An operation that requires a finalized model (every triangle carrying
    /// resolved material and normal indices) ran on an unfinalized one.
    #[error("model is not finalized: triangle {triangle} of mesh {mesh} has unresolved {what}")]
    UnfinalizedModel {
        mesh: usize,
        triangle: usize,
        what: &'static str,
    },
}
