//! Error types for bintree

use thiserror::Error;

use crate::node::{NodeId, Side};

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can come out of decoding, reconstruction, or manual construction. Searches that
/// don't find anything return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A codec token was neither the null marker nor a parsable key.
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken {
        /// Zero-based index of the token in the encoded string.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// The encoded tree starts with the null marker but carries more tokens.
    #[error("encoded tree has a null root followed by more tokens")]
    MissingRoot,

    /// Tokens remained after every node had consumed its two children.
    #[error("unexpected trailing tokens starting at position {position}")]
    TrailingTokens {
        /// Zero-based index of the first unused token.
        position: usize,
    },

    /// The two traversals handed to a reconstruction have different lengths.
    #[error("traversal lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first traversal.
        left: usize,
        /// Length of the second traversal.
        right: usize,
    },

    /// A key appears twice in a traversal that must hold unique keys.
    #[error("duplicate key at position {position}")]
    DuplicateKey {
        /// Position of the second occurrence.
        position: usize,
    },

    /// The traversals don't describe the same tree.
    #[error("traversals are inconsistent at position {position}")]
    Inconsistent {
        /// Position in the root-order traversal (preorder or postorder) that didn't fit.
        position: usize,
    },

    /// Tried to attach a child where one already exists.
    #[error("{side:?} child of {parent:?} is already occupied")]
    Occupied {
        /// The node that already has a child there.
        parent: NodeId,
        /// Which side was taken.
        side: Side,
    },
}
