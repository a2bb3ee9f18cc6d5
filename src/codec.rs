//! The level-order text form of a tree.
//!
//! Keys are written breadth first, separated by [`SEPARATOR`], with [`NULL_TOKEN`] standing in
//! for every absent child of a present node. The empty tree is the empty string. `Tree`
//! implements [`Display`](fmt::Display) and [`FromStr`] with this format, so
//! `tree.to_string().parse()` gives back an equal tree.
//!
//! Keys must not display as [`NULL_TOKEN`] or contain [`SEPARATOR`]. Decoding only accepts a key
//! written exactly the way `Display` writes it, so `"+5"`, `"007"` and `"-0"` are
//! [`Error::InvalidToken`] for integer keys. Every accepted string is the encoding of its tree,
//! up to trailing null markers.
//!
//! # Examples
//!
//! ```
//! use bintree::{Error, Tree};
//!
//! let tree: Tree<i32> = "1,2,3,N,N,4,5".parse().unwrap();
//! assert_eq!(tree.preorder(), vec![1, 2, 3, 4, 5]);
//!
//! // Encoding spells out the absent children of the last level too.
//! assert_eq!(tree.encode(), "1,2,3,N,N,4,5,N,N,N,N");
//!
//! assert_eq!(
//!     "1,x".parse::<Tree<i32>>(),
//!     Err(Error::InvalidToken { position: 1, token: "x".to_string() })
//! );
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};
use crate::node::{NodeId, Side, Tree};

/// Marks an absent child.
pub const NULL_TOKEN: &str = "N";

/// Sits between consecutive tokens.
pub const SEPARATOR: char = ',';

/// Reads one token as an optional key. The key has to display as the token itself.
fn parse_token<K: FromStr + fmt::Display>(position: usize, token: &str) -> Result<Option<K>> {
    if token == NULL_TOKEN {
        return Ok(None);
    }
    let invalid = || Error::InvalidToken {
        position,
        token: token.to_string(),
    };
    let key: K = token.parse().map_err(|_| invalid())?;
    if key.to_string() != token {
        return Err(invalid());
    }
    Ok(Some(key))
}

impl<K: fmt::Display> Tree<K> {
    /// The level-order text form. Same as `to_string()`.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl<K: FromStr + fmt::Display> Tree<K> {
    /// Parses the level-order text form.
    ///
    /// Tokens are handed out two at a time to the present nodes in breadth-first order. Running
    /// out of tokens early just leaves the remaining children absent, so `"1,2"` is a root with a
    /// left child. Tokens left over once every node has had its turn are an error, and so is a
    /// null root followed by anything. A key token must be spelled the way the key displays.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Tree};
    ///
    /// let tree = Tree::<i32>::decode("1,N,2").unwrap();
    /// assert_eq!(tree.level_order(), vec![vec![1], vec![2]]);
    ///
    /// assert!(Tree::<i32>::decode("").unwrap().is_empty());
    /// assert!(Tree::<i32>::decode("N").unwrap().is_empty());
    /// assert_eq!(Tree::<i32>::decode("N,1"), Err(Error::MissingRoot));
    /// assert_eq!(
    ///     Tree::<i32>::decode("1,N,N,2"),
    ///     Err(Error::TrailingTokens { position: 3 })
    /// );
    /// assert_eq!(
    ///     Tree::<i32>::decode("1,+2"),
    ///     Err(Error::InvalidToken { position: 1, token: "+2".to_string() })
    /// );
    /// ```
    pub fn decode(encoded: &str) -> Result<Self> {
        let mut tree = Tree::new();
        if encoded.is_empty() {
            return Ok(tree);
        }
        let mut tokens = encoded.split(SEPARATOR).enumerate();
        let Some((position, token)) = tokens.next() else {
            return Ok(tree);
        };
        let Some(key) = parse_token(position, token)? else {
            return match tokens.next() {
                Some(_) => Err(Error::MissingRoot),
                None => Ok(tree),
            };
        };
        let root = tree.alloc(key);
        tree.set_root(Some(root));

        let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
        'nodes: while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                let Some((position, token)) = tokens.next() else {
                    break 'nodes;
                };
                if let Some(key) = parse_token(position, token)? {
                    let child = tree.alloc(key);
                    tree.link(parent, side, Some(child));
                    queue.push_back(child);
                }
            }
        }
        if let Some((position, _)) = tokens.next() {
            return Err(Error::TrailingTokens { position });
        }
        trace!(nodes = tree.len(), "decoded tree");
        Ok(tree)
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut queue: VecDeque<Option<NodeId>> = self.root().map(Some).into_iter().collect();
        let mut first = true;
        while let Some(slot) = queue.pop_front() {
            if !first {
                write!(f, "{}", SEPARATOR)?;
            }
            first = false;
            match slot {
                Some(id) => {
                    let node = self.node(id);
                    write!(f, "{}", node.key())?;
                    queue.push_back(node.left());
                    queue.push_back(node.right());
                }
                None => f.write_str(NULL_TOKEN)?,
            }
        }
        Ok(())
    }
}

impl<K: FromStr + fmt::Display> FromStr for Tree<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
