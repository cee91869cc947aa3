//! sitefx DOM - Document Object Model
//!
//! Arena-based document tree used by the page interaction layer.
//! Elements carry a cached id, a live class list and an inline style block,
//! which is all the page behaviors ever mutate.

mod classlist;
mod document;
mod error;
mod node;
mod scroll;
mod style;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use scroll::{
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollMetrics, ScrollRequest,
    ScrollTarget,
};
pub use style::InlineStyle;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check this is not the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
