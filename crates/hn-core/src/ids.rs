use core::fmt;
use core::num::NonZeroU32;

/// Compact handle for objects stored in index-addressed tables.
///
/// Stored as `NonZeroU32` so `Option<Id>` costs nothing extra; the niche
/// matters because predecessor and parent arrays hold one `Option<NodeId>`
/// per node on big networks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Wrap a 0-based table index (stored internally as index + 1).
    pub fn from_index(index: u32) -> Self {
        // index + 1 cannot be zero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// The 0-based table index this handle points at.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Handle into a graph's node table.
pub type NodeId = Id;
