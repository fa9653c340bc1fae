//! Edge placement of sub-parts inside a composite control

/// Cells of padding applied on an outer edge
pub const EDGE_PADDING: u16 = 1;

/// Whether a sub-part sits on the first and/or last position of its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionInfo {
    pub is_first: bool,
    pub is_last: bool,
}

impl PositionInfo {
    /// Resolve from the index handed to the part by its composite
    ///
    /// An index outside `0..total` resolves to the neutral default.
    pub fn resolve(index: usize, total: usize) -> Self {
        if index >= total {
            tracing::warn!(index, total, "part index outside its container");
            return Self::default();
        }

        Self {
            is_first: index == 0,
            is_last: index + 1 == total,
        }
    }

    pub fn padding(self) -> EdgePadding {
        EdgePadding {
            left: if self.is_first { EDGE_PADDING } else { 0 },
            right: if self.is_last { EDGE_PADDING } else { 0 },
        }
    }
}

/// Horizontal padding derived from a [`PositionInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgePadding {
    pub left: u16,
    pub right: u16,
}

impl EdgePadding {
    #[inline]
    pub fn horizontal(self) -> u16 {
        self.left + self.right
    }
}
