use serde::{Deserialize, Serialize};

/// The order columns are visited in within one row of an update pass
/// Alternated every frame so that ties between sliding left and sliding right
/// are not always won by the same side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl ScanDirection {
    /// The direction the following frame will use
    pub fn flipped(self) -> Self {
        match self {
            ScanDirection::LeftToRight => ScanDirection::RightToLeft,
            ScanDirection::RightToLeft => ScanDirection::LeftToRight,
        }
    }
}
