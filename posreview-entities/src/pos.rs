use crate::id::PosId;

/// A point of sale that can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pos {
    pub id: PosId,
    pub name: String,
}
