/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Dial outline and hour labels.
    pub const FACE: ZIndex = ZIndex(0);
    /// Hour, minute and second hands.
    pub const HANDS: ZIndex = ZIndex(1);
}
