use bitflags::bitflags;

bitflags! {
    /// Tooltip sections the client should hide for an item.
    ///
    /// Each bit suppresses one block of tooltip text; none of them change how the
    /// item behaves.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemFlags: u16 {
        const HIDE_ENCHANTS           = 1 << 0;
        const HIDE_ATTRIBUTES         = 1 << 1;
        const HIDE_UNBREAKABLE        = 1 << 2;
        const HIDE_DESTROYS           = 1 << 3;
        const HIDE_PLACED_ON          = 1 << 4;
        const HIDE_ADDITIONAL_TOOLTIP = 1 << 5;
        const HIDE_DYE                = 1 << 6;
        const HIDE_ARMOR_TRIM         = 1 << 7;
    }
}
