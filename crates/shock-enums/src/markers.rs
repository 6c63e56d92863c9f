use bitflags::bitflags;

bitflags! {
    /// What a declared type was declared as.
    ///
    /// Plain enums carry `ENUM`; flags enums carry `ENUM | FLAGS_ENUM`, so
    /// `contains(ENUM)` answers "is this any kind of enum".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DeclarationMarkers: u8 {
        const ENUM = 1 << 0;
        const FLAGS_ENUM = 1 << 1;
    }
}
