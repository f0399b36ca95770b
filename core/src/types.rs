/// Single coordinate axis used for grid rows and columns.
pub type Coord = u8;

/// Count type used for card counts and pair counts.
pub type CardCount = u16;

/// Stable 0-based index into deck order; the addressing key for a card slot.
///
/// Positions index a flat arena in row-major order, so they survive
/// serialization unchanged.
pub type Position = usize;

pub const fn mult(a: Coord, b: Coord) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}
