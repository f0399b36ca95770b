use parejita_core::Coord;

/// Grid axis choices offered by the menu dropdowns.
pub const AXIS_OPTIONS: [Coord; 6] = [2, 3, 4, 5, 6, 7];

/// Restricted choices when the other axis is odd.
pub const EVEN_AXIS_OPTIONS: [Coord; 3] = [2, 4, 6];

/// Options the partner dropdown may offer once one axis is `selected`.
///
/// An odd axis forces the other to be even so the card count stays whole
/// pairs; an even axis allows everything.
pub fn partner_options(selected: Coord) -> &'static [Coord] {
    if selected % 2 != 0 {
        &EVEN_AXIS_OPTIONS
    } else {
        &AXIS_OPTIONS
    }
}

/// Index to select after repopulating a dropdown: the previous value when it
/// is still offered, the first option otherwise.
pub fn retained_index(options: &[Coord], previous: Coord) -> usize {
    options.iter().position(|&option| option == previous).unwrap_or(0)
}
