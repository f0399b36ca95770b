//! Native glue around the match engine: durable single-slot persistence, the
//! session driver that the menu issues commands through, and the grid-size
//! pairing rules for the menu dropdowns.

pub use menu::*;
pub use session::*;
pub use store::*;

mod menu;
mod session;
mod store;
