pub mod constants;
pub mod cue;
pub mod layout;
pub mod proximity;
pub mod visited;

pub use constants::*;
pub use cue::*;
pub use layout::*;
pub use proximity::*;
pub use visited::*;
