pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod sets;
pub mod table;
pub mod time;

pub use formatting::{fmt_set, fmt_weight};
