pub mod layout;
pub mod params;

pub use layout::{layout_frame, DrawCmd, Paint};
pub use params::GameParameters;
