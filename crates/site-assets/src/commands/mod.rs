//! One module per generated asset.

pub mod icon;
pub mod preview;
