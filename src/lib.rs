pub mod components;

pub mod theme;

pub mod icons;

pub mod platform;

mod utils;
pub use utils::*;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
