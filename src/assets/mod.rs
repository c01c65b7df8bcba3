mod assets;
pub use assets::*;

mod elements_assets;
pub use elements_assets::*;
