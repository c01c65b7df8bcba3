use gpui::{App, ClickEvent, Window};

mod icon;
pub use icon::*;

mod list_item;
pub use list_item::*;

pub mod search_bar;
pub use search_bar::{SearchBar, SearchBarEvent};

mod featured_tile;
pub use featured_tile::*;

pub(crate) type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
