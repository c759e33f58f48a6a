pub mod adapters;
mod dynamic_filter;
mod filter_panel;
mod game_list;

pub use adapters::{FilterProps, FilterRegistry, FilterRenderer, default_registry};
pub use dynamic_filter::DynamicFilter;
pub use filter_panel::FilterPanel;
pub use game_list::{CardRegistry, CardRenderer, GameList, default_card_registry};
