//! Filter subsystem: state, predicate, persistence, query parameters,
//! renderer registry and the range-slider drag engine

mod persist;
mod predicate;
mod query;
mod registry;
mod slider;
mod state;
mod store;
mod types;

pub use persist::{BrowserStorage, FilterError, FilterStorage, MemoryStorage, load_state, save_state};
pub use predicate::{filter_games, matches};
pub use query::{ApiParams, SearchQuery, api_params};
pub use registry::{Keyed, Registry};
pub use slider::{DragEngine, DragHandle, SliderDomain, track_percent};
pub use state::{FilterManager, active_dimensions, defaults_for, summarize};
pub use store::FilterStore;
pub use types::{DateRange, FilterConfig, FilterState, FilterType, FilterValue, ScoreRange};
