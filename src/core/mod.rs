// Core module
// Foundational state, tab domain and event handling

pub mod app;
pub mod events;
pub mod tab;

pub use app::App;
pub use events::{AppEvent, EventHandler};
pub use tab::{descriptors, SimulationTab, TabDescriptor};
