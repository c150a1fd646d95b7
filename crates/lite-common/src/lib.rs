pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, PlatformError};
pub use events::{Event, EventBus, SessionSnapshot, SidebarSnapshot, TabSnapshot};
pub use types::{Rect, TabId, WindowSize};
