pub mod controller;
pub mod events;
pub mod session;

pub use controller::Widget;
pub use events::Direction;
pub use events::WidgetEvent;
pub use events::WidgetUpdate;
pub use session::SessionId;
