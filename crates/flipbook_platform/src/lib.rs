//! Flipbook Platform Layer
//!
//! Typed input events and a dispatcher that routes them to handlers. The host
//! application translates its toolkit's native events into [`Event`] values
//! and hands them to an [`EventDispatcher`] once per frame.
//!
//! # Example
//!
//! ```
//! use flipbook_platform::prelude::*;
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher
//!     .add_custom("level-complete", |event| println!("{}", event.data))
//!     .unwrap();
//!
//! let flow = dispatcher.dispatch(&Event::Custom(CustomEvent::named("level-complete")));
//! assert_eq!(flow, ControlFlow::Continue);
//! ```

mod dispatcher;
mod error;
mod event;
mod input;

// Re-export all public types
pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, Result};
pub use event::{ControlFlow, CustomEvent, Event};
pub use input::{Key, KeyboardEvent, Modifiers, MouseButton, MouseButtonEvent, MouseMotion};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dispatcher::EventDispatcher;
    pub use crate::error::{DispatchError, Result};
    pub use crate::event::{ControlFlow, CustomEvent, Event};
    pub use crate::input::{
        Key, KeyboardEvent, Modifiers, MouseButton, MouseButtonEvent, MouseMotion,
    };
}
