//! Events and control flow

use serde_json::Value;

use crate::input::{KeyboardEvent, MouseButtonEvent, MouseMotion};

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep running the host loop
    #[default]
    Continue,
    /// Leave the host loop
    Exit,
}

/// Events the host loop feeds into an [`EventDispatcher`](crate::EventDispatcher)
///
/// Each variant carries exactly the payload its handler receives.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The user asked to close the application
    Quit,
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
    MouseMotion(MouseMotion),
    MouseButtonDown(MouseButtonEvent),
    MouseButtonUp(MouseButtonEvent),
    /// The current music track finished playing
    MusicEnd,
    /// Application-defined event, routed by name
    Custom(CustomEvent),
}

/// A named application event with a free-form payload
#[derive(Clone, Debug, PartialEq)]
pub struct CustomEvent {
    pub name: String,
    pub data: Value,
}

impl CustomEvent {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// An event with no payload
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_custom_event_payload() {
        let event = CustomEvent::new("score", json!({ "points": 10 }));
        assert_eq!(event.name, "score");
        assert_eq!(event.data["points"], 10);
        assert_eq!(CustomEvent::named("tick").data, Value::Null);
    }
}
