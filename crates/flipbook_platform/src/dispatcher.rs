//! Event dispatcher
//!
//! Maps each [`Event`] kind to at most one handler. Handlers are typed per
//! kind: a key handler receives the [`KeyboardEvent`], a quit handler nothing.
//! Custom events are routed by their name.
//!
//! ```
//! use flipbook_platform::{ControlFlow, Event, EventDispatcher, Key, KeyboardEvent};
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.on_key_down(|event| println!("pressed {:?}", event.key));
//!
//! let flow = dispatcher.dispatch_all([
//!     Event::KeyDown(KeyboardEvent::new(Key::Space)),
//!     Event::Quit,
//! ]);
//! assert_eq!(flow, ControlFlow::Exit);
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::error::{DispatchError, Result};
use crate::event::{ControlFlow, CustomEvent, Event};
use crate::input::{KeyboardEvent, MouseButtonEvent, MouseMotion};

type QuitHandler = Box<dyn FnMut() -> ControlFlow>;
type KeyHandler = Box<dyn FnMut(&KeyboardEvent)>;
type MotionHandler = Box<dyn FnMut(&MouseMotion)>;
type ButtonHandler = Box<dyn FnMut(&MouseButtonEvent)>;
type NotifyHandler = Box<dyn FnMut()>;
type CustomHandler = Box<dyn FnMut(&CustomEvent)>;

/// Routes events to the handler registered for their kind
pub struct EventDispatcher {
    /// Exit on `Quit` when no quit handler is set
    exit_on_quit: bool,
    quit: Option<QuitHandler>,
    key_down: Option<KeyHandler>,
    key_up: Option<KeyHandler>,
    mouse_motion: Option<MotionHandler>,
    mouse_button_down: Option<ButtonHandler>,
    mouse_button_up: Option<ButtonHandler>,
    music_end: Option<NotifyHandler>,
    custom: FxHashMap<String, CustomHandler>,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher {
    /// Create a dispatcher that exits on `Quit` until a quit handler is set
    pub fn new() -> Self {
        Self {
            exit_on_quit: true,
            quit: None,
            key_down: None,
            key_up: None,
            mouse_motion: None,
            mouse_button_down: None,
            mouse_button_up: None,
            music_end: None,
            custom: FxHashMap::default(),
        }
    }

    /// Create a dispatcher that ignores `Quit` unless a handler is set
    pub fn without_default_quit() -> Self {
        Self {
            exit_on_quit: false,
            ..Self::new()
        }
    }

    pub fn on_quit<F>(&mut self, handler: F)
    where
        F: FnMut() -> ControlFlow + 'static,
    {
        self.quit = Some(Box::new(handler));
    }

    pub fn on_key_down<F>(&mut self, handler: F)
    where
        F: FnMut(&KeyboardEvent) + 'static,
    {
        self.key_down = Some(Box::new(handler));
    }

    pub fn on_key_up<F>(&mut self, handler: F)
    where
        F: FnMut(&KeyboardEvent) + 'static,
    {
        self.key_up = Some(Box::new(handler));
    }

    pub fn on_mouse_motion<F>(&mut self, handler: F)
    where
        F: FnMut(&MouseMotion) + 'static,
    {
        self.mouse_motion = Some(Box::new(handler));
    }

    pub fn on_mouse_button_down<F>(&mut self, handler: F)
    where
        F: FnMut(&MouseButtonEvent) + 'static,
    {
        self.mouse_button_down = Some(Box::new(handler));
    }

    pub fn on_mouse_button_up<F>(&mut self, handler: F)
    where
        F: FnMut(&MouseButtonEvent) + 'static,
    {
        self.mouse_button_up = Some(Box::new(handler));
    }

    pub fn on_music_end<F>(&mut self, handler: F)
    where
        F: FnMut() + 'static,
    {
        self.music_end = Some(Box::new(handler));
    }

    /// Register a handler for custom events named `name`
    ///
    /// A handler already registered under the same name is replaced.
    pub fn add_custom<F>(&mut self, name: impl Into<String>, handler: F) -> Result<()>
    where
        F: FnMut(&CustomEvent) + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(DispatchError::InvalidArgument(
                "custom event name cannot be empty".to_string(),
            ));
        }

        if self.custom.insert(name.clone(), Box::new(handler)).is_some() {
            warn!("EventDispatcher: replaced handler for custom event '{}'", name);
        } else {
            debug!("EventDispatcher: registered custom event '{}'", name);
        }
        Ok(())
    }

    pub fn remove_custom(&mut self, name: &str) -> Result<()> {
        self.custom
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DispatchError::NotFound(name.to_string()))
    }

    pub fn has_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// Run the handler for `event`, if any
    ///
    /// Only `Quit` can end the loop; every other event returns
    /// [`ControlFlow::Continue`].
    pub fn dispatch(&mut self, event: &Event) -> ControlFlow {
        trace!("EventDispatcher: {:?}", event);

        match event {
            Event::Quit => {
                return match self.quit.as_mut() {
                    Some(handler) => handler(),
                    None if self.exit_on_quit => ControlFlow::Exit,
                    None => ControlFlow::Continue,
                };
            }
            Event::KeyDown(key) => {
                if let Some(handler) = self.key_down.as_mut() {
                    handler(key);
                }
            }
            Event::KeyUp(key) => {
                if let Some(handler) = self.key_up.as_mut() {
                    handler(key);
                }
            }
            Event::MouseMotion(motion) => {
                if let Some(handler) = self.mouse_motion.as_mut() {
                    handler(motion);
                }
            }
            Event::MouseButtonDown(button) => {
                if let Some(handler) = self.mouse_button_down.as_mut() {
                    handler(button);
                }
            }
            Event::MouseButtonUp(button) => {
                if let Some(handler) = self.mouse_button_up.as_mut() {
                    handler(button);
                }
            }
            Event::MusicEnd => {
                if let Some(handler) = self.music_end.as_mut() {
                    handler();
                }
            }
            Event::Custom(custom) => {
                if let Some(handler) = self.custom.get_mut(&custom.name) {
                    handler(custom);
                }
            }
        }

        ControlFlow::Continue
    }

    /// Dispatch events in order, stopping at the first one that exits
    pub fn dispatch_all<I>(&mut self, events: I) -> ControlFlow
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            if self.dispatch(&event) == ControlFlow::Exit {
                return ControlFlow::Exit;
            }
        }
        ControlFlow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, MouseButton};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder() -> (Log, Log) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn test_default_quit_exits() {
        let mut dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.dispatch(&Event::Quit), ControlFlow::Exit);

        let mut dispatcher = EventDispatcher::without_default_quit();
        assert_eq!(dispatcher.dispatch(&Event::Quit), ControlFlow::Continue);
    }

    #[test]
    fn test_quit_handler_decides() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_quit(|| ControlFlow::Continue);
        assert_eq!(dispatcher.dispatch(&Event::Quit), ControlFlow::Continue);
    }

    #[test]
    fn test_typed_handlers_receive_payload() {
        let (log, sink) = recorder();
        let mut dispatcher = EventDispatcher::new();

        let keys = sink.clone();
        dispatcher.on_key_down(move |e| keys.borrow_mut().push(format!("down {:?}", e.key)));
        let keys = sink.clone();
        dispatcher.on_key_up(move |e| keys.borrow_mut().push(format!("up {:?}", e.key)));
        let motion = sink.clone();
        dispatcher.on_mouse_motion(move |m| {
            motion.borrow_mut().push(format!("move {},{}", m.x, m.y))
        });
        let buttons = sink.clone();
        dispatcher.on_mouse_button_down(move |b| {
            buttons.borrow_mut().push(format!("press {:?}", b.button))
        });
        dispatcher.on_music_end(move || sink.borrow_mut().push("music".to_string()));

        let flow = dispatcher.dispatch_all([
            Event::KeyDown(KeyboardEvent::new(Key::Char('w'))),
            Event::KeyUp(KeyboardEvent::new(Key::Char('w'))),
            Event::MouseMotion(MouseMotion {
                x: 3.0,
                y: 4.0,
                dx: 1.0,
                dy: 0.0,
            }),
            Event::MouseButtonDown(MouseButtonEvent {
                button: MouseButton::Left,
                x: 3.0,
                y: 4.0,
            }),
            Event::MusicEnd,
        ]);

        assert_eq!(flow, ControlFlow::Continue);
        assert_eq!(
            *log.borrow(),
            vec![
                "down Char('w')",
                "up Char('w')",
                "move 3,4",
                "press Left",
                "music"
            ]
        );
    }

    #[test]
    fn test_unhandled_events_ignored() {
        let mut dispatcher = EventDispatcher::new();
        let flow = dispatcher.dispatch_all([
            Event::MouseButtonUp(MouseButtonEvent {
                button: MouseButton::Right,
                x: 0.0,
                y: 0.0,
            }),
            Event::Custom(CustomEvent::named("nobody")),
        ]);
        assert_eq!(flow, ControlFlow::Continue);
    }

    #[test]
    fn test_dispatch_all_stops_at_exit() {
        let (log, sink) = recorder();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_music_end(move || sink.borrow_mut().push("music".to_string()));

        let flow = dispatcher.dispatch_all([Event::MusicEnd, Event::Quit, Event::MusicEnd]);
        assert_eq!(flow, ControlFlow::Exit);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_custom_events_routed_by_name() {
        let (log, sink) = recorder();
        let mut dispatcher = EventDispatcher::new();
        dispatcher
            .add_custom("score", move |event| {
                sink.borrow_mut().push(event.data["points"].to_string())
            })
            .unwrap();

        for (name, points) in [("score", 5), ("other", 9)] {
            let event = CustomEvent::new(name, json!({ "points": points }));
            dispatcher.dispatch(&Event::Custom(event));
        }
        assert_eq!(*log.borrow(), vec!["5"]);
    }

    #[test]
    fn test_custom_registration_rules() {
        let mut dispatcher = EventDispatcher::new();
        assert!(matches!(
            dispatcher.add_custom("", |_| {}),
            Err(DispatchError::InvalidArgument(_))
        ));

        let (log, sink) = recorder();
        dispatcher.add_custom("ping", |_| {}).unwrap();
        dispatcher
            .add_custom("ping", move |_| {
                sink.borrow_mut().push("second".to_string())
            })
            .unwrap();
        dispatcher.dispatch(&Event::Custom(CustomEvent::named("ping")));
        assert_eq!(*log.borrow(), vec!["second"]);

        dispatcher.remove_custom("ping").unwrap();
        assert!(!dispatcher.has_custom("ping"));
        assert_eq!(
            dispatcher.remove_custom("ping"),
            Err(DispatchError::NotFound("ping".to_string()))
        );
    }
}
