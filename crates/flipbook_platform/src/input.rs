//! Keyboard and mouse payloads carried by [`Event`](crate::Event)

// ============================================================================
// Mouse
// ============================================================================

/// Pointer movement inside the window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMotion {
    /// X position in window coordinates
    pub x: f32,
    /// Y position in window coordinates
    pub y: f32,
    /// Horizontal movement since the previous motion event
    pub dx: f32,
    /// Vertical movement since the previous motion event
    pub dy: f32,
}

/// Mouse button press or release
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseButtonEvent {
    /// Which button changed state
    pub button: MouseButton,
    /// X position when the button changed
    pub x: f32,
    /// Y position when the button changed
    pub y: f32,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Wheel scrolled up (reported as a button by most toolkits)
    WheelUp,
    /// Wheel scrolled down
    WheelDown,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Keyboard
// ============================================================================

/// Key press or release
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that changed state
    pub key: Key,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Option on macOS
    pub alt: bool,
    /// Command on macOS, Windows key on Windows
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Key codes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),

    // Function keys, 1-based
    F(u8),

    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,

    Left,
    Right,
    Up,
    Down,

    Unknown,
}
