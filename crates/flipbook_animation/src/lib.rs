//! Flipbook Animation
//!
//! Frame-by-frame sprite animation driven by a host render loop.
//!
//! # Features
//!
//! - **Animations**: Looping frame sequences with per-frame display durations
//! - **Duration Correction**: Partial duration lists are completed or truncated to fit
//! - **Animation Manager**: Name-keyed collection advanced in lockstep each tick
//! - **Sprite Sheets**: Grid slicing into frame regions
//! - **Scene Config**: TOML descriptions of a sheet and its animations
//!
//! # Example
//!
//! ```
//! use flipbook_animation::{Animation, AnimationManager, Durations, Region, SpriteSheet};
//!
//! let frames = SpriteSheet::new(128, 32).slice_columns(4).unwrap();
//! let run = Animation::new(frames, Durations::per_frame([2.0, 3.0, 3.0, 2.0])).unwrap();
//!
//! let mut manager = AnimationManager::new();
//! manager.add("run", run).unwrap();
//!
//! // Once per rendered frame
//! manager.play_all(3.0).unwrap();
//! let frame: &Region = manager.current_frame_of("run").unwrap();
//! assert_eq!(frame.x, 32);
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod manager;
pub mod sheet;

pub use animation::{Animation, Durations};
pub use config::{AnimationConfig, SceneConfig, SheetConfig};
pub use error::{AnimationError, Result};
pub use manager::AnimationManager;
pub use sheet::{Region, SliceOrder, SpriteSheet};
