//! Animation manager
//!
//! Owns a set of named animations and advances them together once per frame.
//! The host loop calls [`AnimationManager::play_all`] with the frame delta and
//! then asks for the frame to draw with [`AnimationManager::current_frame_of`].
//!
//! ```
//! use flipbook_animation::{Animation, AnimationManager, Durations};
//!
//! let mut manager = AnimationManager::new();
//! let walk = Animation::new(vec!["w0", "w1", "w2"], Durations::uniform(4.0)).unwrap();
//! manager.add("walk", walk).unwrap();
//!
//! manager.play_all(5.0).unwrap();
//! assert_eq!(*manager.current_frame_of("walk").unwrap(), "w1");
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::animation::Animation;
use crate::error::{validate_elapsed, AnimationError, Result};

/// Name-keyed collection of animations, iterated in insertion order
#[derive(Clone, Debug)]
pub struct AnimationManager<F> {
    animations: IndexMap<String, Animation<F>>,
}

impl<F> Default for AnimationManager<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> AnimationManager<F> {
    pub fn new() -> Self {
        Self {
            animations: IndexMap::new(),
        }
    }

    /// Register `animation` under `name`
    ///
    /// Fails with [`AnimationError::InvalidArgument`] for an empty name and with
    /// [`AnimationError::DuplicateKey`] if the name is taken. A rejected add
    /// leaves the existing entry in place.
    pub fn add(&mut self, name: impl Into<String>, animation: Animation<F>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(AnimationError::InvalidArgument(
                "animation name cannot be empty".to_string(),
            ));
        }
        if self.animations.contains_key(&name) {
            return Err(AnimationError::DuplicateKey(name));
        }

        debug!(
            "AnimationManager: added '{}' ({} frames, cycle {})",
            name,
            animation.frame_count(),
            animation.total_duration()
        );
        self.animations.insert(name, animation);
        Ok(())
    }

    /// Remove and return the animation registered under `name`
    pub fn remove(&mut self, name: &str) -> Result<Animation<F>> {
        // shift_remove keeps the remaining entries in insertion order
        let animation = self
            .animations
            .shift_remove(name)
            .ok_or_else(|| AnimationError::NotFound(name.to_string()))?;
        debug!("AnimationManager: removed '{}'", name);
        Ok(animation)
    }

    pub fn get(&self, name: &str) -> Result<&Animation<F>> {
        self.animations
            .get(name)
            .ok_or_else(|| AnimationError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Animation<F>> {
        self.animations
            .get_mut(name)
            .ok_or_else(|| AnimationError::NotFound(name.to_string()))
    }

    /// The frame currently shown by the animation registered under `name`
    pub fn current_frame_of(&self, name: &str) -> Result<&F> {
        self.get(name).map(Animation::current_frame)
    }

    /// Advance every animation by `elapsed`
    ///
    /// `elapsed` is validated once before any animation is touched, so the
    /// batch either advances completely or not at all.
    pub fn play_all(&mut self, elapsed: f32) -> Result<()> {
        validate_elapsed(elapsed)?;

        trace!(
            "AnimationManager: advancing {} animations by {}",
            self.animations.len(),
            elapsed
        );
        for animation in self.animations.values_mut() {
            animation.advance(elapsed);
        }
        Ok(())
    }

    /// Put every animation back on its starting frame
    pub fn reset_all(&mut self) {
        for animation in self.animations.values_mut() {
            animation.reset();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Animation<F>)> {
        self.animations
            .iter()
            .map(|(name, animation)| (name.as_str(), animation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Durations;

    fn abc() -> Animation<char> {
        Animation::new(vec!['A', 'B', 'C'], Durations::per_frame([2.0, 3.0, 1.0])).unwrap()
    }

    fn xy() -> Animation<char> {
        Animation::new(vec!['X', 'Y'], Durations::uniform(1.0)).unwrap()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut manager = AnimationManager::new();
        manager.add("abc", abc()).unwrap();
        manager.add("xy", xy()).unwrap();

        assert_eq!(manager.len(), 2);
        assert!(manager.contains("abc"));
        assert_eq!(manager.get("xy").unwrap().frame_count(), 2);
        assert_eq!(*manager.current_frame_of("abc").unwrap(), 'A');
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut manager = AnimationManager::new();
        let err = manager.add("", abc()).unwrap_err();
        assert!(matches!(err, AnimationError::InvalidArgument(_)));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let mut manager = AnimationManager::new();
        manager.add("walk", abc()).unwrap();

        let err = manager.add("walk", xy()).unwrap_err();
        assert_eq!(err, AnimationError::DuplicateKey("walk".to_string()));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get("walk").unwrap().frame_count(), 3);
    }

    #[test]
    fn test_remove() {
        let mut manager = AnimationManager::new();
        manager.add("a", abc()).unwrap();
        manager.add("b", xy()).unwrap();
        manager.add("c", abc()).unwrap();

        let removed = manager.remove("b").unwrap();
        assert_eq!(*removed.current_frame(), 'X');
        assert_eq!(manager.names().collect::<Vec<_>>(), vec!["a", "c"]);

        assert_eq!(
            manager.remove("b").unwrap_err(),
            AnimationError::NotFound("b".to_string())
        );
    }

    #[test]
    fn test_missing_name_not_found() {
        let mut manager = AnimationManager::<char>::new();
        assert!(matches!(
            manager.get("ghost"),
            Err(AnimationError::NotFound(_))
        ));
        assert!(matches!(
            manager.get_mut("ghost"),
            Err(AnimationError::NotFound(_))
        ));
        assert!(matches!(
            manager.current_frame_of("ghost"),
            Err(AnimationError::NotFound(_))
        ));
    }

    #[test]
    fn test_play_all_advances_every_animation() {
        let mut manager = AnimationManager::new();
        manager.add("abc", abc()).unwrap();
        manager.add("xy", xy()).unwrap();

        manager.play_all(3.0).unwrap();
        assert_eq!(*manager.current_frame_of("abc").unwrap(), 'B');
        // xy: clock 3 % 2 = 1, boundary shows X
        assert_eq!(*manager.current_frame_of("xy").unwrap(), 'X');

        manager.play_all(0.5).unwrap();
        assert_eq!(*manager.current_frame_of("xy").unwrap(), 'Y');
    }

    #[test]
    fn test_play_all_negative_is_atomic() {
        let mut manager = AnimationManager::new();
        manager.add("abc", abc()).unwrap();
        manager.add("xy", xy()).unwrap();
        manager.play_all(1.5).unwrap();

        let before: Vec<f32> = manager.iter().map(|(_, a)| a.clock()).collect();
        let err = manager.play_all(-1.0).unwrap_err();
        assert!(matches!(err, AnimationError::InvalidArgument(_)));

        let after: Vec<f32> = manager.iter().map(|(_, a)| a.clock()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_play_all_matches_individual_play() {
        let mut manager = AnimationManager::new();
        manager.add("abc", abc()).unwrap();

        let mut solo = abc();
        for elapsed in [0.0, 1.0, 2.5, 7.0, 13.0] {
            manager.play_all(elapsed).unwrap();
            solo.play(elapsed).unwrap();
            let managed = manager.get("abc").unwrap();
            assert_eq!(managed.clock(), solo.clock());
            assert_eq!(managed.current_index(), solo.current_index());
        }
    }

    #[test]
    fn test_get_mut_and_reset_all() {
        let mut manager = AnimationManager::new();
        manager.add("abc", abc()).unwrap();

        manager.get_mut("abc").unwrap().seek(2).unwrap();
        assert_eq!(*manager.current_frame_of("abc").unwrap(), 'C');

        manager.reset_all();
        assert_eq!(*manager.current_frame_of("abc").unwrap(), 'A');
        assert_eq!(manager.get("abc").unwrap().clock(), 0.0);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut manager = AnimationManager::new();
        for name in ["zeta", "alpha", "mid"] {
            manager.add(name, xy()).unwrap();
        }
        assert_eq!(
            manager.names().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid"]
        );
    }
}
