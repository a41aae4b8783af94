use bevy_ecs::prelude::Component;

/// Playback state of a sprite-sheet animation.
///
/// `animation_key` names an entry of the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Play `key` unless it is already the active animation.
    ///
    /// Switching restarts playback from the first frame. Returns true when
    /// the animation changed.
    pub fn play(&mut self, key: &str) -> bool {
        if self.animation_key == key {
            return false;
        }
        self.animation_key.clear();
        self.animation_key.push_str(key);
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        true
    }
}
