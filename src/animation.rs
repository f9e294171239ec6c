/// Frame timer for short procedural animations
///
/// Tracks which frame of an animation is showing, advanced by frame delta
/// time. What a frame looks like is up to the owner; the player only hands
/// out indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlayer {
    name: String,
    frame_count: usize,
    frame_duration: f32,
    loop_animation: bool,
    elapsed: f32,
    current_frame: usize,
    finished: bool,
}

impl AnimationPlayer {
    /// Creates a player parked on its last frame, so nothing shows until the
    /// first [`reset`](Self::reset)
    pub fn new(name: &str, frame_count: usize, frame_duration: f32, loop_animation: bool) -> Self {
        AnimationPlayer {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration,
            loop_animation,
            elapsed: 0.0,
            current_frame: frame_count.max(1) - 1,
            finished: !loop_animation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Restarts from the first frame
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.current_frame = 0;
        self.finished = false;
    }

    pub fn update(&mut self, delta_time: f32) {
        if self.finished {
            return;
        }

        self.elapsed += delta_time;
        while self.elapsed >= self.frame_duration {
            self.elapsed -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.frame_count {
                if self.loop_animation {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.frame_count - 1;
                    self.finished = true;
                    break;
                }
            }
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_parked_until_reset() {
        let mut player = AnimationPlayer::new("place", 16, 0.05, false);
        assert!(player.is_finished());
        assert_eq!(player.current_frame(), 15);

        player.update(1.0);
        assert_eq!(player.current_frame(), 15);

        player.reset();
        assert!(!player.is_finished());
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_advances_by_delta_time() {
        let mut player = AnimationPlayer::new("place", 16, 0.05, false);
        player.reset();
        player.update(0.03);
        assert_eq!(player.current_frame(), 0);
        player.update(0.03);
        assert_eq!(player.current_frame(), 1);
        player.update(0.125);
        assert_eq!(player.current_frame(), 3);
    }

    #[test]
    fn test_non_looping_stops_on_last_frame() {
        let mut player = AnimationPlayer::new("place", 4, 0.1, false);
        player.reset();
        player.update(10.0);
        assert!(player.is_finished());
        assert_eq!(player.current_frame(), 3);
    }

    #[test]
    fn test_looping_wraps() {
        let mut player = AnimationPlayer::new("spin", 4, 0.1, true);
        player.reset();
        player.update(0.45);
        assert_eq!(player.current_frame(), 0);
        assert!(!player.is_finished());
        assert_eq!(player.name(), "spin");
    }
}
