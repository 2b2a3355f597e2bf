use corelib::App;
use corelib::gfx::Texture;

/// A sequence of textures shown for a per-frame number of logic ticks.
///
/// Call [`Animation::update`] once per game tick and blit
/// [`Animation::texture`] wherever the animation should appear. Without a
/// repetition count it loops forever; with one it goes through
/// `loaded -> playing -> finished` and stays finished.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<(Texture, i32)>,
    frame_index: usize,
    frames_until_next: i32,
    repetitions: Option<u32>,
    finished: bool,
}

impl Animation {
    /// Load every file matching `pattern` (sorted by path) as one frame.
    ///
    /// `frame_data` holds how many ticks each frame stays on screen and must
    /// have exactly one entry per matched file; a mismatch is an error and no
    /// animation is built.
    pub fn from_files(app: &mut App, pattern: &str, frame_data: &[i32]) -> Result<Self, String> {
        let entries = glob::glob(pattern).map_err(|e| format!("invalid pattern {pattern}: {e}"))?;

        let mut files = Vec::new();
        for entry in entries {
            files.push(entry.map_err(|e| e.to_string())?);
        }
        files.sort();

        if files.len() != frame_data.len() {
            return Err(format!(
                "pattern {pattern} matched {} files but {} frame durations were given",
                files.len(),
                frame_data.len()
            ));
        }

        let mut frames = Vec::with_capacity(files.len());
        for (path, &duration) in files.iter().zip(frame_data) {
            frames.push((app.texture_from_file(path)?, duration));
        }

        log::debug!("loaded {} animation frames from {pattern}", frames.len());
        Self::from_frames(frames)
    }

    /// Build an animation from already uploaded textures
    pub fn from_frames(frames: Vec<(Texture, i32)>) -> Result<Self, String> {
        let Some(&(_, first_duration)) = frames.first() else {
            return Err("an animation needs at least one frame".to_string());
        };

        Ok(Self {
            frames,
            frame_index: 0,
            frames_until_next: first_duration,
            repetitions: None,
            finished: false,
        })
    }

    /// Stop after `repetitions` full loops; `0` builds an animation that is
    /// finished from the start
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.finished = repetitions == 0;
        self.repetitions = Some(repetitions);
        self
    }

    /// Indicate a game tick has passed. Does nothing once finished
    pub fn update(&mut self) {
        if self.finished {
            return;
        }

        self.frames_until_next -= 1;
        if self.frames_until_next == 0 {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            self.frames_until_next += self.frames[self.frame_index].1;
            if self.frame_index == 0 {
                if let Some(left) = &mut self.repetitions {
                    *left -= 1;
                    if *left == 0 {
                        self.finished = true;
                    }
                }
            }
        }
    }

    /// The texture of the current frame
    pub fn texture(&self) -> &Texture {
        &self.frames[self.frame_index].0
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Rewind to the first frame with its full duration.
    ///
    /// This does not touch `finished` or the repetition counter: a finished
    /// animation stays finished. Build a new one to play it again.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.frames_until_next = self.frames[0].1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::WindowConfig;
    use corelib::backend::HeadlessBackend;
    use corelib::math::uvec2;

    fn test_app() -> App {
        App::new(
            Box::new(HeadlessBackend::new()),
            WindowConfig::default().frame_rate(0),
        )
        .unwrap()
    }

    fn frame(app: &mut App, duration: i32) -> (Texture, i32) {
        let texture = app.texture_from_pixels(uvec2(2, 2), &[255; 16]).unwrap();
        (texture, duration)
    }

    fn three_frame_animation(app: &mut App) -> Animation {
        let frames = vec![frame(app, 2), frame(app, 3), frame(app, 4)];
        Animation::from_frames(frames).unwrap()
    }

    #[test]
    fn test_frames_advance_after_their_hold_duration() {
        let mut app = test_app();
        let mut animation = three_frame_animation(&mut app);

        assert_eq!(animation.frame_index(), 0);
        animation.update();
        assert_eq!(animation.frame_index(), 0, "first frame holds for 2 ticks");
        animation.update();
        assert_eq!(animation.frame_index(), 1);

        for _ in 0..3 {
            animation.update();
        }
        assert_eq!(animation.frame_index(), 2, "second frame holds for 3 ticks");
    }

    #[test]
    fn test_finite_repetitions_reach_a_terminal_state() {
        let mut app = test_app();
        let mut animation = three_frame_animation(&mut app).with_repetitions(2);

        // one full loop is 2 + 3 + 4 ticks
        for _ in 0..9 {
            animation.update();
        }
        assert_eq!(animation.frame_index(), 0, "wrapped back to the start");
        assert!(!animation.finished(), "one repetition left");

        for _ in 0..9 {
            animation.update();
        }
        assert!(animation.finished());

        // further updates are no-ops
        let index = animation.frame_index();
        for _ in 0..5 {
            animation.update();
        }
        assert_eq!(animation.frame_index(), index);
        assert!(animation.finished());
    }

    #[test]
    fn test_without_repetitions_loops_forever() {
        let mut app = test_app();
        let mut animation = three_frame_animation(&mut app);

        for _ in 0..90 {
            animation.update();
        }
        assert!(!animation.finished());
        assert_eq!(animation.frame_index(), 0);
    }

    #[test]
    fn test_zero_repetitions_is_finished_at_construction() {
        let mut app = test_app();
        let animation = three_frame_animation(&mut app).with_repetitions(0);
        assert!(animation.finished());
    }

    #[test]
    fn test_reset_rewinds_but_does_not_revive() {
        let mut app = test_app();
        let mut animation = three_frame_animation(&mut app).with_repetitions(1);

        for _ in 0..3 {
            animation.update();
        }
        assert_eq!(animation.frame_index(), 1);

        animation.reset();
        assert_eq!(animation.frame_index(), 0);

        for _ in 0..9 {
            animation.update();
        }
        assert!(animation.finished());

        animation.reset();
        assert!(animation.finished(), "reset does not revive a finished animation");
        animation.update();
        assert_eq!(animation.frame_index(), 0, "still a no-op");
    }

    #[test]
    fn test_texture_returns_the_current_frame() {
        let mut app = test_app();
        let frames = vec![frame(&mut app, 1), frame(&mut app, 1)];
        let second = frames[1].0;
        let mut animation = Animation::from_frames(frames).unwrap();

        animation.update();
        assert_eq!(*animation.texture(), second);
    }

    #[test]
    fn test_empty_frame_list_is_an_error() {
        assert!(Animation::from_frames(Vec::new()).is_err());
    }

    #[test]
    fn test_from_files_loads_sorted_matches() {
        let mut app = test_app();
        let dir = tempfile::tempdir().unwrap();

        for name in ["0.png", "1.png", "2.png"] {
            image::RgbaImage::new(2, 2)
                .save(dir.path().join(name))
                .unwrap();
        }

        let pattern = dir.path().join("*.png");
        let pattern = pattern.to_str().unwrap();

        let animation = Animation::from_files(&mut app, pattern, &[2, 3, 4]).unwrap();
        assert_eq!(animation.frame_count(), 3);
        assert_eq!(animation.frame_index(), 0);
    }

    #[test]
    fn test_from_files_rejects_mismatched_durations() {
        let mut app = test_app();
        let dir = tempfile::tempdir().unwrap();

        for name in ["0.png", "1.png", "2.png"] {
            image::RgbaImage::new(2, 2)
                .save(dir.path().join(name))
                .unwrap();
        }

        let pattern = dir.path().join("*.png");
        let pattern = pattern.to_str().unwrap();

        let result = Animation::from_files(&mut app, pattern, &[2, 3]);
        assert!(result.is_err(), "3 files with 2 durations must not build");
    }
}
