/// Player configuration in the shape the media collaborator consumes:
/// source URL, fill dimensions implied by the panel, native controls on.
pub struct MediaPlayerConfig {
    pub url: &'static str,
    pub controls: bool,
}

pub const MEDIA_PLAYER: MediaPlayerConfig = MediaPlayerConfig {
    url: "https://www.youtube.com/watch?v=iik25wqIuFo",
    controls: true,
};

pub const MEDIA_DURATION_SECS: u32 = 212;
const SEEK_STEP_SECS: u32 = 10;

/// Cosmetic playback state. There are no timers in this application, so
/// the position only moves on explicit seeks.
pub struct MediaState {
    pub playing: bool,
    pub position_secs: u32,
    pub volume: u8,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            playing: false,
            position_secs: 0,
            volume: 80,
        }
    }
}

impl MediaState {
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn seek_forward(&mut self) {
        self.position_secs = (self.position_secs + SEEK_STEP_SECS).min(MEDIA_DURATION_SECS);
    }

    pub fn seek_back(&mut self) {
        self.position_secs = self.position_secs.saturating_sub(SEEK_STEP_SECS);
    }

    pub fn volume_up(&mut self) {
        self.volume = (self.volume + 5).min(100);
    }

    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(5);
    }

    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.position_secs) / f64::from(MEDIA_DURATION_SECS)
    }

    pub fn timestamp(&self) -> String {
        format!(
            "{}:{:02} / {}:{:02}",
            self.position_secs / 60,
            self.position_secs % 60,
            MEDIA_DURATION_SECS / 60,
            MEDIA_DURATION_SECS % 60
        )
    }
}
