//! Sound cues
//!
//! The simulation only ever asks for a named cue to be played. Playback is
//! fire-and-forget: a missing or failing clip is never an error.

use std::cell::RefCell;
use std::rc::Rc;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Run started from the ready screen
    Start,
    /// Upward impulse
    Flap,
    /// Obstacle pair cleared
    Score,
    /// Struck an obstacle
    Hit,
    /// Came to rest on the ground after a crash
    Die,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Start,
        SoundCue::Flap,
        SoundCue::Score,
        SoundCue::Hit,
        SoundCue::Die,
    ];

    /// Asset path relative to the asset root
    pub fn path(&self) -> &'static str {
        match self {
            SoundCue::Start => "sfx/start.wav",
            SoundCue::Flap => "sfx/flap.wav",
            SoundCue::Score => "sfx/score.wav",
            SoundCue::Hit => "sfx/hit.wav",
            SoundCue::Die => "sfx/die.wav",
        }
    }
}

/// Anything that can play a cue
pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records every cue in order
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    pub played: Vec<SoundCue>,
}

impl CueRecorder {
    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl CuePlayer for CueRecorder {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

/// Lets a caller keep a handle on a player it has handed to the engine
impl<P: CuePlayer> CuePlayer for Rc<RefCell<P>> {
    fn play(&mut self, cue: SoundCue) {
        self.borrow_mut().play(cue);
    }
}

/// Master/sfx levels and mute, shared by every clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Master volume (0.0 - 1.0)
    pub master: f32,
    /// SFX volume (0.0 - 1.0)
    pub sfx: f32,
    pub muted: bool,
}

impl Volume {
    pub fn new(master: f32, sfx: f32, muted: bool) -> Self {
        Self {
            master: master.clamp(0.0, 1.0),
            sfx: sfx.clamp(0.0, 1.0),
            muted,
        }
    }

    pub fn set_master(&mut self, vol: f32) {
        self.master = vol.clamp(0.0, 1.0);
    }

    pub fn set_sfx(&mut self, vol: f32) {
        self.sfx = vol.clamp(0.0, 1.0);
    }

    /// Level a clip actually plays at
    pub fn effective(&self) -> f32 {
        if self.muted { 0.0 } else { self.master * self.sfx }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;

    use web_sys::HtmlAudioElement;

    use super::{CuePlayer, SoundCue, Volume};
    use crate::settings::Settings;

    /// Audio manager backed by one preloaded `<audio>` element per cue
    pub struct AudioManager {
        clips: HashMap<SoundCue, HtmlAudioElement>,
        pub volume: Volume,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let mut clips = HashMap::new();
            for cue in SoundCue::ALL {
                match HtmlAudioElement::new_with_src(&settings.asset_url(cue.path())) {
                    Ok(el) => {
                        el.set_preload("auto");
                        clips.insert(cue, el);
                    }
                    Err(_) => log::warn!("Failed to create audio element for {:?}", cue),
                }
            }
            Self {
                clips,
                volume: settings.volume(),
            }
        }
    }

    impl CuePlayer for AudioManager {
        fn play(&mut self, cue: SoundCue) {
            let vol = self.volume.effective();
            if vol <= 0.0 {
                return;
            }
            let Some(el) = self.clips.get(&cue) else { return };

            el.set_volume(vol as f64);
            el.set_current_time(0.0);
            // Autoplay policy rejections are ignored
            let _ = el.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_paths_are_distinct() {
        let mut paths: Vec<_> = SoundCue::ALL.iter().map(|c| c.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), SoundCue::ALL.len());
    }

    #[test]
    fn test_volume_clamps_and_mutes() {
        let mut volume = Volume::new(1.5, 0.5, false);
        assert_eq!(volume.master, 1.0);
        assert_eq!(volume.effective(), 0.5);

        volume.set_sfx(-2.0);
        assert_eq!(volume.effective(), 0.0);

        volume.set_sfx(1.0);
        volume.set_master(0.25);
        assert_eq!(volume.effective(), 0.25);

        volume.muted = true;
        assert_eq!(volume.effective(), 0.0);
    }

    #[test]
    fn test_recorder_counts() {
        let mut rec = CueRecorder::default();
        rec.play(SoundCue::Flap);
        rec.play(SoundCue::Flap);
        rec.play(SoundCue::Hit);
        assert_eq!(rec.count(SoundCue::Flap), 2);
        assert_eq!(rec.count(SoundCue::Die), 0);
    }
}
