use crate::content::sequence::COLOR_PADS;
use crate::game::settings::Settings;
use crate::tone::{sine_wav, TONE_DURATION};
use gio::MemoryInputStream;
use gtk4::prelude::*;
use gtk4::MediaFile;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// One tone per sequence pad, played only while sound is enabled.
pub struct AudioSet {
    pad_tones: Vec<glib::Bytes>,
    settings: Rc<RefCell<Settings>>,
    // Dropping a MediaFile stops it, so the last one is held until replaced.
    playing: RefCell<Option<MediaFile>>,
}

impl AudioSet {
    pub fn new(settings: Rc<RefCell<Settings>>) -> Self {
        let pad_tones = COLOR_PADS
            .iter()
            .map(|pad| glib::Bytes::from_owned(sine_wav(pad.tone_hz, TONE_DURATION)))
            .collect();
        Self {
            pad_tones,
            settings,
            playing: RefCell::new(None),
        }
    }

    pub fn play_pad(&self, pad: usize) {
        if !self.settings.borrow().sound_enabled {
            return;
        }
        let Some(tone) = self.pad_tones.get(pad) else {
            return;
        };
        log::trace!(target: "audio_set", "Playing tone for pad {}", pad);
        let stream = MemoryInputStream::from_bytes(tone);
        let media = MediaFile::for_input_stream(&stream);
        media.play();
        self.playing.replace(Some(media));
    }
}

impl Debug for AudioSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AudioSet")
    }
}
