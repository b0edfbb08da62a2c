//! Fire-and-forget sound cues

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Eat,
    GameOver,
}

/// Receiver of sound cues; playback failures are not reported back
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Rings the terminal bell
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: AudioCue) {
        tracing::trace!(?cue, "bell");
        let mut out = std::io::stderr();
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

/// Drops every cue
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Keeps every cue, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub cues: Vec<AudioCue>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}
