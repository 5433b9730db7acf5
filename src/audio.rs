//! Sound effects. Playback is fire-and-forget: a failure to play is logged and dropped.

use std::io::{stdout, Write};

use crossterm::{queue, style};
use tracing::warn;

use crate::config::SoundMode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    Eat,
    Collision,
}

pub trait Audio {
    fn play(&mut self, effect: Effect);
}

/// Rings the terminal bell for every effect.
pub struct TerminalBell;

impl Audio for TerminalBell {
    fn play(&mut self, effect: Effect) {
        let mut out = stdout();
        let res = queue!(out, style::Print('\x07')).and_then(|_| out.flush());

        if let Err(e) = res {
            warn!(?effect, error = %e, "failed to ring terminal bell");
        }
    }
}

pub struct Silent;

impl Audio for Silent {
    fn play(&mut self, _effect: Effect) {}
}

/// Picks the player for the configured sound mode, falling back to the bell.
pub fn for_mode(mode: SoundMode) -> Box<dyn Audio> {
    match mode {
        SoundMode::Bell => Box::new(TerminalBell),
        SoundMode::Off => Box::new(Silent),
        #[cfg(feature = "audio")]
        SoundMode::Tones => match Tones::new() {
            Ok(tones) => Box::new(tones),
            Err(e) => {
                warn!(error = %e, "using the terminal bell instead");
                Box::new(TerminalBell)
            }
        },
        #[cfg(not(feature = "audio"))]
        SoundMode::Tones => {
            warn!("built without the audio feature, using the terminal bell");
            Box::new(TerminalBell)
        }
    }
}

#[cfg(feature = "audio")]
pub use tones::Tones;

#[cfg(feature = "audio")]
mod tones {
    use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};
    use tracing::warn;

    use super::{Audio, Effect};
    use crate::error::{Result, SnakeError};

    const SAMPLE_RATE: u32 = 44_100;

    /// Short synthesized tones played on the default output device.
    pub struct Tones {
        // Dropping the stream stops all playback
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Tones {
        pub fn new() -> Result<Self> {
            let (_stream, handle) =
                OutputStream::try_default().map_err(|e| SnakeError::Audio(e.to_string()))?;
            Ok(Tones { _stream, handle })
        }
    }

    impl Audio for Tones {
        fn play(&mut self, effect: Effect) {
            let samples = match effect {
                Effect::Eat => sweep(660.0, 990.0, 0.08),
                Effect::Collision => sweep(180.0, 60.0, 0.25),
            };

            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
                    sink.detach();
                }
                Err(e) => warn!(?effect, error = %e, "failed to open audio sink"),
            }
        }
    }

    /// Square wave gliding linearly from `from` to `to` Hz, with a linear fade out.
    fn sweep(from: f32, to: f32, seconds: f32) -> Vec<f32> {
        let total = (SAMPLE_RATE as f32 * seconds) as usize;
        let mut phase = 0.0f32;

        (0..total)
            .map(|i| {
                let t = i as f32 / total as f32;
                phase = (phase + (from + (to - from) * t) / SAMPLE_RATE as f32).fract();
                let level = if phase < 0.5 { 0.25 } else { -0.25 };
                level * (1.0 - t)
            })
            .collect()
    }
}
