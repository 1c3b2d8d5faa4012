//! Play the hero video only while it is on screen.

pub const VISIBLE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Turns visibility changes into play/pause commands, dropping repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackGate {
    last: Option<PlaybackCommand>,
}

impl PlaybackGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_visibility(&mut self, visible: bool) -> Option<PlaybackCommand> {
        let command = if visible {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        };
        if self.last == Some(command) {
            return None;
        }
        self.last = Some(command);
        Some(command)
    }

    /// Forget the last command, e.g. after the browser blocked autoplay, so
    /// the next visibility change retries.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_are_dropped() {
        let mut gate = PlaybackGate::new();
        assert_eq!(gate.on_visibility(true), Some(PlaybackCommand::Play));
        assert_eq!(gate.on_visibility(true), None);
        assert_eq!(gate.on_visibility(false), Some(PlaybackCommand::Pause));
        assert_eq!(gate.on_visibility(false), None);
    }

    #[test]
    fn reset_allows_retry() {
        let mut gate = PlaybackGate::new();
        gate.on_visibility(true);
        gate.reset();
        assert_eq!(gate.on_visibility(true), Some(PlaybackCommand::Play));
    }
}
