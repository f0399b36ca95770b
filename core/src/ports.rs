use crate::*;

/// Fire-and-forget sound effect notifications.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SfxEvent {
    Flip,
    Match,
    Finish,
}

impl SfxEvent {
    /// Event name on the wire to the audio subsystem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Match => "match",
            Self::Finish => "finish",
        }
    }
}

/// Injected audio capability. Failure to play is silently the port's problem;
/// the engine never observes a return value.
pub trait AudioPort {
    fn play(&mut self, event: SfxEvent);
}

/// Injected visual flip capability.
///
/// The engine commits its logical state *before* calling this; the port only
/// plays a transition and is told which artwork to show at the midpoint.
/// Cancelling an in-flight transition must not roll anything back.
pub trait FlipPort {
    fn begin_flip(&mut self, position: Position, target: Face, art: Option<&AssetRef>);
}

/// Default audio port: drops every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn play(&mut self, _event: SfxEvent) {}
}

/// Default flip port: state transitions happen without any visual effect.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullFlips;

impl FlipPort for NullFlips {
    fn begin_flip(&mut self, _position: Position, _target: Face, _art: Option<&AssetRef>) {}
}
