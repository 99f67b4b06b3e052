/// Sound cues emitted by the simulation.
///
/// Playback is the environment's job: cues are fire-and-forget and nothing in
/// the core waits on, or reacts to, the sink.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// A projectile left the player's gun.
    Shot,
    /// An enemy's health reached zero.
    EnemyKilled,
    /// Background loop starts with a session.
    MusicStart,
    /// Background loop stops when the session ends.
    MusicStop,
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

impl AudioSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}
