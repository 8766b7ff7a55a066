/// Everything that can happen to the world between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The action key went down: an impulse while playing, a restart after
    /// a crash.
    Action,
    /// The dedicated restart key went down. Ignored while playing.
    Restart,
    SpawnObstacle,
    SpawnDecoration,
}
