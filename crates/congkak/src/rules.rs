/// How a game begins: ordinary alternating turns, or one simultaneous round
/// before play settles into alternating turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartMode {
    Sequential,
    SimultaneousIndependent,
    SimultaneousLeaderFollower,
}

/// Which player leads in [`StartMode::SimultaneousLeaderFollower`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderSelection {
    Random,
    AlwaysP0,
    AlwaysP1,
}

/// Toggles parameterizing sowing semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    pub capture_enabled: bool,
    pub capture_requires_loop: bool,
    pub forfeit_enabled: bool,
    /// Reserved for a future multi-round "burnt holes" variant. Currently a
    /// no-op: `apply_move` never reads this flag. See `DESIGN.md`.
    pub burnt_holes_enabled: bool,
    pub start_mode: StartMode,
    pub leader_selection: LeaderSelection,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            capture_enabled: true,
            capture_requires_loop: false,
            forfeit_enabled: true,
            burnt_holes_enabled: false,
            start_mode: StartMode::Sequential,
            leader_selection: LeaderSelection::Random,
        }
    }
}

impl RuleConfig {
    pub fn default_rules() -> Self {
        Self::default()
    }
}
