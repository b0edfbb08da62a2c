/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the start trigger
    #[default]
    Init,
    Running,
    /// Terminal until restart
    GameOver,
}

impl Phase {
    /// `Init -> Running`; returns whether the transition happened
    pub fn start(&mut self) -> bool {
        if *self == Phase::Init {
            *self = Phase::Running;
            true
        } else {
            false
        }
    }

    /// `Running -> GameOver`; returns whether the transition happened
    pub fn finish(&mut self) -> bool {
        if *self == Phase::Running {
            *self = Phase::GameOver;
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        *self == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        *self == Phase::GameOver
    }
}
