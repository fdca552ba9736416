use crate::projections::{PlayerDetail, RosterRow};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions, dispatched
/// from user input (key events) or from effects (async data loading).
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    FocusTeams,
    FocusRoster,
    MoveUp,
    MoveDown,

    // Selection actions (the two interactive events of the dashboard)
    SelectTeam(i64),
    SelectPlayer(i64),

    /// Re-fetch the current team's roster, bypassing the cache
    Refresh,

    // Data loaded (from effects); errors arrive as strings so the action
    // stays cheaply cloneable
    RosterLoaded(i64, Result<Vec<RosterRow>, String>),
    PlayerDetailLoaded(i64, Result<PlayerDetail, String>),

    // System actions
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_are_cloneable() {
        let action = Action::RosterLoaded(15, Ok(Vec::new()));
        let cloned = action.clone();
        assert!(matches!(cloned, Action::RosterLoaded(15, Ok(_))));
    }
}
