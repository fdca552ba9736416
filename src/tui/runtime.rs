use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Action-processing runtime
///
/// The Runtime owns the application state, dispatches actions through the
/// reducer, and executes side effects asynchronously. Completed effects feed
/// actions back through an unbounded channel, so the render loop never blocks
/// on the network.
pub struct Runtime {
    state: AppState,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    effect_tx: mpsc::UnboundedSender<Effect>,

    data_effects: Arc<DataEffects>,
}

impl Runtime {
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState; the reducer returns fetch
    /// effects which are resolved against DataEffects here.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchRoster(team_id) => {
                debug!("EFFECT: Fetching roster for team {}", team_id);
                let _ = self.effect_tx.send(self.data_effects.fetch_roster(team_id));
            }
            Effect::RefreshRoster(team_id) => {
                debug!("EFFECT: Refreshing roster for team {}", team_id);
                let _ = self
                    .effect_tx
                    .send(self.data_effects.refresh_roster(team_id));
            }
            Effect::FetchPlayerDetail(player_id) => {
                debug!("EFFECT: Fetching detail for player {}", player_id);
                let _ = self
                    .effect_tx
                    .send(self.data_effects.fetch_player_detail(player_id));
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// Runs in a separate tokio task; completed futures dispatch their
    /// actions back into the runtime's queue.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Fetch effects are resolved by execute_effect() before queueing
            Effect::FetchRoster(_) | Effect::RefreshRoster(_) | Effect::FetchPlayerDetail(_) => {
                tracing::warn!("Fetch effect reached async executor unresolved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockClient;
    use crate::fixtures;
    use crate::tui::state::PanelFocus;
    use std::sync::Arc as StdArc;

    fn create_test_runtime() -> Runtime {
        let data_effects = StdArc::new(DataEffects::new(StdArc::new(MockClient::new())));
        let mut state = AppState::default();
        state.data.teams = StdArc::new(fixtures::create_mock_teams());
        Runtime::new(state, data_effects)
    }

    #[tokio::test]
    async fn test_dispatch_updates_state() {
        let mut runtime = create_test_runtime();
        runtime.state.data.roster =
            StdArc::new(crate::projections::project_roster(&fixtures::create_mock_roster(15)));

        runtime.dispatch(Action::FocusRoster);

        assert_eq!(runtime.state().navigation.focus, PanelFocus::Roster);
    }

    #[tokio::test]
    async fn test_action_queue() {
        let mut runtime = create_test_runtime();

        let tx = runtime.action_sender();
        tx.send(Action::MoveDown).unwrap();

        let count = runtime.process_actions();

        assert_eq!(count, 1);
        assert_eq!(runtime.state().ui.team_index, 1);
    }

    #[tokio::test]
    async fn test_select_team_round_trip() {
        let mut runtime = create_test_runtime();

        runtime.dispatch(Action::SelectTeam(15));
        assert!(runtime.state().is_loading_roster());

        // Poll until the mock fetch completes and its action is processed
        let mut loaded = false;
        for _ in 0..50 {
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            runtime.process_actions();
            if !runtime.state().data.roster.is_empty() {
                loaded = true;
                break;
            }
        }

        assert!(loaded, "roster should load from the mock provider");
        assert!(!runtime.state().is_loading_roster());
        assert_eq!(runtime.state().data.roster[0].name, "Alex Ovechkin");
    }

    #[tokio::test]
    async fn test_select_player_round_trip() {
        let mut runtime = create_test_runtime();

        runtime.dispatch(Action::SelectPlayer(8471214));

        let mut loaded = false;
        for _ in 0..50 {
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            runtime.process_actions();
            if runtime.state().data.detail.is_some() {
                loaded = true;
                break;
            }
        }

        assert!(loaded, "detail should load from the mock provider");
        let detail = runtime.state().data.detail.as_ref().as_ref().unwrap();
        assert_eq!(detail.full_name, "Alex Ovechkin");
    }

    #[tokio::test]
    async fn test_effect_execution() {
        let mut runtime = create_test_runtime();

        let effect = Effect::Async(Box::pin(async { Action::MoveDown }));
        runtime.effect_tx.send(effect).unwrap();

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        runtime.process_actions();

        assert_eq!(runtime.state().ui.team_index, 1);
    }
}
