pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;
pub mod widgets;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::{AppState, PanelFocus};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::RosterDataProvider;
use nhl_statsapi::Team;

/// Main entry point for TUI mode
///
/// `teams` is the directory fetched before entering interactive state; the
/// default team's roster is loaded by the initial SelectTeam dispatch.
pub async fn run(
    client: Arc<dyn RosterDataProvider>,
    config: Config,
    teams: Vec<Team>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));

    let mut initial_state = AppState::default();
    initial_state.system.config = config.clone();
    initial_state.data.teams = Arc::new(teams);
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);

    // Load the default team's roster before the first interaction
    runtime.dispatch(Action::SelectTeam(config.default_team_id));

    // Main loop
    loop {
        // Process any actions from effects FIRST so data loads trigger a
        // re-render on this iteration
        let actions_processed = runtime.process_actions();

        terminal.draw(|f| view::render(f, runtime.state()))?;

        // If actions were processed, continue immediately to check for more
        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let action = key_to_action(key, runtime.state());

                let should_quit = matches!(action, Some(Action::Quit));

                if let Some(act) = action {
                    runtime.dispatch(act);
                }

                if should_quit {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
