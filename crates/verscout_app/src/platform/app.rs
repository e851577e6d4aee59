use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use verscout_client::ApiSettings;
use verscout_core::{update, AppState, Effect, Msg};

use super::effects::EffectRunner;
use super::preferences;
use super::ui;

const TICK_RATE: Duration = Duration::from_millis(75);

pub fn run_app(settings: ApiSettings) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: ApiSettings,
) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), settings);
    let prefs_path = preferences::preference_file();

    let mut state = AppState::new();
    // Startup read of the stored preference; the state machine falls back to
    // Light on anything missing or invalid, without writing storage back.
    let _ = msg_tx.send(Msg::PreferenceRestored(preferences::load(&prefs_path)));

    let mut last_tick = Instant::now();
    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            for effect in effects {
                match effect {
                    Effect::StartScrape { attempt, location } => {
                        runner.start_scrape(attempt, location);
                    }
                    Effect::PersistPreference { preference } => {
                        preferences::save(&prefs_path, preference);
                    }
                }
            }
        }

        if state.consume_dirty() {
            let view = state.view();
            terminal.draw(|f| ui::render::render(f, &view))?;
        }

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let _ = msg_tx.send(Msg::PreferenceToggled);
                    }
                    // Submission is not gated here: the rendered control shows
                    // busy while Pending, but overlapping attempts are allowed
                    // and resolved by attempt id.
                    KeyCode::Enter => {
                        let _ = msg_tx.send(Msg::SubmitClicked);
                    }
                    KeyCode::Backspace => {
                        let mut location = state.location().to_owned();
                        location.pop();
                        let _ = msg_tx.send(Msg::LocationChanged(location));
                    }
                    KeyCode::Char(c) => {
                        let mut location = state.location().to_owned();
                        location.push(c);
                        let _ = msg_tx.send(Msg::LocationChanged(location));
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            let _ = msg_tx.send(Msg::Tick);
        }
    }

    Ok(())
}
