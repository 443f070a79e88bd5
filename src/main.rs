mod game;
mod screens;
mod types;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{style, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType},
};
use game::GameSession;
use std::{
    env,
    io::{stdout, Stdout, Write},
    time::Duration,
};
use types::{Screen, State};

/// Game-screen key bindings: the arrows and their letter aliases.
fn game_key(session: &mut GameSession, code: KeyCode) {
    match code {
        KeyCode::Right | KeyCode::Char('c') => session.on_correct(),
        KeyCode::Left | KeyCode::Char('s') => session.on_skip(),
        KeyCode::Char('e') => session.end_game(),
        _ => (),
    }
}

fn start_session(state: &mut State) {
    state.session = Some(match state.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    });
    state.err = None;
    state.screen = Screen::Game;
}

fn main_loop(stdout: &mut Stdout, state: &mut State) -> anyhow::Result<()> {
    // Clear the previous frame
    queue!(stdout, Clear(ClearType::All))?;

    match state.screen {
        Screen::Main => screens::main(stdout, state)?,
        Screen::Game => screens::game(stdout, state)?,
        Screen::Score => screens::score(stdout, state)?,
    };

    if let Some(err) = &state.err {
        queue!(
            stdout,
            MoveTo((state.columns as f32 * 0.4) as u16, state.rows),
            PrintStyledContent("Error: ".red().bold()),
            PrintStyledContent(style(err).red().bold())
        )?;
    }

    // Render the queued frame
    stdout.flush()?;

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
            }) => {
                if state.screen == Screen::Main {
                    execute!(stdout, Clear(ClearType::All), Show)?;
                    terminal::disable_raw_mode()?;
                    std::process::exit(0);
                }
                state.session = None;
                state.screen = Screen::Main;
            }
            Event::Key(KeyEvent {
                code: KeyCode::F(1),
                modifiers: KeyModifiers::NONE,
            }) => match state.screen {
                Screen::Main | Screen::Score => start_session(state),
                Screen::Game => (),
            },
            Event::Key(KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
            }) => {
                if let Some(session) = &mut state.session {
                    game_key(session, code);
                }
            }
            Event::Resize(new_columns, new_rows) => {
                state.columns = new_columns;
                state.rows = new_rows;
            }
            _ => (),
        };
    }

    // The finish notification fires once per session; consuming it moves
    // us to the score screen carrying the final score.
    if let Some(session) = &mut state.session {
        if session.take_finish_event() {
            state.final_score = session.score();
            state.session = None;
            state.screen = Screen::Score;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional seed makes a playthrough's word order reproducible
    let seed = match env::args().nth(1) {
        Some(arg) => Some(arg.parse()?),
        None => None,
    };

    terminal::enable_raw_mode()?;

    // Get initial terminal size
    let (columns, rows) = terminal::size()?;

    let mut state = State {
        columns,
        rows,
        screen: Screen::Main,
        session: None,
        final_score: 0,
        seed,
        err: None,
    };

    let mut stdout = stdout();

    queue!(stdout, Hide, Clear(ClearType::All))?;

    stdout.flush()?;

    loop {
        if let Err(err) = main_loop(&mut stdout, &mut state) {
            state.err = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_word_session() -> GameSession {
        GameSession::from_words(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn letter_keys_alias_the_arrows() {
        let mut session = three_word_session();

        game_key(&mut session, KeyCode::Char('c'));
        assert_eq!(session.score(), 1);

        game_key(&mut session, KeyCode::Char('s'));
        assert_eq!(session.score(), 0);

        game_key(&mut session, KeyCode::Right);
        assert_eq!(session.score(), 1);
        assert!(session.is_finished());
    }

    #[test]
    fn e_ends_the_game_early() {
        let mut session = three_word_session();
        game_key(&mut session, KeyCode::Char('e'));
        assert!(session.is_finished());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn unmapped_keys_leave_the_session_alone() {
        let mut session = three_word_session();
        game_key(&mut session, KeyCode::Char('x'));
        game_key(&mut session, KeyCode::Up);
        assert_eq!(session.score(), 0);
        assert_eq!(session.word(), "a");
        assert!(!session.is_finished());
    }
}
