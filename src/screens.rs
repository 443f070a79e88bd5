use super::types::State;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{style, Print, PrintStyledContent, Stylize},
};
use std::io::{self, Stdout};

// Clamps instead of underflowing when the terminal is narrower than the
// content being centered.
fn anchor(columns: u16, offset: u16) -> u16 {
    (columns / 2).saturating_sub(offset)
}

pub fn main(stdout: &mut Stdout, state: &State) -> io::Result<()> {
    let x = anchor(state.columns, 10);
    let y = (state.rows / 2) as f32;

    queue!(
        stdout,
        MoveTo(x, (y * 0.7) as u16),
        PrintStyledContent("Guess The Word".bold()),
        MoveTo(x, (y * 0.8) as u16),
        PrintStyledContent("F1 - New Game".green().bold()),
        MoveTo(x, (y * 0.9) as u16),
        PrintStyledContent("ESC - Quit".red().bold())
    )?;

    Ok(())
}

pub fn game(stdout: &mut Stdout, state: &State) -> io::Result<()> {
    let session = match &state.session {
        Some(session) => session,
        None => return Ok(()),
    };

    let (columns, rows) = (state.columns, state.rows);

    let word = session.word();
    let x = anchor(columns, word.len() as u16 / 2);

    queue!(
        stdout,
        MoveTo(x, rows / 2),
        PrintStyledContent(style(word).cyan().bold()),
        MoveTo((columns as f32 * 0.1) as u16, (rows as f32 * 0.25) as u16),
        PrintStyledContent("Score: ".bold()),
        PrintStyledContent(style(session.score()).yellow().bold()),
        MoveTo((columns as f32 * 0.7) as u16, (rows as f32 * 0.25) as u16),
        PrintStyledContent("Words left: ".bold()),
        Print(session.remaining())
    )?;

    queue!(
        stdout,
        MoveTo(0, rows),
        PrintStyledContent("RIGHT/C - Correct".green().bold()),
        Print("   "),
        PrintStyledContent("LEFT/S - Skip".yellow().bold()),
        Print("   "),
        PrintStyledContent("E - End Game".red().bold()),
        Print("   "),
        PrintStyledContent("ESC - Go Back".bold())
    )?;

    Ok(())
}

pub fn score(stdout: &mut Stdout, state: &State) -> io::Result<()> {
    let x = anchor(state.columns, 10);
    let y = (state.rows / 2) as f32;

    queue!(
        stdout,
        MoveTo(x, (y * 0.7) as u16),
        PrintStyledContent("Game Finished!".bold()),
        MoveTo(x, (y * 0.8) as u16),
        PrintStyledContent("Final Score: ".bold()),
        PrintStyledContent(style(state.final_score).yellow().bold()),
        MoveTo(x, (y * 0.9) as u16),
        PrintStyledContent("F1 - Play Again".green().bold()),
        MoveTo(x, (y * 0.95) as u16),
        PrintStyledContent("ESC - Main Menu".red().bold())
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_clamps_on_narrow_terminals() {
        assert_eq!(anchor(80, 10), 30);
        assert_eq!(anchor(8, 10), 0);
        assert_eq!(anchor(0, 5), 0);
    }
}
