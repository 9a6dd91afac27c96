// render.rs - Terminal frames for the animation loop

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use life_core::{ALIVE, Simulation};

const LIVE: char = '█';
const DEAD: char = ' ';

/// Hide the cursor and wipe the screen before the first frame.
pub fn begin<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Hide, Clear(ClearType::All))
}

/// Put the terminal back the way we found it.
pub fn end<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Show, Print("\r\n"))
}

/// Redraw the whole board from the top-left corner.
pub fn draw<W: Write>(out: &mut W, sim: &Simulation) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        Clear(ClearType::FromCursorDown),
        Print(frame(sim))
    )?;
    out.flush()
}

/// Header plus one character per cell, rows separated by `\r\n`.
pub fn frame(sim: &Simulation) -> String {
    let grid = sim.grid();
    let (rows, cols) = grid.shape();
    let mut buf = String::with_capacity(rows * (cols + 2) * LIVE.len_utf8() + 128);

    buf.push_str(&format!(
        " Generation: {}  Population: {}  Boundary: {}\r\n\r\n",
        sim.generation(),
        sim.population(),
        sim.mode(),
    ));
    for row in grid.rows() {
        buf.extend(row.iter().map(|&cell| if cell == ALIVE { LIVE } else { DEAD }));
        buf.push_str("\r\n");
    }
    buf.push_str("\r\n Press Ctrl+C to quit.\r\n");
    buf
}
