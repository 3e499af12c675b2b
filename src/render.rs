//! Renderer contract
//!
//! The simulation never draws. A renderer receives each live entity and the
//! score; it must refuse cells outside the board.

use crate::sim::{Coord, Entity, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("coordinates {at} are out of bounds")]
    OutOfBounds { at: Coord },
}

pub trait Renderer {
    /// Start a frame for a `width` x `height` board
    fn begin(&mut self, width: u32, height: u32);
    fn draw_cell(&mut self, entity: &Entity) -> Result<(), RenderError>;
    fn draw_score(&mut self, score: u64);
}

/// Draw every live entity of `session`, then the score
pub fn render<R: Renderer + ?Sized>(session: &Session, renderer: &mut R) -> Result<(), RenderError> {
    let (width, height) = session.dimensions();
    renderer.begin(width, height);
    for entity in session.grid().occupants() {
        renderer.draw_cell(entity)?;
    }
    renderer.draw_score(session.score());
    Ok(())
}

/// Renders the board as text, one character per cell
#[derive(Debug, Default)]
pub struct TextRenderer {
    width: u32,
    height: u32,
    rows: Vec<Vec<char>>,
    score: u64,
}

impl TextRenderer {
    const EMPTY: char = '.';

    pub fn new() -> Self {
        Self::default()
    }

    /// Score line followed by the board rows
    pub fn output(&self) -> String {
        let mut out = format!("score: {}\n", self.score);
        for row in &self.rows {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Renderer for TextRenderer {
    fn begin(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.rows = vec![vec![Self::EMPTY; width as usize]; height as usize];
        self.score = 0;
    }

    fn draw_cell(&mut self, entity: &Entity) -> Result<(), RenderError> {
        let Coord { x, y } = entity.pos;
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(RenderError::OutOfBounds { at: entity.pos });
        }
        self.rows[y as usize][x as usize] = entity.kind.glyph();
        Ok(())
    }

    fn draw_score(&mut self, score: u64) {
        self.score = score;
    }
}
