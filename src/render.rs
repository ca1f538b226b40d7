use crate::cell::Cell;
use crate::grid::GridView;

pub const ALIVE_GLYPH: char = 'o';
pub const DEAD_GLYPH: char = '·';

/// Largest accepted horizontal multiplier
pub const MAX_MULTIPLIER: usize = 16;

/// Draws a board as plain text: a generation header, then one line of glyphs per row.
pub struct TextRenderer {
    /// The frame buffer. Reused between frames
    fb: String,

    alive: char,

    dead: char,

    /// How many times each glyph is repeated horizontally. Terminal cells are roughly twice as
    /// tall as they are wide, so a multiplier of 2 makes the board look square.
    multiplier: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TextRenderer {
    /// `multiplier` is clamped to `1..=MAX_MULTIPLIER`
    pub fn new(multiplier: usize) -> Self {
        Self {
            fb: String::new(),
            alive: ALIVE_GLYPH,
            dead: DEAD_GLYPH,
            multiplier: multiplier.clamp(1, MAX_MULTIPLIER),
        }
    }

    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    pub fn render(&mut self, view: &GridView<'_>) -> &str {
        self.fb.clear();

        // Each row is `width * multiplier` glyphs plus a newline. Glyphs may take up to 4 bytes.
        let row_len = view
            .width()
            .saturating_mul(4 * self.multiplier)
            .saturating_add(1);
        self.fb.reserve(row_len.saturating_mul(view.height()).saturating_add(32));

        self.fb.push_str("Iteration: ");
        self.fb.push_str(&view.generation().to_string());
        self.fb.push('\n');

        for row in view.rows() {
            for &cell in row {
                let glyph = match cell {
                    Cell::Alive => self.alive,
                    Cell::Dead => self.dead,
                };

                for _ in 0..self.multiplier {
                    self.fb.push(glyph);
                }
            }

            self.fb.push('\n');
        }

        &self.fb
    }
}
