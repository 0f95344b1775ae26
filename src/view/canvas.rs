use std::io::{self, Write};

use termion::color::{Bg, Fg, Rgb};

use crate::{pos, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub u8, pub u8, pub u8);

impl Tint {
    fn rgb(self) -> Rgb {
        Rgb(self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub char: char,
    pub fg: Tint,
    pub bg: Tint,
}

impl Glyph {
    pub fn blank(bg: Tint) -> Self {
        Self {
            char: ' ',
            fg: bg,
            bg,
        }
    }
}

/// Off-screen frame, flushed to the terminal in one write.
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Sized to the terminal, leaving the last row free so the cursor never
    /// scrolls the screen.
    pub fn from_screen(background: Tint) -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(
            width as usize,
            height.saturating_sub(1) as usize,
            background,
        ))
    }

    pub fn new(width: usize, height: usize, background: Tint) -> Self {
        Self {
            glyphs: vec![Glyph::blank(background); width * height],
            width,
            height,
        }
    }

    fn index(&self, Pos { x, y }: Pos) -> Option<usize> {
        let inside = x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height;
        inside.then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<Glyph> {
        self.index(pos).map(|index| self.glyphs[index])
    }

    /// Writes a glyph, anything off the canvas is clipped.
    pub fn put(&mut self, pos: Pos, glyph: Glyph) {
        if let Some(index) = self.index(pos) {
            self.glyphs[index] = glyph;
        }
    }

    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<Glyph>) {
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = pos!(x as i32, y as i32);
                if let Some(glyph) = f(pos) {
                    self.put(pos, glyph);
                }
            }
        }
    }

    pub fn text(&mut self, at: Pos, text: &str, fg: Tint, bg: Tint) {
        for (offset, char) in text.chars().enumerate() {
            self.put(at + pos!(offset as i32, 0), Glyph { char, fg, bg });
        }
    }

    pub fn render(&self) -> String {
        let mut result = String::new();
        for (y, row) in self.glyphs.chunks(self.width.max(1)).enumerate() {
            let goto = termion::cursor::Goto(1, y as u16 + 1);
            result += &format!("{goto}");
            let mut style = None;
            for glyph in row {
                if style != Some((glyph.fg, glyph.bg)) {
                    let (fg, bg) = (Fg(glyph.fg.rgb()), Bg(glyph.bg.rgb()));
                    result += &format!("{fg}{bg}");
                    style = Some((glyph.fg, glyph.bg));
                }
                result.push(glyph.char);
            }
        }
        let reset = termion::color::Reset;
        result += &format!("{}{}", Fg(reset), Bg(reset));
        result
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }
}
