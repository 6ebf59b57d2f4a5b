//! Off-screen grid of styled glyphs that the game view paints into.
//!
//! Coordinates are terminal columns and lines with (0, 0) at the top left.
//! Writes that fall outside the grid are silently dropped, so drawing code
//! never has to clip.

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self(r, g, b)
    }
}

/// Text intensity; bold and dim are mutually exclusive here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }

    pub const fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb(220, 220, 220), Rgb(0, 0, 0))
    }
}

/// One terminal column on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().glyph(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height, Glyph::default());
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Take the given size and fill every position with `blank`.
    ///
    /// The allocation is kept, so a buffer reused across frames stops
    /// allocating once it has seen the largest terminal size.
    pub fn reset(&mut self, width: u16, height: u16, blank: Glyph) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(width as usize * height as usize, blank);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Line `y`, left to right; empty when `y` is below the last line
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Write `s` starting at (x, y); returns the column after the last char
    pub fn text(&mut self, x: u16, y: u16, s: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in s.chars() {
            self.set(col, y, style.glyph(ch));
            col = col.saturating_add(1);
        }
        col
    }

    pub fn number(&mut self, x: u16, y: u16, value: u32, style: Style) -> u16 {
        self.text(x, y, &value.to_string(), style)
    }

    pub fn rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for line in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.set(col, line, glyph);
            }
        }
    }

    /// Characters of line `y`, styles ignored
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_returns_next_free_column() {
        let mut fb = FrameBuffer::new(8, 1);
        let end = fb.number(1, 0, 4072, Style::default());
        assert_eq!(end, 5);
        fb.number(end + 1, 0, 0, Style::default());
        assert_eq!(fb.row_text(0), " 4072 0 ");
    }

    #[test]
    fn writes_past_the_edges_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.text(1, 1, "abcdef", Style::default());
        fb.set(9, 9, Style::default().glyph('x'));
        fb.rect(2, 0, 5, 5, Style::default().glyph('#'));
        assert_eq!(fb.row_text(0), "  #");
        assert_eq!(fb.row_text(1), " a#");
    }

    #[test]
    fn reset_resizes_and_blanks() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Style::default().glyph('z'));
        let blank = Style::default().glyph('.');
        fb.reset(4, 3, blank);
        assert_eq!(fb.row_text(0), "....");
        assert_eq!(fb.get(3, 2), Some(blank));
        assert_eq!(fb.get(4, 0), None);
        assert!(fb.row(3).is_empty());
    }

    #[test]
    fn weight_builders_override_each_other() {
        let style = Style::default().bold().dim();
        assert_eq!(style.weight, Weight::Dim);
        assert_eq!(Style::default().weight, Weight::Normal);
    }
}
