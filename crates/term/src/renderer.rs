//! Puts framebuffers on the real terminal.
//!
//! The renderer remembers the frame currently on screen. Each new frame is
//! compared line by line against it and only the spans that differ are
//! written; a frame of a different size, or the first frame after
//! [`TerminalRenderer::invalidate`], repaints the whole screen.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style, Weight};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows
    shown: FrameBuffer,
    /// Set when `shown` can no longer be trusted
    stale: bool,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: FrameBuffer::new(0, 0),
            stale: true,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?;
        self.stale = true;
        self.write_out()
    }

    /// Undo `enter`; also fine to call when `enter` failed halfway
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.write_out()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Show `frame`, then hand back the previously shown buffer in its place.
    ///
    /// The caller paints the next frame into whatever it gets back, so two
    /// buffers alternate and no frame is ever cloned.
    pub fn draw_swap(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        let same_size =
            self.shown.width() == frame.width() && self.shown.height() == frame.height();
        let prev = (!self.stale && same_size).then_some(&self.shown);

        self.bytes.clear();
        encode_frame(prev, frame, &mut self.bytes)?;
        self.write_out()?;

        std::mem::swap(&mut self.shown, frame);
        self.stale = false;
        Ok(())
    }

    fn write_out(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the escape sequences that turn `prev` into `next` on screen.
///
/// With no `prev` the screen is cleared and every line is written. Nothing is
/// emitted when the two frames are equal.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let old = prev.map_or(&[][..], |p| p.row(y));
        let new = next.row(y);
        for span in changed_spans(old, new) {
            out.queue(cursor::MoveTo(span.start as u16, y))?;
            for glyph in &new[span] {
                pen.switch_to(out, glyph.style)?;
                out.queue(Print(glyph.ch))?;
            }
        }
    }

    if pen.used() {
        out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
    }
    Ok(())
}

/// Maximal index ranges where `new` differs from `old`.
///
/// Positions past the end of `old` always count as changed.
fn changed_spans<'a>(
    old: &'a [Glyph],
    new: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |i: usize| old.get(i) != Some(&new[i]);
    let mut at = 0;
    std::iter::from_fn(move || {
        let start = (at..new.len()).find(|&i| differs(i))?;
        let end = (start..new.len()).find(|&i| !differs(i)).unwrap_or(new.len());
        at = end;
        Some(start..end)
    })
}

/// Terminal SGR state, so colours and weight are only sent when they change
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    weight: Option<Weight>,
}

impl Pen {
    fn switch_to(&mut self, out: &mut Vec<u8>, style: Style) -> io::Result<()> {
        if self.weight != Some(style.weight) {
            // An SGR reset also drops both colours
            out.queue(SetAttribute(Attribute::Reset))?;
            match style.weight {
                Weight::Normal => {}
                Weight::Bold => {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                Weight::Dim => {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
            }
            *self = Pen {
                weight: Some(style.weight),
                ..Pen::default()
            };
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn used(&self) -> bool {
        self.weight.is_some()
    }
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
