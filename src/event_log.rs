//! Append-only text log of lock events, resets and game overs.
//!
//! One line per record, `key=value` fields, for example:
//!
//! ```text
//! lock episode=0 piece=7 rows=1 streaks=0 cells=10 passes=1
//! lock episode=0 piece=31 rows=0 streaks=0 cells=0 passes=0
//! game_over episode=0 piece=31
//! reset episode=1 seed=2891336453
//! ```
//!
//! Writes happen while the terminal is in raw mode, so a failed write is kept
//! and reported by the caller once the screen is restored. After the first
//! failure the log stops writing.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Result};

use crate::types::LockEvent;

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    error: Option<io::Error>,
}

impl EventLog {
    /// Open `path` for appending, or build a no-op log when it is `None`
    pub fn open(path: Option<&str>) -> Result<Self> {
        let out = match path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| anyhow!("event log: cannot open {}: {}", path, e))?;
                Some(BufWriter::new(file))
            }
            None => None,
        };
        Ok(Self { out, error: None })
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            error: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.out.is_some() && self.error.is_none()
    }

    /// Record a lock attempt; a game-ending lock also records `game_over`
    pub fn record_lock(&mut self, episode_id: u32, event: &LockEvent) {
        self.write_line(format_args!(
            "lock episode={} piece={} rows={} streaks={} cells={} passes={}",
            episode_id,
            event.piece_id,
            event.rows_cleared,
            event.streaks_cleared,
            event.cells_cleared,
            event.passes
        ));
        if event.game_over {
            self.write_line(format_args!(
                "game_over episode={} piece={}",
                episode_id, event.piece_id
            ));
        }
    }

    pub fn record_reset(&mut self, episode_id: u32, seed: u32) {
        self.write_line(format_args!("reset episode={} seed={}", episode_id, seed));
    }

    /// Flush and hand back the first write error, if any
    pub fn finish(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            if self.error.is_none() {
                if let Err(e) = out.flush() {
                    self.error = Some(e);
                }
            }
        }
        match self.error.take() {
            Some(e) => {
                self.out = None;
                Err(anyhow!("event log: write failed: {}", e))
            }
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn write_line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = out.write_fmt(args).and_then(|()| out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(piece_id: u32, rows: u32, game_over: bool) -> LockEvent {
        LockEvent {
            piece_id,
            rows_cleared: rows,
            streaks_cleared: 0,
            cells_cleared: rows * 10,
            passes: rows,
            game_over,
        }
    }

    fn text(log: EventLog<Vec<u8>>) -> String {
        String::from_utf8(log.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_lock_and_reset_lines() {
        let mut log = EventLog::from_writer(Vec::new());
        log.record_lock(0, &lock(3, 1, false));
        log.record_reset(1, 99);
        assert!(log.finish().is_ok());
        assert_eq!(
            text(log),
            "lock episode=0 piece=3 rows=1 streaks=0 cells=10 passes=1\nreset episode=1 seed=99\n"
        );
    }

    #[test]
    fn test_game_over_follows_its_lock_line() {
        let mut log = EventLog::from_writer(Vec::new());
        log.record_lock(2, &lock(8, 0, true));
        assert_eq!(
            text(log),
            "lock episode=2 piece=8 rows=0 streaks=0 cells=0 passes=0\ngame_over episode=2 piece=8\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported_once() {
        let mut log = EventLog::from_writer(Broken);
        log.record_reset(1, 1);
        assert!(!log.enabled());
        log.record_reset(2, 2);
        let err = log.finish().unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert!(log.finish().is_ok());
    }

    #[test]
    fn test_unconfigured_log_is_silent() {
        let mut log = EventLog::open(None).unwrap();
        log.record_reset(1, 1);
        assert!(!log.enabled());
        assert!(log.finish().is_ok());
    }
}
