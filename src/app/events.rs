use crate::core::event::Event;
use std::io;
use std::time::Duration;

/// Where the workbench and its modal prompt read terminal events from.
pub trait EventSource {
    /// Next event, or `None` when nothing arrived within `timeout`.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            crossterm::event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}
