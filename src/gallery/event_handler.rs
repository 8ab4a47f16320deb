use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// How long to wait for input before checking the tick again
const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            // Check for terminal events without blocking first
            if poll(Duration::from_millis(0))? {
                match crossterm::event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(EventType::Key(key)),
                    Event::Mouse(mouse) => return Ok(EventType::Mouse(mouse)),
                    Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                    _ => return Ok(EventType::Other),
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::DEFAULT_TICK_RATE_MS))
    }
}
