use super::Event;
use std::collections::VecDeque;
use std::time::Instant;

/// What a polling host should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Event(Event),
    /// Nothing else is ready; wait until the deadline, then deliver a timer.
    TimerAt(Instant),
}

/// Event ordering for hosts without callbacks.
///
/// Queued window events come first, then a requested redraw, then the timer.
/// Once closed, redraws are dropped and only the timer is left to fire.
#[derive(Debug, Default)]
pub struct EventSchedule {
    pending: VecDeque<Event>,
    redraw: bool,
    timer: Option<Instant>,
    closed: bool,
    exit_requested: bool,
}

impl EventSchedule {
    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    pub fn request_redraw(&mut self) {
        if !self.closed {
            self.redraw = true;
        }
    }

    /// Replaces any timer already armed.
    pub fn schedule_timer(&mut self, deadline: Instant) {
        self.timer = Some(deadline);
    }

    /// Drop queued events and any pending redraw. The armed timer survives.
    pub fn close(&mut self) {
        self.closed = true;
        self.redraw = false;
        self.pending.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn next_due(&mut self) -> Option<Due> {
        if self.exit_requested {
            return None;
        }
        if let Some(event) = self.pending.pop_front() {
            return Some(Due::Event(event));
        }
        if self.redraw {
            self.redraw = false;
            return Some(Due::Event(Event::Redraw));
        }
        self.timer.take().map(Due::TimerAt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KEY_ESCAPE;
    use std::time::Duration;

    fn escape() -> Event {
        Event::Key {
            code: KEY_ESCAPE,
            x: 0,
            y: 0,
        }
    }

    #[test]
    fn events_then_redraw_then_timer() {
        let deadline = Instant::now() + Duration::from_millis(16);
        let mut schedule = EventSchedule::default();
        schedule.schedule_timer(deadline);
        schedule.request_redraw();
        schedule.push(Event::Resize {
            width: 10,
            height: 10,
        });
        schedule.push(escape());

        assert_eq!(
            schedule.next_due(),
            Some(Due::Event(Event::Resize {
                width: 10,
                height: 10
            }))
        );
        assert_eq!(schedule.next_due(), Some(Due::Event(escape())));
        assert_eq!(schedule.next_due(), Some(Due::Event(Event::Redraw)));
        assert_eq!(schedule.next_due(), Some(Due::TimerAt(deadline)));
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn redraw_is_delivered_once() {
        let mut schedule = EventSchedule::default();
        schedule.request_redraw();
        schedule.request_redraw();
        assert_eq!(schedule.next_due(), Some(Due::Event(Event::Redraw)));
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let now = Instant::now();
        let mut schedule = EventSchedule::default();
        schedule.schedule_timer(now + Duration::from_millis(50));
        schedule.schedule_timer(now + Duration::from_millis(5));
        assert_eq!(
            schedule.next_due(),
            Some(Due::TimerAt(now + Duration::from_millis(5)))
        );
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn close_leaves_exactly_one_timer() {
        let deadline = Instant::now();
        let mut schedule = EventSchedule::default();
        schedule.push(escape());
        schedule.push(Event::Resize {
            width: 3,
            height: 3,
        });
        schedule.request_redraw();
        schedule.schedule_timer(deadline);

        schedule.close();
        schedule.request_redraw();
        assert!(schedule.is_closed());

        assert_eq!(schedule.next_due(), Some(Due::TimerAt(deadline)));
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn exit_stops_everything() {
        let mut schedule = EventSchedule::default();
        schedule.push(escape());
        schedule.request_redraw();
        schedule.schedule_timer(Instant::now());
        schedule.request_exit();
        assert_eq!(schedule.next_due(), None);
    }
}
