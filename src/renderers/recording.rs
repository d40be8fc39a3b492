//! Test double that records every call the core makes into its host.

use super::{Event, WindowHost};
use crate::core::Rgba;
use crate::error::{Error, Result};
use crate::pipeline::Framebuffer;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Present { width: usize, height: usize },
    RequestRedraw,
    ScheduleTimer(Duration),
    SetViewport { width: usize, height: usize },
    SetTitle(String),
    RequestWindowClose,
    RequestProcessExit,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub events: VecDeque<Event>,
    pub calls: Vec<HostCall>,
    pub presented: Vec<Vec<Rgba>>,
    pub fail_present: bool,
}

impl RecordingHost {
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn presents(&self) -> usize {
        self.count(|c| matches!(c, HostCall::Present { .. }))
    }

    pub fn window_closes(&self) -> usize {
        self.count(|c| *c == HostCall::RequestWindowClose)
    }
}

impl WindowHost for RecordingHost {
    fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        if self.fail_present {
            return Err(Error::Present(minifb::Error::UpdateFailed(
                "display refused the frame".into(),
            )));
        }
        self.calls.push(HostCall::Present {
            width: frame.width(),
            height: frame.height(),
        });
        self.presented.push(frame.pixels().to_vec());
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.calls.push(HostCall::RequestRedraw);
    }

    fn schedule_timer(&mut self, delay: Duration) {
        self.calls.push(HostCall::ScheduleTimer(delay));
    }

    fn set_viewport(&mut self, width: usize, height: usize) {
        self.calls.push(HostCall::SetViewport { width, height });
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(HostCall::SetTitle(title.to_owned()));
    }

    fn request_window_close(&mut self) {
        self.calls.push(HostCall::RequestWindowClose);
    }

    fn request_process_exit(&mut self) {
        self.calls.push(HostCall::RequestProcessExit);
    }
}
