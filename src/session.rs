use crate::evaluating::*;
use crate::keypad::Key;

use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    press(Key),
    /// The expression field now holds exactly this text.
    edit(String),
    calculate,
}

/// Per-session calculator state, handed into and back out of every event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub expression: String,
    pub result: Option<EvaluationResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(mut self, event: Event) -> Self {
        match event {
            Event::press(Key::clear) => {
                self.expression.clear();
                self.result = None;
            },
            Event::press(key) => self.expression.push(key.label()),
            Event::edit(text) => self.expression = text,
            Event::calculate => {
                let result = evaluate(&self.expression);
                info!(expression = %self.expression, %result, "calculate");
                self.result = Some(result);
            },
        }
        self
    }

    pub fn handle_all<I: IntoIterator<Item = Event>>(self, events: I) -> Self {
        events.into_iter().fold(self, Self::handle)
    }
}
