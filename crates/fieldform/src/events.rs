//! Name-bound update sinks for inputs rendered by a form
//!
//! Inputs cannot hold the form mutably while it renders them, so each input
//! gets a [`FieldSink`] tagged with its field name. Updates wait in the shared
//! [`UpdateQueue`] until [`Form::apply`](crate::Form::apply) merges them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::descriptor::FieldUpdate;
use crate::input::OnSetValue;

type Pending = Rc<RefCell<VecDeque<(String, FieldUpdate)>>>;

/// Updates reported by inputs, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct UpdateQueue {
    pending: Pending,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that tags every update with `name`.
    pub fn sink(&self, name: impl Into<String>) -> FieldSink {
        FieldSink {
            name: name.into(),
            pending: Rc::clone(&self.pending),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Takes every pending update, oldest first.
    pub fn drain(&self) -> Vec<(String, FieldUpdate)> {
        self.pending.borrow_mut().drain(..).collect()
    }
}

/// Update callback bound to one field name.
#[derive(Debug, Clone)]
pub struct FieldSink {
    name: String,
    pending: Pending,
}

impl FieldSink {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl OnSetValue for FieldSink {
    fn set_value(&mut self, update: FieldUpdate) {
        self.pending
            .borrow_mut()
            .push_back((self.name.clone(), update));
    }
}
