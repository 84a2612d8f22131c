use crate::destroyable::Destroyable;
use glib::{ControlFlow, SourceId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// glib timeouts owned by one page. `clear` removes every source that has not fired yet.
#[derive(Default)]
pub struct TimerSet {
    sources: Rc<RefCell<HashMap<u64, SourceId>>>,
    next_id: Cell<u64>,
}

impl TimerSet {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn once<F: FnOnce() + 'static>(&self, delay: Duration, callback: F) {
        let id = self.next_id();
        let sources = Rc::downgrade(&self.sources);
        let source = glib::timeout_add_local_once(delay, move || {
            if let Some(sources) = sources.upgrade() {
                sources.borrow_mut().remove(&id);
            }
            callback();
        });
        self.sources.borrow_mut().insert(id, source);
    }

    pub fn every<F: FnMut() -> ControlFlow + 'static>(&self, interval: Duration, mut callback: F) {
        let id = self.next_id();
        let sources = Rc::downgrade(&self.sources);
        let source = glib::timeout_add_local(interval, move || {
            let flow = callback();
            if flow == ControlFlow::Break {
                if let Some(sources) = sources.upgrade() {
                    sources.borrow_mut().remove(&id);
                }
            }
            flow
        });
        self.sources.borrow_mut().insert(id, source);
    }

    pub fn clear(&self) {
        let pending: Vec<SourceId> = self.sources.borrow_mut().drain().map(|(_, source)| source).collect();
        for source in pending {
            source.remove();
        }
    }
}

impl Destroyable for TimerSet {
    fn destroy(&mut self) {
        self.clear();
    }
}
