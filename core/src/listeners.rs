// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use paginate_utils::pagination::PaginationAction;

/// A zero-argument navigation callback
pub type Callback = Box<dyn Fn() + Send + 'static>;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Callbacks registered for the navigation events, in subscription order
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, PaginationAction, Callback)>,
}

impl Listeners {
    pub fn subscribe(
        &mut self,
        action: PaginationAction,
        callback: impl Fn() + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, action, Box::new(callback)));
        id
    }

    /// Returns false if the listener was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invokes every callback registered for `action`, returns how many ran
    pub fn emit(&self, action: PaginationAction) -> usize {
        let mut invoked = 0;
        for (_, _, callback) in self.entries.iter().filter(|(_, a, _)| *a == action) {
            callback();
            invoked += 1;
        }
        invoked
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, action, _)| (id, action)))
            .finish()
    }
}
