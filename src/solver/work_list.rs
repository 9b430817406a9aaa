use std::collections::VecDeque;

use crate::solver::constraint::ConstraintId;

/// FIFO queue of constraints awaiting revision, with membership dedup so a
/// constraint is never queued twice at the same time.
#[derive(Debug, Clone)]
pub struct WorkList {
    queue: VecDeque<ConstraintId>,
    members: im::HashSet<ConstraintId>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: im::HashSet::new(),
        }
    }

    pub fn push_back(&mut self, constraint_id: ConstraintId) {
        if !self.members.contains(&constraint_id) {
            self.queue.push_back(constraint_id);
            self.members.insert(constraint_id);
        }
    }

    pub fn pop_front(&mut self) -> Option<ConstraintId> {
        let item = self.queue.pop_front();
        if let Some(id) = item {
            self.members.remove(&id);
        }
        item
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
