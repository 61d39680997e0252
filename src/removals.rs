use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::ParticipantRef;

/// Removal controls that are disabled while their DELETE is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRemovals {
    inflight: HashSet<ParticipantRef>,
}

pub enum RemovalAction {
    Begin(ParticipantRef),
    Settle(ParticipantRef),
}

impl PendingRemovals {
    pub fn contains(&self, target: &ParticipantRef) -> bool {
        self.inflight.contains(target)
    }
}

impl Reducible for PendingRemovals {
    type Action = RemovalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RemovalAction::Begin(r) => next.inflight.insert(r),
            RemovalAction::Settle(r) => next.inflight.remove(&r),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
