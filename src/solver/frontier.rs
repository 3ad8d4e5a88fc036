use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use fnv::FnvHashSet;

use crate::map::MapModel;
use crate::state::{Fingerprint, PuzzleState};

/// States waiting to be explored plus the index of everything already seen.
///
/// A fingerprint is either queued, explored or unknown. Pushing a known
/// fingerprint does nothing so no state is ever queued or explored twice.
pub(crate) struct Frontier<'a> {
    map: &'a MapModel,
    queue: Queue<'a>,
    queued: FnvHashSet<Fingerprint<'a>>,
    explored: FnvHashSet<Fingerprint<'a>>,
    next_seq: u64,
}

enum Queue<'a> {
    Fifo(VecDeque<&'a PuzzleState<'a>>),
    Priority(BinaryHeap<Reverse<QueueEntry<'a>>>),
}

impl<'a> Frontier<'a> {
    /// Breadth-first order.
    pub(crate) fn fifo(map: &'a MapModel) -> Self {
        Self::new(map, Queue::Fifo(VecDeque::new()))
    }

    /// Lowest `depth + heuristic` first, equal keys in insertion order.
    pub(crate) fn priority(map: &'a MapModel) -> Self {
        Self::new(map, Queue::Priority(BinaryHeap::new()))
    }

    fn new(map: &'a MapModel, queue: Queue<'a>) -> Self {
        Frontier {
            map,
            queue,
            queued: FnvHashSet::default(),
            explored: FnvHashSet::default(),
            next_seq: 0,
        }
    }

    /// Whether the fingerprint is queued or already explored.
    pub(crate) fn contains<'b>(&'b self, fingerprint: &Fingerprint<'b>) -> bool
    where
        'a: 'b,
    {
        let queued: &'b FnvHashSet<Fingerprint<'b>> = &self.queued;
        let explored: &'b FnvHashSet<Fingerprint<'b>> = &self.explored;
        queued.contains(fingerprint) || explored.contains(fingerprint)
    }

    /// Returns false and leaves the frontier untouched if the state is already known.
    pub(crate) fn push(&mut self, state: &'a PuzzleState<'a>) -> bool {
        let fingerprint = state.fingerprint(self.map);
        if self.explored.contains(&fingerprint) || !self.queued.insert(fingerprint) {
            return false;
        }

        match self.queue {
            Queue::Fifo(ref mut queue) => queue.push_back(state),
            Queue::Priority(ref mut heap) => {
                heap.push(Reverse(QueueEntry {
                    cost: state.cost(),
                    seq: self.next_seq,
                    state,
                }));
            }
        }
        self.next_seq += 1;
        true
    }

    /// Removes the next state and marks it explored.
    pub(crate) fn pop(&mut self) -> Option<&'a PuzzleState<'a>> {
        let state = match self.queue {
            Queue::Fifo(ref mut queue) => queue.pop_front()?,
            Queue::Priority(ref mut heap) => heap.pop()?.0.state,
        };
        let fingerprint = state.fingerprint(self.map);
        self.queued.remove(&fingerprint);
        self.explored.insert(fingerprint);
        Some(state)
    }

    pub(crate) fn len(&self) -> usize {
        match self.queue {
            Queue::Fifo(ref queue) => queue.len(),
            Queue::Priority(ref heap) => heap.len(),
        }
    }

    pub(crate) fn explored_len(&self) -> usize {
        self.explored.len()
    }
}

struct QueueEntry<'a> {
    cost: i64,
    // insertion order, breaks ties between equal costs
    seq: u64,
    state: &'a PuzzleState<'a>,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for QueueEntry<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;
    use crate::level::Level;

    fn corridor() -> Level {
        "#######\n#P    #\n#######".parse().unwrap()
    }

    fn at(level: &Level, c: i32, heuristic: i32) -> PuzzleState<'static> {
        let mut state = PuzzleState::initial(&level.map, vec![], Pos::new(1, c));
        state.heuristic = heuristic;
        state
    }

    #[test]
    fn fifo_order() {
        let level = corridor();
        let states = [at(&level, 1, 5), at(&level, 2, 0), at(&level, 3, 9)];
        let mut frontier = Frontier::fifo(&level.map);
        for s in &states {
            assert!(frontier.push(s));
        }
        let popped: Vec<_> = (0..3).map(|_| frontier.pop().unwrap().player_pos().c).collect();
        assert_eq!(popped, vec![1, 2, 3]);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn priority_order_with_ties() {
        let level = corridor();
        let states = [
            at(&level, 1, 3),
            at(&level, 2, 1),
            at(&level, 3, 3),
            at(&level, 4, 1),
            at(&level, 5, 2),
        ];
        let mut frontier = Frontier::priority(&level.map);
        for s in &states {
            frontier.push(s);
        }
        assert_eq!(frontier.len(), 5);
        let popped: Vec<_> = (0..5).map(|_| frontier.pop().unwrap().player_pos().c).collect();
        assert_eq!(popped, vec![2, 4, 5, 1, 3]);
        assert_eq!(frontier.len(), 0);
        assert_eq!(frontier.explored_len(), 5);
    }

    #[test]
    fn duplicates_suppressed() {
        let level = corridor();
        let a = at(&level, 1, 0);
        let a_again = at(&level, 1, 7);
        let b = at(&level, 2, 0);
        let mut frontier = Frontier::fifo(&level.map);

        assert!(frontier.push(&a));
        assert!(frontier.contains(&a_again.fingerprint(&level.map)));
        // already queued
        assert!(!frontier.push(&a_again));
        assert_eq!(frontier.len(), 1);

        assert_eq!(frontier.pop().unwrap().heuristic(), 0);
        // already explored
        assert!(!frontier.push(&a_again));
        assert!(frontier.contains(&a.fingerprint(&level.map)));
        assert!(!frontier.contains(&b.fingerprint(&level.map)));
        assert!(frontier.push(&b));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.explored_len(), 1);
    }
}
