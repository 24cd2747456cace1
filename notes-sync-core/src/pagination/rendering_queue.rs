//! Rendering queue

use std::collections::VecDeque;

use crate::error::{CoreError, CoreResult};
use crate::types::{Note, NoteId};

/// Notes waiting for their content, in listing order.
///
/// Readiness is read off each entry's lifecycle state; there is no side
/// index of ready ids to keep in step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderingQueue {
    entries: VecDeque<Note>,
}

impl RenderingQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.entries.iter()
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.entries.iter().any(|note| note.id() == id)
    }

    /// Append notes at the tail, keeping their order.
    pub fn extend(&mut self, notes: impl IntoIterator<Item = Note>) {
        self.entries.extend(notes);
    }

    /// Swap the entry with the same id for `loaded`.
    ///
    /// Fails without touching the queue if no entry has that id.
    pub fn replace(&mut self, loaded: Note) -> CoreResult<()> {
        let id = loaded.id();
        let slot = self
            .entries
            .iter_mut()
            .find(|note| note.id() == id)
            .ok_or(CoreError::NoteNotQueued(id))?;
        *slot = loaded;
        Ok(())
    }

    /// Remove and return the longest run of loaded notes at the head.
    pub fn drain_ready_prefix(&mut self) -> Vec<Note> {
        let ready = self
            .entries
            .iter()
            .take_while(|note| note.is_loaded())
            .count();
        self.entries.drain(..ready).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RefNote;

    fn queue_of(ids: &[NoteId]) -> RenderingQueue {
        let mut queue = RenderingQueue::new();
        queue.extend(
            ids.iter()
                .map(|id| Note::from(RefNote::new(*id, format!("/n{id}.txt")))),
        );
        queue
    }

    fn loaded(id: NoteId) -> Note {
        RefNote::new(id, format!("/n{id}.txt")).loaded("x").into()
    }

    #[test]
    fn nothing_drains_while_head_is_pending() {
        let mut queue = queue_of(&[0, 1, 2]);
        queue.replace(loaded(2)).unwrap();
        assert!(queue.drain_ready_prefix().is_empty());
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn drain_stops_at_first_pending_entry() {
        let mut queue = queue_of(&[0, 1, 2, 3]);
        queue.replace(loaded(0)).unwrap();
        queue.replace(loaded(1)).unwrap();
        queue.replace(loaded(3)).unwrap();

        let ready: Vec<NoteId> = queue.drain_ready_prefix().iter().map(Note::id).collect();
        assert_eq!(ready, vec![0, 1]);
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(2));
        assert!(queue.contains(3));
    }

    #[test]
    fn replace_unknown_id_fails_and_leaves_queue() {
        let mut queue = queue_of(&[0, 1]);
        let before = queue.clone();
        assert_eq!(queue.replace(loaded(7)), Err(CoreError::NoteNotQueued(7)));
        assert_eq!(queue, before);
    }
}
