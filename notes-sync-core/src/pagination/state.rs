//! Listing-backed pagination state

use std::collections::VecDeque;

use crate::error::{CoreError, CoreResult};
use crate::types::{FileList, Note, NoteId, RefNote};

use super::RenderingQueue;

/// Listing paths not yet promoted into the rendering queue
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnprocessedFiles {
    paths: VecDeque<String>,
    file_list_version: u64,
}

impl UnprocessedFiles {
    #[must_use]
    pub fn new(file_list: FileList) -> Self {
        Self {
            paths: file_list.paths.into(),
            file_list_version: file_list.version,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn file_list_version(&self) -> u64 {
        self.file_list_version
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    fn take_front(&mut self, count: usize) -> Vec<String> {
        self.paths.drain(..count).collect()
    }
}

/// A retrieved listing being paged into the visible note list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListRetrieved {
    unprocessed_files: UnprocessedFiles,
    /// Next id to hand out
    last_used_note_id: NoteId,
    rendering_queue: RenderingQueue,
    notes: Vec<Note>,
}

impl FileListRetrieved {
    /// Fresh state for `file_list`: everything unprocessed, nothing visible.
    ///
    /// `next_note_id` lets a replacement listing keep ids unique across the
    /// session.
    #[must_use]
    pub fn new(file_list: FileList, next_note_id: NoteId) -> Self {
        Self {
            unprocessed_files: UnprocessedFiles::new(file_list),
            last_used_note_id: next_note_id,
            rendering_queue: RenderingQueue::new(),
            notes: Vec::new(),
        }
    }

    pub fn unprocessed_files(&self) -> &UnprocessedFiles {
        &self.unprocessed_files
    }

    pub fn last_used_note_id(&self) -> NoteId {
        self.last_used_note_id
    }

    pub fn rendering_queue(&self) -> &RenderingQueue {
        &self.rendering_queue
    }

    /// Fully loaded notes, in listing order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn file_list_version(&self) -> u64 {
        self.unprocessed_files.file_list_version
    }

    /// Whether more pages can be shifted
    pub fn has_more_pages(&self) -> bool {
        !self.unprocessed_files.is_empty()
    }

    /// Every listed note is visible
    pub fn is_fully_loaded(&self) -> bool {
        self.unprocessed_files.is_empty() && self.rendering_queue.is_empty()
    }

    /// Move the next page of paths into the rendering queue.
    ///
    /// Takes up to `page_size` paths from the front of the unprocessed files,
    /// gives each a fresh id, and queues them as `Ref` notes behind whatever
    /// is already waiting. Returns the new notes, which are the ones whose
    /// content must now be loaded. An exhausted listing yields an empty page.
    pub fn shift_notes_to_load_for_next_page(&mut self, page_size: usize) -> Vec<RefNote> {
        let page_size = page_size.min(self.unprocessed_files.len());
        let first_id = self.last_used_note_id;

        let notes_to_load: Vec<RefNote> = self
            .unprocessed_files
            .take_front(page_size)
            .into_iter()
            .zip(first_id..)
            .map(|(path, id)| RefNote::new(id, path))
            .collect();

        self.rendering_queue
            .extend(notes_to_load.iter().cloned().map(Note::from));
        self.last_used_note_id = first_id + notes_to_load.len() as NoteId;

        log::debug!(
            "Shifted page of {} notes (listing v{}, {} unprocessed left)",
            notes_to_load.len(),
            self.file_list_version(),
            self.unprocessed_files.len()
        );
        notes_to_load
    }

    /// Accept a loaded note and release every note that is now in order.
    ///
    /// The queue entry with the same id is replaced, then the longest run of
    /// loaded entries at the queue head is appended to `notes`. Returns how
    /// many notes became visible.
    ///
    /// The id must be queued: stale results are filtered by the caller via
    /// the listing version, so an unknown id is an invariant break and is
    /// reported as `NoteNotQueued` with the state left untouched.
    pub fn handle_loaded_note(&mut self, loaded: Note) -> CoreResult<usize> {
        if !loaded.is_loaded() {
            return Err(CoreError::InvalidTransition {
                note_id: loaded.id(),
                from: loaded.state_name().to_string(),
                action: "release into the note list".to_string(),
            });
        }

        self.rendering_queue.replace(loaded)?;
        let ready = self.rendering_queue.drain_ready_prefix();
        let released = ready.len();
        self.notes.extend(ready);

        if released > 0 {
            log::debug!(
                "Released {released} notes ({} visible, {} queued)",
                self.notes.len(),
                self.rendering_queue.len()
            );
        }
        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(count: usize, version: u64) -> FileList {
        FileList::new((0..count).map(|i| format!("/note {i}.txt")).collect(), version)
    }

    fn load(note: &RefNote) -> Note {
        note.clone().loaded(format!("content of {}", note.title())).into()
    }

    fn ids(notes: &[RefNote]) -> Vec<NoteId> {
        notes.iter().map(RefNote::id).collect()
    }

    #[test]
    fn short_listing_fits_in_one_page() {
        let mut state = FileListRetrieved::new(listing(3, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);

        assert_eq!(page.len(), 3);
        assert_eq!(state.unprocessed_files().len(), 0);
        assert_eq!(state.rendering_queue().len(), 3);
    }

    #[test]
    fn long_listing_leaves_remainder_unprocessed() {
        let mut state = FileListRetrieved::new(listing(7, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);

        assert_eq!(page.len(), 5);
        assert_eq!(state.unprocessed_files().len(), 2);
        assert_eq!(
            state.unprocessed_files().paths().collect::<Vec<_>>(),
            vec!["/note 5.txt", "/note 6.txt"]
        );
    }

    #[test]
    fn exhausted_listing_yields_empty_page() {
        let mut state = FileListRetrieved::new(listing(2, 0), 0);
        state.shift_notes_to_load_for_next_page(5);
        let before = state.clone();

        let page = state.shift_notes_to_load_for_next_page(5);
        assert!(page.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn ids_continue_across_pages_without_gaps() {
        let mut state = FileListRetrieved::new(listing(8, 0), 0);
        let first = state.shift_notes_to_load_for_next_page(5);
        let second = state.shift_notes_to_load_for_next_page(5);

        assert_eq!(ids(&first), vec![0, 1, 2, 3, 4]);
        assert_eq!(ids(&second), vec![5, 6, 7]);
        assert_eq!(state.last_used_note_id(), 8);
    }

    #[test]
    fn titles_come_from_paths() {
        let mut state = FileListRetrieved::new(
            FileList::new(vec!["/a(sl)b~~2.txt".to_string()], 0),
            0,
        );
        let page = state.shift_notes_to_load_for_next_page(5);
        assert_eq!(page[0].title(), "a/b");
    }

    #[test]
    fn head_load_releases_one_note() {
        let mut state = FileListRetrieved::new(listing(5, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);

        assert_eq!(state.handle_loaded_note(load(&page[0])), Ok(1));
        assert_eq!(state.rendering_queue().len(), 4);
        assert_eq!(state.notes().len(), 1);
    }

    #[test]
    fn out_of_order_load_waits_for_predecessor() {
        let mut state = FileListRetrieved::new(listing(5, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);

        assert_eq!(state.handle_loaded_note(load(&page[1])), Ok(0));
        assert_eq!(state.rendering_queue().len(), 5);
        assert!(state.notes().is_empty());

        assert_eq!(state.handle_loaded_note(load(&page[0])), Ok(2));
        assert_eq!(state.rendering_queue().len(), 3);
        let visible: Vec<NoteId> = state.notes().iter().map(Note::id).collect();
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn reverse_completion_keeps_listing_order_across_pages() {
        let mut state = FileListRetrieved::new(listing(7, 3), 0);
        let mut requested = state.shift_notes_to_load_for_next_page(5);
        requested.extend(state.shift_notes_to_load_for_next_page(5));

        for note in requested.iter().rev() {
            state.handle_loaded_note(load(note)).unwrap();
        }

        assert!(state.is_fully_loaded());
        let titles: Vec<&str> = state.notes().iter().map(Note::title).collect();
        assert_eq!(
            titles,
            (0..7).map(|i| format!("note {i}")).collect::<Vec<_>>()
        );
    }

    #[test]
    fn containers_partition_listing_in_order() {
        let mut state = FileListRetrieved::new(listing(9, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);
        state.handle_loaded_note(load(&page[0])).unwrap();
        state.handle_loaded_note(load(&page[3])).unwrap();

        let mut all: Vec<String> = state
            .notes()
            .iter()
            .chain(state.rendering_queue().iter())
            .filter_map(|note| note.path().map(str::to_string))
            .collect();
        all.extend(state.unprocessed_files().paths().map(str::to_string));

        assert_eq!(all, listing(9, 0).paths);
    }

    #[test]
    fn unknown_id_is_reported_and_state_untouched() {
        let mut state = FileListRetrieved::new(listing(3, 0), 0);
        state.shift_notes_to_load_for_next_page(5);
        let before = state.clone();

        let stray = RefNote::new(42, "/stray.txt").loaded("?").into();
        assert_eq!(
            state.handle_loaded_note(stray),
            Err(CoreError::NoteNotQueued(42))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn duplicate_completion_is_reported() {
        let mut state = FileListRetrieved::new(listing(2, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);
        state.handle_loaded_note(load(&page[0])).unwrap();

        assert_eq!(
            state.handle_loaded_note(load(&page[0])),
            Err(CoreError::NoteNotQueued(0))
        );
    }

    #[test]
    fn unloaded_note_is_rejected() {
        let mut state = FileListRetrieved::new(listing(2, 0), 0);
        let page = state.shift_notes_to_load_for_next_page(5);

        let result = state.handle_loaded_note(page[0].clone().into());
        assert!(matches!(result, Err(CoreError::InvalidTransition { note_id: 0, .. })));
    }

    #[test]
    fn ids_start_from_given_offset() {
        let mut state = FileListRetrieved::new(listing(2, 1), 10);
        let page = state.shift_notes_to_load_for_next_page(5);
        assert_eq!(ids(&page), vec![10, 11]);
    }
}
