mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod empty_notes;
pub use empty_notes::EmptyNotes;

mod notes;
pub use notes::NotesView;
