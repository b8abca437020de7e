pub mod course;
pub mod current_course;
pub mod department;
pub mod note;

pub use course::{Course, EditElectiveForm, Semester};
pub use current_course::Membership;
pub use department::Department;
pub use note::{NewNote, Note, NoteWithCourse, UpdateNoteRequest, UpdateNoteResponse};
