pub mod option_list;
pub mod question;
pub mod test_draft;
pub use option_list::OptionList;
pub use question::{Difficulty, Question, QuestionKind};
pub use test_draft::TestDraft;
