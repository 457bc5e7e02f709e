//! UI Components
//!
//! Leptos components making up the todos page.

mod header;
mod filter_select;
mod search_input;
mod new_todo_form;
pub(crate) mod todo_list;
mod todo_row;
mod footer;

pub use header::Header;
pub use filter_select::FilterSelect;
pub use search_input::SearchInput;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use footer::Footer;
