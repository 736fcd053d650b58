//! Actions layer
//!
//! One actions type per page. Each wraps the page object, logs the step being
//! performed and forwards the call. Tests and step definitions talk to this
//! layer, never to page objects directly.

mod check_box;
mod elements;
mod landing;
mod practice_form;
mod text_box;

pub use check_box::CheckBoxActions;
pub use elements::ElementsPageActions;
pub use landing::LandingPageActions;
pub use practice_form::PracticeFormActions;
pub use text_box::TextBoxActions;
