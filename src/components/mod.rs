//! UI Components
//!
//! Leptos components for the popup surface.

mod card_list;
mod recommend_form;
mod result_view;

pub use card_list::CardList;
pub use recommend_form::RecommendForm;
pub use result_view::ResultView;
