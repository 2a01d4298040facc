//! Page components.
//!
//! Pure functions from literal content to [`Node`](crate::view::Node)
//! trees. Composition only: a component calls other components and returns
//! what they build. Nothing here reads interaction state.

pub mod footer;
pub mod hero;
pub mod lists;
pub mod nav;
pub mod page;
pub mod section;
pub mod summary;

pub use lists::{education_timeline, project_list, skills_grid, EDUCATION_HOVER, SKILL_HOVER};
pub use nav::NAV_ITEMS;
pub use page::{page, NAV_INDEX};
pub use section::section;
