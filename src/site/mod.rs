//! The site itself: page table, simulated forms and HTML rendering.

pub mod forms;
pub mod pages;
pub mod render;

pub use forms::{FormError, Submission};
pub use pages::{Block, FormKind, Page};
pub use render::{render_page, Notice, View};
