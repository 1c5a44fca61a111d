//! UI state transitions, kept free of any rendering so they can be exercised on the host.
//!
//! Each piece of state is owned by exactly one signal in the view layer and
//! written only by its own event handler.

pub mod contact;
pub mod filter;
pub mod menu;
pub mod scroll;
pub mod typewriter;

pub use contact::{ContactDraft, Submission};
pub use filter::{filter_projects, filter_tokens, Filter, FILTER_STORAGE_KEY};
pub use menu::{Menu, MenuEvent};
pub use scroll::{past_threshold, show_back_to_top, SCROLL_THRESHOLD_PX};
pub use typewriter::{Typewriter, TYPEWRITER_INTERVAL_MS};
