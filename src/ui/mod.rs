//! Terminal UI: view models and their ANSI rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Per-band component renderers
//! - [`helpers`]: Cursor positioning, truncation and layout arithmetic
//! - [`theme`]: Color schemes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardView, EmptyState, FooterInfo, FormFieldView, FormView, HeaderInfo, LetterBar, PageInfo,
    StatusKind, StatusLine, UIViewModel,
};
