//! Terminal escape sequence handlers.
//!
//! Organized by category:
//! - cursor: Cursor movement and positioning, plus the C0 controls
//! - editing: Erase and insert operations
//! - mode: DEC private mode set/reset
//! - style: SGR (Select Graphic Rendition) handling

mod cursor;
mod editing;
mod mode;
mod style;
