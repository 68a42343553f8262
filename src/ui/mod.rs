//! Terminal front end: keypad input, display buffer and the session loop.

mod display;
mod keypad;
mod session;

pub use display::Display;
pub use keypad::{Key, Keypad};
pub use session::{ClipboardWriter, Session};
