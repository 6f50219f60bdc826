//! Air Canvas
//!
//! Draw on a live camera feed with hand gestures: two raised fingers pick a
//! tool or color from the menu strip, one raised finger paints onto a
//! persistent canvas that is composited over every frame.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod header;
pub mod menu;
pub mod session;
pub mod stroke;
pub mod tools;
pub mod types;

pub use error::Error;
pub use session::Session;
