//! TUI Arcade - collect-the-dot and Snake for the terminal
//!
//! This library provides:
//! - Core game logic, free of terminal I/O (game module)
//! - Drawing surfaces and the ratatui renderer (render module)
//! - Keyboard mapping (input module)
//! - Sound cues (audio module)
//! - The interactive terminal runner (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
