//! Port implementations.
//!
//! `live` talks to the real disk, terminal and cluster; `buffer` captures
//! terminal output in memory.

pub mod buffer;
pub mod live;
