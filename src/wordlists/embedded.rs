//! Embedded word lists
//!
//! Default goal and accepted lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/goal_words.rs"));
include!(concat!(env!("OUT_DIR"), "/accepted_words.rs"));
