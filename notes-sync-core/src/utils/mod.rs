//! Utility functions

pub mod path_title;
