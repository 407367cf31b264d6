//! Core collaborators shared by both generators

pub mod clock;
