//! Parsers for Lionhead's binary model formats.

pub mod l3d;
