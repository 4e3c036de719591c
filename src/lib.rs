#![doc = include_str!("../README.md")]

pub mod mem;
pub mod stdio;
