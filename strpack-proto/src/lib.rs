//! Fixed-width string array packing.
//!
//! This crate turns an ordered list of variable-length strings into the single padded,
//! terminator-guarded payload that binary table formats expect for an array of
//! fixed-length C strings, and defines the date formatting contract used next to it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "config")]
pub mod config;
pub mod consts;
pub mod data_types;
pub mod errors;
pub mod operations;
pub mod time;
pub mod utils;
