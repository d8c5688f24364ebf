//! Shift-register display drivers and demo firmware for the TM4C123 LaunchPad

#![cfg_attr(not(test), no_std)]
#![warn(dead_code)]
#![deny(missing_docs)]

// In release mode, cause linker error if panic is possible
// Developing with panic-never can be difficult because it does not indicate *where*
// a panicking branch exists
#[cfg(all(feature = "rt", not(debug_assertions)))]
extern crate panic_never;

extern crate embedded_hal;

pub mod drivers;

#[cfg(feature = "rt")]
pub mod board;
#[cfg(feature = "rt")]
pub mod builtins;
#[cfg(feature = "rt")]
pub mod startup;
