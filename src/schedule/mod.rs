//! Animation scheduler: steps through distinct timestamps at a fixed cadence and feeds each
//! composition to a renderer.

pub(crate) mod pacer;
pub(crate) mod scheduler;
