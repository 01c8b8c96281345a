//! Renderer capability and its adapters.
//!
//! The core only talks to [`backend::Renderer`]. [`recording::RecordingRenderer`] captures draw
//! calls; [`cpu::CpuRenderer`] rasterizes with `vello_cpu` and hands frames to a
//! [`sink::FrameSink`].

pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod recording;
pub(crate) mod sink;
pub(crate) mod text;
