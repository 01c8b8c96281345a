//! Airglyph turns multi-station air-quality records into a looping sequence of abstract
//! compositions.
//!
//! The pipeline is one-directional:
//!
//! - Load a [`RecordStore`] (CSV via [`load_records`], or the synthetic generator)
//! - Compose one [`Composition`] per distinct timestamp with a [`FrameComposer`]
//! - Drive any [`Renderer`] at a fixed cadence with the [`Scheduler`]
//!
//! Geometry randomness flows through a seeded RNG, so a fixed seed reproduces every frame.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod classify;
pub(crate) mod compose;
/// JSON run configuration.
pub mod config;
pub(crate) mod data;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod schedule;
pub(crate) mod synth;

pub use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgb8, Timestamp, Vec2};
pub use crate::foundation::error::{AirglyphError, AirglyphResult};

pub use crate::classify::aqi::{AQI_BREAKPOINTS, AqiCategory};
pub use crate::classify::palette::{BUCKET_BREAKPOINTS, PALETTE_SLOTS, PaletteFamily};
pub use crate::classify::{Classification, classify};

pub use crate::data::layout::{BEIJING_STATIONS, StationLayout};
pub use crate::data::record::{Field, Record};
pub use crate::data::source::{DataOrigin, load_records};
pub use crate::data::store::RecordStore;
pub use crate::data::synthetic::{SyntheticConfig, generate_records};
pub use crate::data::table::{TableRead, parse_records, read_records};

pub use crate::geometry::overlay::{Arrow, Overlay, TextAnchor, TextLabel};
pub use crate::geometry::primitive::{
    Circle, LineSegment, Polygon, Primitive, PrimitiveKind, Rectangle, Triangle, Vertices,
};
pub use crate::geometry::transform::{centroid, rotate_about, rotate_about_centroid};

pub use crate::synth::params::{
    CircleParams, LineParams, PolygonParams, RectangleParams, Span, SynthParams, TriangleParams,
};
pub use crate::synth::rules::regular_vertices;
pub use crate::synth::synthesize;

pub use crate::compose::composer::{Composition, FrameComposer};
pub use crate::compose::params::{ComposerParams, HaloParams, MarkerParams, Variant};
pub use crate::compose::stats::{
    BACKGROUND_BANDS, BACKGROUND_SEVERE, DEFAULT_BACKGROUND, FrameStats, Spread, WindSummary,
    background_for,
};

pub use crate::render::backend::{FrameRGBA, Renderer, render_composition};
pub use crate::render::cpu::{CpuRenderer, CpuRendererOpts, world_to_pixel};
pub use crate::render::recording::{DrawCall, RecordingRenderer};
pub use crate::render::sink::{DigestSink, FrameDigest, FrameSink, InMemorySink, SinkConfig};

pub use crate::schedule::pacer::{CancelToken, NoPacing, Pacer, SleepPacer};
pub use crate::schedule::scheduler::{
    RunSummary, Scheduler, SchedulerState, StopReason,
};

pub use crate::config::ArtConfig;
