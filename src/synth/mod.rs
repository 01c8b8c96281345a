//! Geometry synthesis: five independent rules turn one record into at most one primitive each.
//!
//! Every random draw goes through the injected [`rand::Rng`], and every random range is a named
//! [`Span`] inside [`SynthParams`], so a seeded generator reproduces a frame exactly.

pub(crate) mod params;
pub(crate) mod rules;

use rand::Rng;

use crate::data::record::Record;
use crate::geometry::primitive::Primitive;
use crate::synth::params::SynthParams;

/// Run every rule over `slice`, rule-major: all circles, then triangles, rectangles, lines and
/// polygons. Outputs are concatenated, never merged.
pub fn synthesize<R: Rng>(slice: &[Record], params: &SynthParams, rng: &mut R) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(slice.len() * 5);

    out.extend(
        slice
            .iter()
            .filter_map(|r| rules::circle(r, &params.circle, rng).map(Primitive::Circle)),
    );
    out.extend(slice.iter().filter_map(|r| {
        rules::triangle(r, &params.triangle, rng).map(Primitive::Triangle)
    }));
    out.extend(slice.iter().filter_map(|r| {
        rules::rectangle(r, &params.rectangle, rng).map(Primitive::Rectangle)
    }));
    out.extend(
        slice
            .iter()
            .filter_map(|r| rules::line(r, &params.line, rng).map(Primitive::Line)),
    );
    out.extend(slice.iter().filter_map(|r| {
        rules::polygon(r, &params.polygon, rng).map(Primitive::Polygon)
    }));

    tracing::trace!(records = slice.len(), primitives = out.len(), "synthesized");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/synth/mod.rs"]
mod tests;
