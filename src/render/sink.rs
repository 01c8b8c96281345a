use crate::foundation::error::AirglyphResult;
use crate::foundation::math::Fnv1a64;
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Consumer of presented frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices, starting at 0.
pub trait FrameSink {
    /// Called once before any frame is pushed.
    fn begin(&mut self, cfg: SinkConfig) -> AirglyphResult<()>;
    /// Push one presented frame.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> AirglyphResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> AirglyphResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AirglyphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> AirglyphResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> AirglyphResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Per-frame fingerprint reported by [`DigestSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDigest {
    /// Frame index.
    pub index: u64,
    /// FNV-1a over the raw bytes.
    pub hash: u64,
    /// Mean RGBA over all pixels.
    pub mean_rgba: [u8; 4],
}

impl FrameDigest {
    /// Fingerprint one frame.
    pub fn of(index: u64, frame: &FrameRGBA) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(&frame.data);

        let mut sum = [0u64; 4];
        let mut n = 0u64;
        for px in frame.data.chunks_exact(4) {
            for (s, &c) in sum.iter_mut().zip(px) {
                *s += u64::from(c);
            }
            n += 1;
        }
        let mean_rgba = sum.map(|s| if n == 0 { 0 } else { (s / n) as u8 });

        Self {
            index,
            hash: h.finish(),
            mean_rgba,
        }
    }
}

/// Headless sink: logs a digest of every frame and keeps nothing else.
#[derive(Debug, Default)]
pub struct DigestSink {
    last: Option<FrameDigest>,
    frames: u64,
}

impl DigestSink {
    /// Create a sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest of the most recent frame.
    pub fn last(&self) -> Option<FrameDigest> {
        self.last
    }

    /// Frames seen since `begin`.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for DigestSink {
    fn begin(&mut self, cfg: SinkConfig) -> AirglyphResult<()> {
        tracing::info!(width = cfg.width, height = cfg.height, "frame sink started");
        self.last = None;
        self.frames = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> AirglyphResult<()> {
        let d = FrameDigest::of(idx, frame);
        let [r, g, b, a] = d.mean_rgba;
        tracing::info!(
            frame = idx,
            hash = format_args!("{:016x}", d.hash),
            mean = format_args!("rgba({r},{g},{b},{a})"),
            "frame presented"
        );
        self.last = Some(d);
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> AirglyphResult<()> {
        tracing::info!(frames = self.frames, "frame sink finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
