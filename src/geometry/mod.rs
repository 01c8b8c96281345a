//! Frame-scoped drawing primitives and the rotation transform applied to them at render time.

pub(crate) mod overlay;
pub(crate) mod primitive;
pub(crate) mod transform;
