//! Frame composition: one timestamp's records become one [`composer::Composition`].

pub(crate) mod composer;
pub(crate) mod params;
pub(crate) mod stats;
