/// Easing curves for time-driven properties.
pub(crate) mod ease;
