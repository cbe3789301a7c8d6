// Resume utilities consumed by the builder: demonstration data and plain-text export.

pub mod handlers;
pub mod text;
