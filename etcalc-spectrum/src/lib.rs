//! Etcalc Spectrum - Reference Spectrum Loading
//!
//! Loads the Vega reference spectrum consumed by `etcalc-units` for
//! Vega-relative magnitude conversions. The load happens once at process
//! start; the engine must not be asked for Vega magnitudes before it
//! completes, and callers are responsible for that sequencing
//! (await the load, then construct the converter).
//!
//! Retries, caching, and alternative transports belong to callers of this
//! crate, not inside it.

mod format;
mod loader;

pub use format::VegaFluxFile;
pub use loader::{from_json_str, load, LoadError};
