//! A deterministic shelf-nesting optimizer for rectangular panel Cutting and Packing.
//!
//! Turns a flat cutting list (parts with material, thickness, quantity and
//! wood-grain constraints) into per-sheet placements: units are grouped by
//! material and thickness, oriented within their grain rules (0°/90° only) and
//! packed onto stock sheets with a row/shelf heuristic. The output carries
//! exact placement coordinates, waste and efficiency per group, ready for
//! downstream CNC/saw rendering without recomputation.
//!
//! The heuristic is reproducible by construction: a stable descending-area
//! sort and a cursor that never revisits earlier sheets. Bad input never
//! aborts a run; everything that could not be nested is reported through a
//! structured diagnostics collection.

/// Cooperative cancellation of a running optimization
pub mod cancel;

/// Configuration of a nesting run
pub mod config;

/// Structured reporting of everything that could not be nested
pub mod diagnostics;

/// Entities modeling cutting lists, stock sheets and placements
pub mod entities;

/// The shelf packing optimizer
pub mod opt;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use cancel::CancelToken;

#[doc(inline)]
pub use config::NestConfig;

#[doc(inline)]
pub use diagnostics::Diagnostic;

#[doc(inline)]
pub use opt::ShelfNester;

#[doc(inline)]
pub use opt::nest;
