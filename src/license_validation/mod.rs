/// Domain layer for license validation
///
/// Pure value objects and policies with no I/O: coordinates, server verdicts,
/// per-check classification, and the aggregate run outcome.
pub mod domain;
pub mod policies;
