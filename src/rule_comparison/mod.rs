/// Rule comparison - domain layer
///
/// Pure business logic for extracting and comparing receiver
/// determination rules. No I/O happens in this layer.
pub mod domain;
pub mod services;
