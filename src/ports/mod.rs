/// Ports layer - interface definitions
///
/// Traits through which the application core talks to infrastructure.
pub mod outbound;
