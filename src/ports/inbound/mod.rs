/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod advisory_update_port;

pub use advisory_update_port::AdvisoryUpdatePort;
