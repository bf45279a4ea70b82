//! Interface enumeration trait and error types.

use super::Adapter;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy. The
/// classifier propagates these unchanged; callers decide how to handle
/// each variant.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the host's network adapters.
///
/// # Design
///
/// - The classifier depends on this trait, not on any platform API
/// - Enables dependency injection for testing with mock implementations
/// - The production implementation is [`SystemSource`](super::SystemSource)
pub trait InterfaceSource: Send + Sync {
    /// Returns every adapter on the host with its raw address entries.
    ///
    /// Implementations must return ALL adapters and entries; filtering is
    /// the classifier's job. Adapter order and within-adapter entry order
    /// should be stable across calls made while the host configuration is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the host refuses or fails to report
    /// interface information. The production source never fails.
    fn enumerate(&self) -> Result<Vec<Adapter>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{AddressEntry, ZERO_MAC};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A mock source returning predefined adapter lists, one per call.
    struct MockSource {
        results: Mutex<VecDeque<Result<Vec<Adapter>, SourceError>>>,
    }

    impl MockSource {
        fn new(results: Vec<Result<Vec<Adapter>, SourceError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    impl InterfaceSource for MockSource {
        fn enumerate(&self) -> Result<Vec<Adapter>, SourceError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    fn lan_adapter() -> Adapter {
        Adapter::new(
            "eth0",
            vec![AddressEntry::new(
                "192.168.1.10".parse().unwrap(),
                "255.255.255.0".parse().unwrap(),
                [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
                false,
            )],
        )
    }

    #[test]
    fn mock_source_returns_predefined_adapters() {
        let source = MockSource::new(vec![Ok(vec![lan_adapter()])]);

        let result = source.enumerate().unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "eth0");
    }

    #[test]
    fn mock_source_returns_empty_after_exhausting_results() {
        let source = MockSource::new(vec![Ok(vec![lan_adapter()])]);

        let _ = source.enumerate();
        let result = source.enumerate().unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn mock_source_can_return_errors() {
        let source = MockSource::new(vec![Err(SourceError::Platform {
            message: "netlink unavailable".to_string(),
        })]);

        let error = source.enumerate().unwrap_err();
        assert!(error.to_string().contains("netlink unavailable"));
    }

    #[test]
    fn source_error_permission_denied_displays_context() {
        let error = SourceError::PermissionDenied {
            context: "elevated privileges required".to_string(),
        };
        assert!(error.to_string().contains("elevated privileges required"));
    }

    #[test]
    fn zero_mac_is_all_zero() {
        assert_eq!(ZERO_MAC, [0u8; 6]);
    }
}
