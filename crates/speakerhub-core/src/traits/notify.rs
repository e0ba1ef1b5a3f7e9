//! User-facing notification trait.
//!
//! The host platform renders notices as toasts; outside a host the default
//! [`TracingNotifier`] routes them to the log.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational notice.
    Info,
    /// An operation completed successfully.
    Success,
    /// An operation partially failed but the primary result stands.
    Warning,
    /// An operation failed.
    Error,
}

/// Trait for surfacing user-facing notices.
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Surface a notice to the user.
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Notifier that routes notices to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{message}"),
            NoticeLevel::Warning => tracing::warn!("{message}"),
            NoticeLevel::Error => tracing::error!("{message}"),
        }
    }
}
