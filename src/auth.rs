//! Authentication gate for the idea widget
//!
//! The widget never talks to an identity provider. It only reads a binary
//! "signed in" capability through an injected check function.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability check supplied by the identity collaborator
pub type PresenceCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// Whether fetching requires a signed-in viewer
#[derive(Clone)]
pub enum AuthGate {
    /// Anyone may fetch
    Open,
    /// Fetching is allowed only while the check returns true
    Required(PresenceCheck),
}

impl AuthGate {
    /// Gate driven by an arbitrary check function
    pub fn required(check: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Required(Arc::new(check))
    }

    /// Whether this gate hides the widget behind a sign-in prompt
    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    /// Whether the current viewer may trigger a fetch
    pub fn permits(&self) -> bool {
        match self {
            Self::Open => true,
            Self::Required(check) => check(),
        }
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "AuthGate::Open"),
            Self::Required(_) => write!(f, "AuthGate::Required"),
        }
    }
}

/// Desktop stand-in for the hosted identity widgets.
///
/// Holds the signed-in flag the UI toggles through its sign-in and account
/// affordances. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct LocalSession {
    signed_in: Arc<AtomicBool>,
    sign_in_url: Option<String>,
}

impl LocalSession {
    pub fn new(sign_in_url: Option<String>) -> Self {
        Self {
            signed_in: Arc::new(AtomicBool::new(false)),
            sign_in_url,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::Acquire)
    }

    /// Sign in, opening the provider's sign-in page first if one is configured
    pub fn sign_in(&self) {
        if let Some(ref url) = self.sign_in_url {
            if let Err(e) = open::that(url) {
                tracing::warn!("Failed to open sign-in page {}: {}", url, e);
            }
        }
        self.signed_in.store(true, Ordering::Release);
        tracing::info!("Signed in");
    }

    pub fn sign_out(&self) {
        self.signed_in.store(false, Ordering::Release);
        tracing::info!("Signed out");
    }

    /// Gate that follows this session's signed-in flag
    pub fn gate(&self) -> AuthGate {
        let signed_in = Arc::clone(&self.signed_in);
        AuthGate::required(move || signed_in.load(Ordering::Acquire))
    }
}
