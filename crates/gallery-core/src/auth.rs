//! Credential verification seam for the curator portal.

/// Verifies a curator passcode. The browser frontend holds one of these
/// behind the login form; swapping in a server-backed verifier changes no
/// call sites.
pub trait CredentialVerifier {
    fn verify(&self, passcode: &str) -> bool;
}

/// Fixed passcode list. A placeholder for a real verification backend, kept
/// only so the portal is reachable in development deployments.
pub struct StaticPasscodes {
    accepted: &'static [&'static str],
}

impl StaticPasscodes {
    pub const fn new(accepted: &'static [&'static str]) -> Self {
        Self { accepted }
    }

    /// The development default for the gallery deployment.
    pub const fn gallery_default() -> Self {
        Self::new(&["1234", "admin"])
    }
}

impl CredentialVerifier for StaticPasscodes {
    fn verify(&self, passcode: &str) -> bool {
        self.accepted.iter().any(|p| *p == passcode)
    }
}
