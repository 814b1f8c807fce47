/// Fired once by the API client whenever the remote API answers with an
/// authentication failure, after the stored credential has been purged.
///
/// A browser console would redirect to its login page here; the terminal
/// console prints a notice telling the operator to log in again.
pub trait AuthFailureHook: Send + Sync {
    fn on_auth_failure(&self);
}

/// Hook that does nothing beyond the credential purge the client performs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuthFailureHook;

impl AuthFailureHook for NoopAuthFailureHook {
    fn on_auth_failure(&self) {}
}

impl<F> AuthFailureHook for F
where
    F: Fn() + Send + Sync,
{
    fn on_auth_failure(&self) {
        self()
    }
}
