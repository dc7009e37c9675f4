use dolls_db::gateway::Gateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the gateway clones its pool handle).
#[derive(Clone)]
pub struct AppState {
    /// Deadline-bounded store handle, constructed once at startup and
    /// shared by every handler.
    pub gateway: Gateway,
}
