use super::store::SessionStore;
use tracing::debug;

/// The two destinations the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

/// Picks the starting screen. Evaluated once, when the app mounts.
///
/// This checks for a local record only and is not an access control.
pub fn resolve_route(store: &dyn SessionStore) -> Route {
    let route = if store.is_authenticated() {
        Route::Home
    } else {
        Route::Login
    };
    debug!(?route, "resolved start route");
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Identity, MemorySessionStore};

    #[test]
    fn test_unauthenticated_routes_to_login() {
        let store = MemorySessionStore::new();
        assert_eq!(resolve_route(&store), Route::Login);
    }

    #[test]
    fn test_authenticated_routes_to_home() {
        let store = MemorySessionStore::with_identity(Identity::new("erin"));
        assert_eq!(resolve_route(&store), Route::Home);
    }
}
