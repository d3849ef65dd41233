use crate::session::Route;

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Quit,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::Login => Screen::Login,
        }
    }
}
