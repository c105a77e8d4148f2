use std::fmt;
use tracing::debug;

/// Screens reachable by path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Register,
    Login,
    NotFound(String),
}

impl Route {
    /// Resolve a path; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };

        match normalized {
            "/" | "" => Route::Home,
            "/register" => Route::Register,
            "/login" => Route::Login,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::NotFound(path) => path,
        }
    }

    /// Label used in the nav bar and screen titles
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Routes shown as nav bar links, in display order
    pub fn nav_links() -> [Route; 3] {
        [Route::Home, Route::Register, Route::Login]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Current location plus a count of navigations performed
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    navigations: usize,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            navigations: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigations(&self) -> usize {
        self.navigations
    }

    pub fn navigate(&mut self, path: &str) -> &Route {
        self.navigate_to(Route::from_path(path))
    }

    pub fn navigate_to(&mut self, route: Route) -> &Route {
        debug!("Navigate {} -> {}", self.current, route);
        self.current = route;
        self.navigations += 1;
        &self.current
    }
}
