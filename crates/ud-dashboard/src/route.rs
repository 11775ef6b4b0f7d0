pub const LANDING_TITLE: &str = "Welcome to the User Management Dashboard";
pub const LANDING_TAGLINE: &str =
    "Easily view, add, and manage users with this simple admin dashboard.";
pub const LANDING_LINK: &str = "Go to Dashboard";

/// The three navigable pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    AddUser,
    NotFound(String),
}

impl Route {
    /// Match a path; query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Landing,
            "/dashboard" => Self::Dashboard,
            "/dashboard/add" => Self::AddUser,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::Dashboard => "/dashboard",
            Self::AddUser => "/dashboard/add",
            Self::NotFound(path) => path,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
