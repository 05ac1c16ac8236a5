/// Destinations reachable from the authentication flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthRoute {
    SignIn,
    SignUp,
}

impl AuthRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AuthRoute::SignIn => "/sign-in",
            AuthRoute::SignUp => "/sign-up",
        }
    }
}
