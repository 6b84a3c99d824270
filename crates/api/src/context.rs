use resido_core::UserId;

/// Caller context for a request (authenticated identity).
///
/// Inserted by the auth middleware after the bearer token has been verified;
/// present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    user_id: UserId,
    email: String,
}

impl CallerContext {
    pub fn new(user_id: UserId, email: String) -> Self {
        Self { user_id, email }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
