use std::fmt;
use std::time::SystemTime;

use crate::trainer::SharedTrainer;

/// An authenticated presence: optionally the trainer it belongs to, a
/// bearer token, and an expiry instant.
#[derive(Clone)]
pub struct Session {
    user: Option<SharedTrainer>,
    token: String,
    expire: SystemTime,
}

impl Session {
    /// Start building a session.
    ///
    /// Defaults: no trainer attached, an empty token, and expiry at
    /// construction time, so a session built with no options is already
    /// expired.
    pub fn builder() -> SessionBuilder {
        SessionBuilder {
            session: Session {
                user: None,
                token: String::new(),
                expire: SystemTime::now(),
            },
        }
    }

    pub fn trainer(&self) -> Option<&SharedTrainer> {
        self.user.as_ref()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expiring_date(&self) -> SystemTime {
        self.expire
    }

    pub fn has_expired(&self) -> bool {
        self.expire <= SystemTime::now()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user.as_ref().map(|user| user.name()))
            .field("token", &self.token)
            .field("expire", &self.expire)
            .finish()
    }
}

pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    /// Attach the trainer this session belongs to.
    pub fn reference(mut self, user: SharedTrainer) -> Self {
        self.session.user = Some(user);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.session.token = token.into();
        self
    }

    pub fn expiring_date(mut self, expire: SystemTime) -> Self {
        self.session.expire = expire;
        self
    }

    pub fn build(self) -> Session {
        self.session
    }
}
