use crate::domain::session::Session;

/// Wallet session state; `None` while disconnected
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Session> {
        self.current.as_mut()
    }

    pub fn address(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.address.as_str())
    }

    pub fn set(&mut self, session: Session) {
        self.current = Some(session);
    }

    pub fn clear(&mut self) -> Option<Session> {
        self.current.take()
    }
}
