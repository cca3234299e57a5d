// src/session.rs
use log::debug;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::generator::{self, RandomSource};
use crate::models::{PasswordPolicy, PolicyError};

/// Interactive generation state: the active policy plus the password most
/// recently drawn under it.
///
/// Every policy mutation regenerates in the same call, so the password on
/// display always reflects the policy on display. The random source and the
/// clipboard are injected so the session itself never touches a global.
pub struct GeneratorSession {
    policy: PasswordPolicy,
    password: String,
    random: Box<dyn RandomSource>,
    clipboard: Box<dyn Clipboard>,
}

impl GeneratorSession {
    /// Open a session and draw a first password, so one is on display
    /// before any interaction.
    pub fn new(
        policy: PasswordPolicy,
        random: Box<dyn RandomSource>,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self, PolicyError> {
        let mut session = Self {
            policy,
            password: String::new(),
            random,
            clipboard,
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the current password with a fresh draw under the current
    /// policy.
    pub fn regenerate(&mut self) -> Result<(), PolicyError> {
        self.password = generator::generate(&self.policy, self.random.as_mut())?;
        debug!("regenerated password of {} characters", self.policy.length());
        Ok(())
    }

    /// Change the requested length and regenerate. On rejection the
    /// previous policy and the previous password both stay in place.
    pub fn set_length(&mut self, length: usize) -> Result<(), PolicyError> {
        self.policy = self.policy.with_length(length)?;
        self.regenerate()
    }

    pub fn toggle_digits(&mut self) -> Result<(), PolicyError> {
        self.policy = self.policy.toggle_digits();
        self.regenerate()
    }

    pub fn toggle_symbols(&mut self) -> Result<(), PolicyError> {
        self.policy = self.policy.toggle_symbols();
        self.regenerate()
    }

    /// Send the current password to the clipboard.
    ///
    /// Returns `Ok(false)` without touching the clipboard when there is
    /// nothing to copy. A clipboard failure is reported to the caller and
    /// leaves the session state untouched.
    pub fn copy_to_clipboard(&mut self) -> Result<bool, ClipboardError> {
        if self.password.is_empty() {
            return Ok(false);
        }

        self.clipboard.write(&self.password)?;
        Ok(true)
    }
}
