//! Session Model
//!
//! Identity provider for the view: which account (if any) is connected.

/// Connected account and the accounts available to switch between
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionModel {
    pub accounts: Vec<String>,
    pub account_id: Option<String>,
}

impl SessionModel {
    /// The connected account always joins the cycle, first if it was unlisted
    pub fn new(mut accounts: Vec<String>, account_id: Option<String>) -> Self {
        if let Some(ref id) = account_id {
            if !accounts.iter().any(|a| a.eq_ignore_ascii_case(id)) {
                accounts.insert(0, id.clone());
            }
        }

        Self {
            accounts,
            account_id,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account_id.is_some()
    }

    /// Cycle disconnected → first account → … → last account → disconnected
    pub fn cycle_account(&mut self) {
        let current = self.account_id.as_ref().and_then(|id| {
            self.accounts
                .iter()
                .position(|a| a.eq_ignore_ascii_case(id))
        });

        self.account_id = match current {
            None if self.account_id.is_some() => None,
            None => self.accounts.first().cloned(),
            Some(idx) => self.accounts.get(idx + 1).cloned(),
        };
    }
}
