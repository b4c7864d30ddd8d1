use crate::data::{Account, AccountNumber};

/// The ordered, exclusively-owned collection of accounts. New accounts are
/// appended; a display reload throws the whole thing away and rebuilds it
/// from the file. The program is single-threaded so no protections for MT.
#[derive(Debug, Default)]
pub(crate) struct Accounts {
    accounts: Vec<Account>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Discard the current contents and adopt a freshly loaded set.
    pub fn replace(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    /// Linear scan by account number. Uniqueness is never enforced, and when
    /// duplicates exist the LAST matching entry is the one selected; that is
    /// the long-standing lookup behavior and callers rely on it staying put.
    pub fn find(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().rev().find(|a| a.number == number)
    }

    pub fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().rev().find(|a| a.number == number)
    }
}
