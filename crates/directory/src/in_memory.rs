use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use atm_core::{CardId, Money};

use crate::account::Account;
use crate::config::DirectoryConfig;
use crate::directory::{AccountDirectory, DirectoryError, DirectoryResult};

/// In-memory account directory.
///
/// Intended for tests/dev and for embedding the terminal without a bank
/// backend. Not a persistence layer.
#[derive(Debug)]
pub struct InMemoryAccountDirectory {
    name: String,
    accounts: RwLock<HashMap<CardId, Account>>,
}

impl Default for InMemoryAccountDirectory {
    fn default() -> Self {
        Self::from_config(&DirectoryConfig::default())
    }
}

impl InMemoryAccountDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.name.clone())
    }

    /// Register a new account record.
    pub fn open(&self, account: Account) -> DirectoryResult<()> {
        let card_id = account.card_id();
        let mut accounts = self.write()?;
        if accounts.contains_key(&card_id) {
            return Err(DirectoryError::DuplicateCard(card_id));
        }
        accounts.insert(card_id, account);
        tracing::debug!(card_id = %card_id, directory = %self.name, "account opened");
        Ok(())
    }

    /// Builder-style variant of [`open`](Self::open).
    pub fn with_account(self, account: Account) -> DirectoryResult<Self> {
        self.open(account)?;
        Ok(self)
    }

    pub fn len(&self) -> DirectoryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DirectoryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, HashMap<CardId, Account>>> {
        self.accounts
            .read()
            .map_err(|_| DirectoryError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> DirectoryResult<RwLockWriteGuard<'_, HashMap<CardId, Account>>> {
        self.accounts
            .write()
            .map_err(|_| DirectoryError::Unavailable("lock poisoned".to_string()))
    }

    fn with_account_ref<T>(
        &self,
        card_id: CardId,
        f: impl FnOnce(&Account) -> T,
    ) -> DirectoryResult<T> {
        let accounts = self.read()?;
        let account = accounts
            .get(&card_id)
            .ok_or(DirectoryError::UnknownCard(card_id))?;
        Ok(f(account))
    }

    fn with_account_mut<T>(
        &self,
        card_id: CardId,
        f: impl FnOnce(&mut Account) -> DirectoryResult<T>,
    ) -> DirectoryResult<T> {
        let mut accounts = self.write()?;
        let account = accounts
            .get_mut(&card_id)
            .ok_or(DirectoryError::UnknownCard(card_id))?;
        f(account)
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn lookup(&self, card_id: CardId) -> DirectoryResult<Option<Account>> {
        Ok(self.read()?.get(&card_id).cloned())
    }

    fn is_locked(&self, card_id: CardId) -> DirectoryResult<bool> {
        self.with_account_ref(card_id, Account::is_locked)
    }

    fn lock(&self, card_id: CardId) -> DirectoryResult<()> {
        self.with_account_mut(card_id, |account| {
            account.lock();
            Ok(())
        })
    }

    fn failed_attempts(&self, card_id: CardId) -> DirectoryResult<u32> {
        self.with_account_ref(card_id, Account::failed_attempts)
    }

    fn increment_failed_attempts(&self, card_id: CardId) -> DirectoryResult<()> {
        self.with_account_mut(card_id, |account| {
            account.record_failed_attempt();
            Ok(())
        })
    }

    fn balance(&self, card_id: CardId) -> DirectoryResult<Money> {
        self.with_account_ref(card_id, Account::balance)
    }

    fn deposit(&self, card_id: CardId, amount: Money) -> DirectoryResult<()> {
        self.with_account_mut(card_id, |account| Ok(account.credit(amount)?))
    }

    fn withdraw(&self, card_id: CardId, amount: Money) -> DirectoryResult<()> {
        self.with_account_mut(card_id, |account| Ok(account.debit(amount)?))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
