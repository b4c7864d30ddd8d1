use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type AccountNumber = u32;

/// Field separator for the persisted ledger file.
pub const FIELD_SEPARATOR: u8 = b'|';

/// One bank account. The two account types share holder/number/balance and
/// only differ in their withdrawal policy and one extra attribute, so the
/// variant lives in `kind` and behavior is selected by pattern match rather
/// than by comparing type strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
    pub kind: AccountKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Accrues a display-only interest rate; withdrawals are capped at the
    /// balance itself.
    Savings { interest_rate: Decimal },
    /// May go negative down to `-overdraft_limit`.
    Current { overdraft_limit: Decimal },
}

impl Account {
    /// A zero initial balance is fine, a negative one is not. The rate/limit
    /// is deliberately not validated (negative values are accepted).
    pub fn new(
        holder: impl Into<String>,
        number: AccountNumber,
        balance: Decimal,
        kind: AccountKind,
    ) -> Result<Self, Error> {
        if balance < Decimal::ZERO {
            return Err(Error::NegativeInitialBalance);
        }
        Ok(Self {
            number,
            holder: holder.into(),
            balance,
            kind,
        })
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::NonPositiveDeposit);
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::NonPositiveWithdrawal);
        }
        let available = self.available();
        if amount > available {
            return Err(Error::InsufficientFunds {
                asked: amount,
                available,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Funds a withdrawal may draw on: the balance alone for savings, the
    /// balance plus the overdraft allowance for current accounts.
    pub fn available(&self) -> Decimal {
        match self.kind {
            AccountKind::Savings { .. } => self.balance,
            AccountKind::Current { overdraft_limit } => self.balance + overdraft_limit,
        }
    }

    /// Type tag as persisted in the ledger file.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Current { .. } => "Current",
        }
    }

    /// The type-specific numeric attribute (interest rate or overdraft limit).
    pub fn attribute(&self) -> Decimal {
        match self.kind {
            AccountKind::Savings { interest_rate } => interest_rate,
            AccountKind::Current { overdraft_limit } => overdraft_limit,
        }
    }
}

/// Multi-line summary as shown by the display and transaction screens.
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                writeln!(f, "[Savings Account]")?;
                writeln!(f, "Account Holder: {}", self.holder)?;
                writeln!(f, "Account Number: {}", self.number)?;
                writeln!(f, "Balance: {}", self.balance)?;
                write!(f, "Interest Rate: {}%", interest_rate)
            }
            AccountKind::Current { overdraft_limit } => {
                writeln!(f, "[Current Account]")?;
                writeln!(f, "Account Holder: {}", self.holder)?;
                writeln!(f, "Account Number: {}", self.number)?;
                writeln!(f, "Balance: {}", self.balance)?;
                write!(f, "Overdraft Limit: {}", overdraft_limit)
            }
        }
    }
}

/// On-disk shape of one account, one pipe-delimited line per row:
/// `number|holder|balance|type|attribute`. The variant is flattened into a
/// plain type tag plus a single attribute column, so this proxy sits on
/// both sides of serde instead of deriving on `Account` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Record {
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
    pub kind: String,
    pub attribute: Decimal,
}

impl From<&Account> for Record {
    fn from(account: &Account) -> Self {
        Self {
            number: account.number,
            holder: account.holder.clone(),
            balance: account.balance,
            kind: account.type_name().to_string(),
            attribute: account.attribute(),
        }
    }
}

impl Record {
    /// Rows whose type tag is neither `Savings` nor `Current` yield
    /// `Ok(None)` and are skipped by the loader without surfacing anything.
    /// A negative persisted balance still fails construction.
    pub fn into_account(self) -> Result<Option<Account>, Error> {
        let kind = match self.kind.as_str() {
            "Savings" => AccountKind::Savings {
                interest_rate: self.attribute,
            },
            "Current" => AccountKind::Current {
                overdraft_limit: self.attribute,
            },
            _ => return Ok(None),
        };
        Account::new(self.holder, self.number, self.balance, kind).map(Some)
    }
}

/// Domain failures. Validation and funds checks are ordinary return values;
/// the menu layer decides which of them abort only the current operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Initial balance cannot be negative")]
    NegativeInitialBalance,
    #[error("Deposit amount must be positive")]
    NonPositiveDeposit,
    #[error("Withdrawal amount must be positive")]
    NonPositiveWithdrawal,
    #[error("Insufficient funds (asked {asked} while {available} available)")]
    InsufficientFunds { asked: Decimal, available: Decimal },
}
