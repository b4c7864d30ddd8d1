use crate::data::{Account, AccountKind, AccountNumber};
use crate::read::read_accounts;
use crate::store::Accounts;
use crate::write::{append_account, write_accounts};
use rust_decimal::Decimal;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;

/// Interactive console driver. Input and output are generic so the whole
/// loop can be exercised from tests with scripted input, the same way the
/// file codecs take generic readers and writers.
///
/// The ledger file is opened and closed per operation: append mode when an
/// account is added, truncate mode after a successful transaction, read
/// mode on display. A failure to open in any of those modes ends the
/// session through the caller; validation failures only end the current
/// operation.
pub(crate) struct Menu<R, W> {
    input: R,
    output: W,
    path: PathBuf,
    accounts: Accounts,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            path: path.into(),
            accounts: Accounts::new(),
        }
    }

    /// Runs the menu loop until the exit choice or end of input.
    pub fn run(&mut self) -> Result<(), anyhow::Error> {
        loop {
            writeln!(self.output, "\n--- Banking System Menu ---")?;
            writeln!(self.output, "1. Add Account")?;
            writeln!(self.output, "2. Display Accounts")?;
            writeln!(self.output, "3. Perform Transaction")?;
            writeln!(self.output, "4. Exit")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.add_account()?,
                "2" => self.display_accounts()?,
                "3" => self.perform_transaction()?,
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn add_account(&mut self) -> Result<(), anyhow::Error> {
        let Some(holder) = self.prompt("Enter Account Holder's Name: ")? else {
            return Ok(());
        };
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(());
        };
        let Some(balance) = self.prompt_decimal("Enter Initial Balance: ")? else {
            return Ok(());
        };
        let Some(type_name) = self.prompt("Enter Account Type (Savings/Current): ")? else {
            return Ok(());
        };
        let kind = match type_name.trim() {
            "Savings" => {
                let Some(rate) = self.prompt_decimal("Enter Interest Rate (%): ")? else {
                    return Ok(());
                };
                AccountKind::Savings {
                    interest_rate: rate,
                }
            }
            "Current" => {
                let Some(limit) = self.prompt_decimal("Enter Overdraft Limit: ")? else {
                    return Ok(());
                };
                AccountKind::Current {
                    overdraft_limit: limit,
                }
            }
            _ => {
                writeln!(self.output, "Invalid account type.")?;
                return Ok(());
            }
        };
        let account = match Account::new(holder, number, balance, kind) {
            Ok(account) => account,
            Err(e) => {
                // Bad input for this account only, the menu survives.
                writeln!(self.output, "Could not add account: {e}")?;
                return Ok(());
            }
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        append_account(file, &account)?;
        self.accounts.push(account);
        writeln!(self.output, "Account added successfully.")?;
        Ok(())
    }

    /// Display is the one reconciliation point between file and memory:
    /// the in-memory store is discarded and rebuilt from the file before
    /// anything is printed.
    fn display_accounts(&mut self) -> Result<(), anyhow::Error> {
        let loaded = match File::open(&self.path) {
            Ok(file) => read_accounts(file)?,
            // First run: no ledger file yet means no accounts.
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        self.accounts.replace(loaded);
        writeln!(self.output, "\n--- Account Details ---")?;
        for account in self.accounts.iter() {
            writeln!(self.output, "{account}")?;
            writeln!(self.output, "---------------------")?;
        }
        Ok(())
    }

    fn perform_transaction(&mut self) -> Result<(), anyhow::Error> {
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(());
        };
        if self.accounts.find(number).is_none() {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        }
        // Both prompts happen before the letter is checked.
        let Some(letter) = self.prompt("Enter Transaction Type (D/W): ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_decimal("Enter Amount: ")? else {
            return Ok(());
        };
        let is_deposit = match letter.trim() {
            "D" | "d" => true,
            "W" | "w" => false,
            _ => {
                writeln!(self.output, "Invalid transaction type.")?;
                return Ok(());
            }
        };
        let Some(account) = self.accounts.find_mut(number) else {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        };
        let result = if is_deposit {
            account.deposit(amount)
        } else {
            account.withdraw(amount)
        };
        let summary = account.to_string();
        match result {
            Ok(()) => {
                writeln!(self.output, "Transaction successful. Updated details:")?;
                writeln!(self.output, "{summary}")?;
                let file = File::create(&self.path)?;
                write_accounts(file, &self.accounts)?;
            }
            Err(e) => writeln!(self.output, "Transaction failed: {e}")?,
        }
        Ok(())
    }

    /// Writes the prompt, reads one line, strips the line ending. `None`
    /// means end of input, which callers treat as abandoning the current
    /// operation (and, at the main loop, as exit).
    fn prompt(&mut self, text: &str) -> Result<Option<String>, anyhow::Error> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_number(&mut self, text: &str) -> Result<Option<AccountNumber>, anyhow::Error> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }

    /// Amounts are normalized on entry so `5.0` persists as `5`.
    fn prompt_decimal(&mut self, text: &str) -> Result<Option<Decimal>, anyhow::Error> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse::<Decimal>() {
            Ok(value) => Ok(Some(value.normalize())),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }
}
