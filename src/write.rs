use crate::data::{Account, Record, FIELD_SEPARATOR};
use crate::store::Accounts;

/// Appends a single account row; adding an account never rewrites the rest
/// of the file.
pub(crate) fn append_account<W: std::io::Write>(
    writer: W,
    account: &Account,
) -> Result<(), anyhow::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .from_writer(writer);
    wtr.serialize(Record::from(account))?;
    wtr.flush()?;
    Ok(())
}

/// Writes every account in store order. Balance changes go through here
/// because row positions are not tracked, so an exact row replacement means
/// rewriting the whole file.
pub(crate) fn write_accounts<W: std::io::Write>(
    writer: W,
    accounts: &Accounts,
) -> Result<(), anyhow::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .from_writer(writer);
    for account in accounts.iter() {
        wtr.serialize(Record::from(account))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{append_account, write_accounts};
    use crate::data::{Account, AccountKind};
    use crate::read::read_accounts;
    use crate::store::Accounts;
    use rust_decimal_macros::dec;

    fn alice() -> Account {
        Account::new(
            "Alice",
            1,
            dec!(1000),
            AccountKind::Savings {
                interest_rate: dec!(5),
            },
        )
        .unwrap()
    }

    fn bob() -> Account {
        Account::new(
            "Bob",
            2,
            dec!(100),
            AccountKind::Current {
                overdraft_limit: dec!(50),
            },
        )
        .unwrap()
    }

    #[test]
    fn append_writes_one_pipe_delimited_row() {
        let mut out = Vec::new();
        append_account(&mut out, &alice()).unwrap();
        assert_eq!(out, b"1|Alice|1000|Savings|5\n");
    }

    #[test]
    fn appended_rows_accumulate() {
        let mut out = Vec::new();
        append_account(&mut out, &alice()).unwrap();
        append_account(&mut out, &bob()).unwrap();
        assert_eq!(out, b"1|Alice|1000|Savings|5\n2|Bob|100|Current|50\n");
    }

    #[test]
    fn rewrite_emits_store_order() {
        let mut accounts = Accounts::new();
        accounts.push(alice());
        accounts.push(bob());
        let mut out = Vec::new();
        write_accounts(&mut out, &accounts).unwrap();
        assert_eq!(out, b"1|Alice|1000|Savings|5\n2|Bob|100|Current|50\n");
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut accounts = Accounts::new();
        accounts.push(alice());
        accounts.push(bob());
        let mut out = Vec::new();
        write_accounts(&mut out, &accounts).unwrap();

        let loaded = read_accounts(&out[..]).unwrap();
        let original: Vec<_> = accounts.iter().cloned().collect();
        assert_eq!(loaded, original);
    }
}
