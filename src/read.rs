use crate::data::{Account, Record, FIELD_SEPARATOR};

/// Loads the whole ledger from a pipe-delimited stream, one account per
/// line. Rows carrying an unknown type tag are dropped without comment;
/// anything else that fails to parse or construct aborts the load.
pub(crate) fn read_accounts<R: std::io::Read>(reader: R) -> Result<Vec<Account>, anyhow::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .from_reader(reader);
    let mut accounts = Vec::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        if let Some(account) = record.into_account()? {
            accounts.push(account);
        }
    }
    Ok(accounts)
}
