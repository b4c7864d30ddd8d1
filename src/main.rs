use menu::Menu;
use std::io;

mod data;
mod menu;
mod read;
mod store;
mod write;

/// Ledger file, resolved relative to the working directory.
const ACCOUNTS_FILE: &str = "accounts.txt";

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), ACCOUNTS_FILE);
    // Session-fatal failures are reported and the process still exits 0.
    if let Err(e) = menu.run() {
        println!("{e}");
    }
}
