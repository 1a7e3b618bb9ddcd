//! Ethereum address validation and display helpers.

/// Check if a given string is a valid Ethereum address.
pub fn is_valid_eth_address(address: &str) -> bool {
    // Must be 42 characters: "0x" + 40 hex digits
    if address.len() != 42 {
        return false;
    }

    if !address.starts_with("0x") && !address.starts_with("0X") {
        return false;
    }

    address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Shorten an account for display: first 6 and last 4 characters, e.g. `0x5290...9EE7`.
///
/// Identifiers too short to abbreviate are returned unchanged.
pub fn short_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() <= 10 {
        return account.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
