//! The API endpoints URIs.
//!
//! Paths with a parameter, e.g., '/api/customers/{customer_id}', use axum's brace syntax.

/// The prefix shared by every JSON route.
pub const API: &str = "/api";
/// Matches every path under [API] that no other route handles.
pub const API_FALLBACK: &str = "/api/{*path}";

/// The route to list and create customers.
pub const CUSTOMERS: &str = "/api/customers";
/// The route to access a single customer.
pub const CUSTOMER: &str = "/api/customers/{customer_id}";
/// The route to list and create account types.
pub const ACCOUNT_TYPES: &str = "/api/account_types";
/// The route to access a single account type.
pub const ACCOUNT_TYPE: &str = "/api/account_types/{account_type_id}";
/// The route to list and create accounts.
pub const ACCOUNTS: &str = "/api/accounts";
/// The route to access a single account.
pub const ACCOUNT: &str = "/api/accounts/{account_id}";
/// The route to list and create banks.
pub const BANKS: &str = "/api/banks";
/// The route to access a single bank.
pub const BANK: &str = "/api/banks/{bank_id}";
/// The route to list and create loans.
pub const LOANS: &str = "/api/loans";
/// The route to access a single loan.
pub const LOAN: &str = "/api/loans/{loan_id}";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to read the audit log.
pub const AUDIT: &str = "/api/audit";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/loans/{loan_id}', '{loan_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
