use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;

/// Token movements between users and the contract.
///
/// Transfers go through the generated `try_` client so that a token
/// contract which fails (by trap or error) surfaces as `TransferFailed`
/// rather than an opaque host error.
pub struct TokenTransfer;

impl TokenTransfer {
    /// Move `amount` of `token` from `from` into the contract
    pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
        let client = token::Client::new(env, token);
        let result = client.try_transfer(from, &env.current_contract_address(), &amount);
        Self::check(env, matches!(result, Ok(Ok(()))))
    }

    /// Move `amount` of `token` from the contract to `to`
    pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let client = token::Client::new(env, token);
        let result = client.try_transfer(&env.current_contract_address(), to, &amount);
        Self::check(env, matches!(result, Ok(Ok(()))))
    }

    /// Contract's own balance of `token`
    pub fn balance(env: &Env, token: &Address) -> Result<i128, Error> {
        let client = token::Client::new(env, token);
        match client.try_balance(&env.current_contract_address()) {
            Ok(Ok(balance)) => Ok(balance),
            _ => {
                log!(env, "token balance query failed");
                Err(Error::TransferFailed)
            }
        }
    }

    fn check(env: &Env, ok: bool) -> Result<(), Error> {
        if ok {
            Ok(())
        } else {
            log!(env, "token transfer failed");
            Err(Error::TransferFailed)
        }
    }
}
