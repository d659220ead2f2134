use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

use crate::types::MarketType;

/// Publishes contract events.
///
/// Topics lead with a short symbol naming the event, followed by the market
/// id and the acting address where one applies. Event payloads are tuples so
/// indexers can decode them without the contract's type definitions.
pub struct EventEmitter;

impl EventEmitter {
    #[allow(clippy::too_many_arguments)]
    pub fn market_created(
        env: &Env,
        market_id: u64,
        creator: &Address,
        title: &String,
        market_type: MarketType,
        end_time: u64,
        is_hyper_local: bool,
        latitude: i64,
        longitude: i64,
    ) {
        env.events().publish(
            (symbol_short!("mkt_new"), market_id, creator.clone()),
            (
                title.clone(),
                market_type as u32,
                end_time,
                is_hyper_local,
                latitude,
                longitude,
            ),
        );
    }

    pub fn market_creator_changed(env: &Env, creator: &Address, enabled: bool) {
        let action = if enabled {
            symbol_short!("added")
        } else {
            symbol_short!("removed")
        };
        env.events()
            .publish((symbol_short!("creator"), action), creator.clone());
    }

    pub fn validator_changed(env: &Env, validator: &Address, enabled: bool) {
        let action = if enabled {
            symbol_short!("added")
        } else {
            symbol_short!("removed")
        };
        env.events()
            .publish((symbol_short!("validator"), action), validator.clone());
    }

    pub fn shares_traded(
        env: &Env,
        market_id: u64,
        user: &Address,
        is_yes: bool,
        amount: i128,
        price: i128,
        is_buy: bool,
    ) {
        env.events().publish(
            (symbol_short!("trade"), market_id, user.clone()),
            (is_yes, amount, price, is_buy),
        );
    }

    pub fn market_resolved(env: &Env, market_id: u64, outcome: bool) {
        env.events()
            .publish((symbol_short!("resolved"), market_id), outcome);
    }

    pub fn resolution_validated(
        env: &Env,
        market_id: u64,
        validator: &Address,
        outcome: bool,
        validation_count: u32,
    ) {
        env.events().publish(
            (symbol_short!("validated"), market_id, validator.clone()),
            (outcome, validation_count),
        );
    }

    pub fn resolution_finalized(env: &Env, market_id: u64, outcome: bool, attestation_id: &BytesN<32>) {
        env.events().publish(
            (symbol_short!("finalized"), market_id),
            (outcome, attestation_id.clone()),
        );
    }

    pub fn rewards_claimed(env: &Env, market_id: u64, user: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("claimed"), market_id, user.clone()), amount);
    }

    pub fn reputation_updated(env: &Env, user: &Address, new_score: u64) {
        env.events()
            .publish((symbol_short!("reput"), user.clone()), new_score);
    }

    pub fn paused(env: &Env, owner: &Address) {
        env.events().publish((symbol_short!("paused"),), owner.clone());
    }

    pub fn unpaused(env: &Env, owner: &Address) {
        env.events().publish((symbol_short!("unpaused"),), owner.clone());
    }

    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
        env.events().publish(
            (symbol_short!("owner"),),
            (previous_owner.clone(), new_owner.clone()),
        );
    }

    pub fn emergency_withdrawal(env: &Env, token: &Address, to: &Address, amount: i128) {
        env.events().publish(
            (symbol_short!("emerg_wd"), token.clone()),
            (to.clone(), amount),
        );
    }

    pub fn fees_collected(env: &Env, to: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("fees"), to.clone()), amount);
    }

    pub fn config_updated(env: &Env, owner: &Address) {
        env.events().publish((symbol_short!("config"),), owner.clone());
    }
}
