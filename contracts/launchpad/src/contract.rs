use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, vec, Address, Env,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped Presale with Bonus Tier and Linear Vesting"
);

// Largest decimal count the fixed-point scaling supports without
// overflowing i128 in the conversion products.
const MAX_DECIMALS: u32 = 18;

fn pow10(decimals: u32) -> i128 {
    10i128.pow(decimals)
}

/// Read the oracle's current rate: stablecoin value of one whole native
/// unit, scaled by 10^decimals. A trapping call reverts the whole tx.
fn read_oracle(env: &Env, oracle: &Address) -> (i128, u32) {
    let (rate, decimals): (i128, u32) =
        env.invoke_contract(oracle, &symbol_short!("latest"), vec![env]);
    (rate, decimals)
}

/// Apply bonus, enforce caps, and commit the allocation to storage.
/// Returns (total tokens allocated, whether any bonus applied).
fn allocate(
    env: &Env,
    params: &SaleParams,
    state: &mut SaleState,
    buyer: &Address,
    tokens_base: i128,
) -> Result<(i128, bool), Error> {
    let eligible = tokens_base.min(state.bonus_remaining);
    let bonus = eligible * params.bonus_bps as i128 / 10_000;
    let total = tokens_base + bonus;

    let mut record = get_purchase(env, buyer).unwrap_or(PurchaseRecord {
        total_purchased: 0,
        claimed: 0,
    });
    if record.total_purchased + total > params.wallet_limit {
        return Err(Error::ExceedsWalletLimit);
    }
    if state.tokens_sold + total > params.total_for_sale {
        return Err(Error::ExceedsTotalForSale);
    }

    state.bonus_remaining -= eligible;
    state.tokens_sold += total;
    record.total_purchased += total;
    set_state(env, state);
    set_purchase(env, buyer, &record);

    Ok((total, eligible > 0))
}

#[contract]
pub struct LaunchpadContract;

#[contractimpl]
impl LaunchpadContract {
    /// Initialize the presale. One-shot; all parameters immutable after.
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        stable_token: Address,
        native_token: Address,
        oracle: Address,
        params: SaleParams,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if params.token_price <= 0
            || params.total_for_sale <= 0
            || params.bonus_limit < 0
            || params.bonus_limit > params.total_for_sale
            || params.wallet_limit <= 0
            || params.vesting_period == 0
            || params.vesting_duration == 0
            || params.token_decimals > MAX_DECIMALS
            || params.stable_decimals > MAX_DECIMALS
            || params.native_decimals > MAX_DECIMALS
        {
            return Err(Error::InvalidParams);
        }

        let bonus_remaining = params.bonus_limit;
        let config = SaleConfig {
            owner: owner.clone(),
            sale_token: sale_token.clone(),
            stable_token,
            native_token,
            oracle,
            params,
        };
        set_config(&env, &config);
        set_state(
            &env,
            &SaleState {
                phase: SalePhase::NotStarted,
                tokens_sold: 0,
                bonus_remaining,
                end_time: 0,
            },
        );

        events::sale_initialized(&env, &owner, &sale_token);
        Ok(())
    }

    /// Open the sale. Owner only; valid only from NotStarted.
    pub fn start_presale(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.owner {
            return Err(Error::Unauthorized);
        }

        let mut state = get_state(&env)?;
        if state.phase != SalePhase::NotStarted {
            return Err(Error::InvalidPhase);
        }
        state.phase = SalePhase::Active;
        set_state(&env, &state);

        events::presale_started(&env);
        Ok(())
    }

    /// Close the sale and start the vesting clock. Owner only; valid only
    /// from Active. Ended is terminal.
    pub fn end_presale(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.owner {
            return Err(Error::Unauthorized);
        }

        let mut state = get_state(&env)?;
        if state.phase != SalePhase::Active {
            return Err(Error::InvalidPhase);
        }
        state.phase = SalePhase::Ended;
        state.end_time = env.ledger().timestamp();
        set_state(&env, &state);

        events::presale_ended(&env, state.end_time);
        Ok(())
    }

    /// Buy with the stablecoin. `amount` is in stablecoin smallest units.
    /// Returns the total tokens (base + bonus) allocated.
    pub fn buy_with_stable(env: Env, buyer: Address, amount: i128) -> Result<i128, Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if state.phase != SalePhase::Active {
            return Err(Error::PresaleNotActive);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let params = &config.params;
        let tokens_base = amount * pow10(params.token_decimals) / params.token_price;
        if tokens_base == 0 {
            return Err(Error::InvalidAmount);
        }

        let (total, bonus_applied) = allocate(&env, params, &mut state, &buyer, tokens_base)?;

        // Pull payment only after the ledger state is committed.
        token::Client::new(&env, &config.stable_token).transfer(
            &buyer,
            &env.current_contract_address(),
            &amount,
        );

        events::tokens_purchased(&env, &buyer, total, bonus_applied);
        Ok(total)
    }

    /// Buy with the native asset, priced via the oracle. `value` is in
    /// native smallest units. Returns the total tokens allocated.
    pub fn buy_with_native(env: Env, buyer: Address, value: i128) -> Result<i128, Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if state.phase != SalePhase::Active {
            return Err(Error::PresaleNotActive);
        }
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        let (rate, rate_decimals) = read_oracle(&env, &config.oracle);
        if rate <= 0 {
            return Err(Error::ExternalTransferFailed);
        }

        let params = &config.params;
        let stable_equiv = value * rate * pow10(params.stable_decimals)
            / (pow10(rate_decimals) * pow10(params.native_decimals));
        let tokens_base = stable_equiv * pow10(params.token_decimals) / params.token_price;
        if tokens_base == 0 {
            return Err(Error::InvalidAmount);
        }

        let (total, bonus_applied) = allocate(&env, params, &mut state, &buyer, tokens_base)?;

        token::Client::new(&env, &config.native_token).transfer(
            &buyer,
            &env.current_contract_address(),
            &value,
        );

        events::tokens_purchased(&env, &buyer, total, bonus_applied);
        Ok(total)
    }

    /// Release the buyer's currently vested tokens. Claimed amount is
    /// recorded before the transfer so a reentrant callee always observes
    /// updated state.
    pub fn claim_tokens(env: Env, buyer: Address) -> Result<i128, Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        if state.phase != SalePhase::Ended {
            return Err(Error::PresaleNotEnded);
        }

        let mut record = get_purchase(&env, &buyer).ok_or(Error::NothingToClaim)?;
        let params = &config.params;
        let amount = vesting::claimable(
            record.total_purchased,
            record.claimed,
            env.ledger().timestamp(),
            state.end_time,
            params.vesting_period,
            params.vesting_duration,
        );
        if amount == 0 {
            return Err(Error::NothingToClaim);
        }

        record.claimed += amount;
        set_purchase(&env, &buyer, &record);

        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &buyer,
            &amount,
        );

        events::tokens_claimed(&env, &buyer, amount);
        Ok(amount)
    }

    /// Sweep all collected proceeds (stablecoin and native) to the owner.
    /// No phase restriction: callable at any time, including mid-sale.
    pub fn withdraw_funds(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.owner {
            return Err(Error::Unauthorized);
        }

        let this = env.current_contract_address();

        let stable = token::Client::new(&env, &config.stable_token);
        let stable_amount = stable.balance(&this);
        if stable_amount > 0 {
            stable.transfer(&this, &config.owner, &stable_amount);
        }

        let native = token::Client::new(&env, &config.native_token);
        let native_amount = native.balance(&this);
        if native_amount > 0 {
            native.transfer(&this, &config.owner, &native_amount);
        }

        events::funds_withdrawn(&env, &config.owner, stable_amount, native_amount);
        Ok(())
    }

    // View functions

    pub fn presale_started(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.phase != SalePhase::NotStarted)
    }

    pub fn presale_ended(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.phase == SalePhase::Ended)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn get_purchase(env: Env, buyer: Address) -> Option<PurchaseRecord> {
        get_purchase(&env, &buyer)
    }

    /// Preview of the buyer's currently claimable amount. Zero before the
    /// sale has ended; never mutates state.
    pub fn claimable(env: Env, buyer: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        if state.phase != SalePhase::Ended {
            return Ok(0);
        }
        let record = match get_purchase(&env, &buyer) {
            Some(record) => record,
            None => return Ok(0),
        };
        Ok(vesting::claimable(
            record.total_purchased,
            record.claimed,
            env.ledger().timestamp(),
            state.end_time,
            config.params.vesting_period,
            config.params.vesting_duration,
        ))
    }
}
