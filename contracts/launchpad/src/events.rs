use soroban_sdk::{Address, Env, Symbol};

pub fn sale_initialized(env: &Env, owner: &Address, sale_token: &Address) {
    env.events().publish(
        (Symbol::new(env, "sale_initialized"),),
        (owner.clone(), sale_token.clone()),
    );
}

pub fn presale_started(env: &Env) {
    env.events()
        .publish((Symbol::new(env, "presale_started"),), ());
}

pub fn presale_ended(env: &Env, end_time: u64) {
    env.events()
        .publish((Symbol::new(env, "presale_ended"),), (end_time,));
}

pub fn tokens_purchased(env: &Env, buyer: &Address, amount: i128, bonus_applied: bool) {
    env.events().publish(
        (Symbol::new(env, "tokens_purchased"),),
        (buyer.clone(), amount, bonus_applied),
    );
}

pub fn tokens_claimed(env: &Env, buyer: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "tokens_claimed"),),
        (buyer.clone(), amount),
    );
}

pub fn funds_withdrawn(env: &Env, owner: &Address, stable_amount: i128, native_amount: i128) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        (owner.clone(), stable_amount, native_amount),
    );
}
