//! Linear tranche-based vesting arithmetic.
//!
//! Pure integer math, floor rounding at every step. The contract consults
//! this from `claim_tokens` and the `claimable` view; nothing here touches
//! storage.

/// Tokens currently releasable for a purchase record.
///
/// Vesting starts at `end_time` (the presale end) and unlocks one tranche
/// per `period` seconds, linearly over `duration` tranches. Fully unlocked
/// once `duration` tranches have elapsed.
pub fn claimable(
    total_purchased: i128,
    claimed: i128,
    now: u64,
    end_time: u64,
    period: u64,
    duration: u32,
) -> i128 {
    if now < end_time || period == 0 || duration == 0 {
        return 0;
    }

    let elapsed = ((now - end_time) / period).min(duration as u64);
    let unlocked = total_purchased * elapsed as i128 / duration as i128;

    (unlocked - claimed).max(0)
}
