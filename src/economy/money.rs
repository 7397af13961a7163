use bevy::prelude::*;
use crate::shared::*;

/// Tracks economy statistics across the session.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyStats {
    pub total_bells_earned: u64,
    pub total_bells_spent: u64,
    pub total_transactions: u64,
}

/// Applies MoneyChangeEvents to the wallet.
/// Validates that spending does not put bells below 0 (clamped to 0).
pub fn apply_money_changes(
    mut money_events: EventReader<MoneyChangeEvent>,
    mut wallet: ResMut<Wallet>,
    mut stats: ResMut<EconomyStats>,
) {
    for ev in money_events.read() {
        if ev.amount >= 0 {
            let gain = ev.amount as u32;
            wallet.bells = wallet.bells.saturating_add(gain);
            stats.total_bells_earned = stats.total_bells_earned.saturating_add(gain as u64);
            info!(
                "[Economy] +{} bells: {}. New balance: {}",
                gain, ev.reason, wallet.bells
            );
        } else {
            let cost = ev.amount.unsigned_abs();
            if wallet.bells >= cost {
                wallet.bells -= cost;
                stats.total_bells_spent = stats.total_bells_spent.saturating_add(cost as u64);
                info!(
                    "[Economy] -{} bells: {}. New balance: {}",
                    cost, ev.reason, wallet.bells
                );
            } else {
                // Spending should have been validated before sending the
                // event. Log and clamp rather than panic.
                warn!(
                    "[Economy] Tried to spend {} with only {} in the wallet (reason: {}). Clamping to 0.",
                    cost, wallet.bells, ev.reason
                );
                stats.total_bells_spent =
                    stats.total_bells_spent.saturating_add(wallet.bells as u64);
                wallet.bells = 0;
            }
        }
        stats.total_transactions += 1;
    }
}

/// Format a bell amount as a display string (e.g. "1,234 bells").
pub fn format_bells(amount: u32) -> String {
    let digits: Vec<char> = amount.to_string().chars().collect();
    let mut result = String::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.push_str(" bells");
    result
}
