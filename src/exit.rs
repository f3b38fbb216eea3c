multiversx_sc::imports!();

use crate::errors::{
    ERR_ARITY_MISMATCH, ERR_INSUFFICIENT_BALANCE, ERR_INSUFFICIENT_LOOT, ERR_INSUFFICIENT_SHARES,
    ERR_NOT_JAILED, ERR_NO_LOOT, ERR_RAGEQUIT_BLOCKED,
};

// ============================================================
// Exit engine
// Ragequit pays out of GUILD; withdrawals pay out of the ledger.
// ============================================================

#[multiversx_sc::module]
pub trait ExitModule:
    crate::config::ConfigModule
    + crate::ledger::LedgerModule
    + crate::membership::MembershipModule
    + crate::proposals::ProposalRegistryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: ragequit
    // Burns shares/loot for a pro-rata cut of every guild token.
    // ========================================================

    #[endpoint(ragequit)]
    fn ragequit(&self, shares_to_burn: BigUint, loot_to_burn: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.ragequit_member(&caller, &shares_to_burn, &loot_to_burn);
    }

    // ========================================================
    // ENDPOINT: ragekick
    // Forces a jailed member out with all of their loot.
    // ========================================================

    #[endpoint(ragekick)]
    fn ragekick(&self, member_to_kick: ManagedAddress) {
        require!(self.is_jailed(&member_to_kick), ERR_NOT_JAILED);
        let member = self.members(&member_to_kick).get();
        require!(member.loot > 0u64, ERR_NO_LOOT);

        self.ragequit_member(&member_to_kick, &BigUint::zero(), &member.loot);
    }

    // ========================================================
    // ENDPOINT: withdrawBalance / withdrawBalances
    // ========================================================

    #[endpoint(withdrawBalance)]
    fn withdraw_balance(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.withdraw_to(&caller, &token, &amount);
    }

    /// With `max`, each entry withdraws whatever is left of that token,
    /// so repeated tokens resolve against the remaining balance.
    #[endpoint(withdrawBalances)]
    fn withdraw_balances(
        &self,
        tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        max: bool,
    ) {
        require!(tokens.len() == amounts.len(), ERR_ARITY_MISMATCH);

        let caller = self.blockchain().get_caller();
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            if max {
                let available = self.user_token_balances(&caller, &token).get();
                self.withdraw_to(&caller, &token, &available);
            } else {
                self.withdraw_to(&caller, &token, &amount);
            }
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn ragequit_member(
        &self,
        member_address: &ManagedAddress,
        shares_to_burn: &BigUint,
        loot_to_burn: &BigUint,
    ) {
        let mut member = self.members(member_address).get();
        require!(member.shares >= *shares_to_burn, ERR_INSUFFICIENT_SHARES);
        require!(member.loot >= *loot_to_burn, ERR_INSUFFICIENT_LOOT);
        require!(
            self.can_ragequit(member.highest_index_yes_vote),
            ERR_RAGEQUIT_BLOCKED
        );

        let initial_total_weight = self.total_weight();
        let weight_to_burn = shares_to_burn + loot_to_burn;

        member.shares -= shares_to_burn;
        member.loot -= loot_to_burn;
        self.members(member_address).set(&member);
        self.total_shares().update(|total| *total -= shares_to_burn);
        self.total_loot().update(|total| *total -= loot_to_burn);

        // snapshot first: a payout that empties GUILD removes the token from the set
        let mut guild_tokens: ManagedVec<EgldOrEsdtTokenIdentifier> = ManagedVec::new();
        for token in self.guild_bank_tokens().iter() {
            guild_tokens.push(token);
        }

        let guild = self.guild();
        for token in guild_tokens.iter() {
            let guild_balance = self.user_token_balances(&guild, &token).get();
            let payout = (&guild_balance * &weight_to_burn) / &initial_total_weight;
            if payout > 0u64 {
                self.internal_transfer(&guild, member_address, &token, &payout);
            }
        }

        self.ragequit_event(member_address, shares_to_burn, loot_to_burn);
    }

    fn withdraw_to(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        require!(
            *amount <= self.user_token_balances(account, token).get(),
            ERR_INSUFFICIENT_BALANCE
        );
        if *amount == 0u64 {
            return;
        }

        self.record_outflow(account, token, amount);
        self.send().direct(account, token, 0, amount);

        self.withdraw_event(account, token, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// True once the proposal at `highest_index_yes_vote` has been processed.
    #[view(canRagequit)]
    fn can_ragequit(&self, highest_index_yes_vote: u64) -> bool {
        self.is_queue_entry_processed(highest_index_yes_vote)
    }
}
