multiversx_sc::imports!();

use crate::errors::{
    ERR_GUILD_BANK_FULL, ERR_NOT_WHITELISTED, ERR_NO_BALANCE_TO_COLLECT, ERR_WHITELIST_FULL,
};

// ============================================================
// Token registry
//
// Whitelist capacity W bounds what may ever be deposited.
// Guild bank capacity G bounds how many tokens the guild holds
// at once, which is what ragequit has to iterate.
// ============================================================

#[multiversx_sc::module]
pub trait TokenRegistryModule:
    crate::config::ConfigModule
    + crate::ledger::LedgerModule
    + crate::membership::MembershipModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: collectTokens
    // Sweeps stray on-chain balance (e.g. airdrops) into GUILD.
    // ========================================================

    #[endpoint(collectTokens)]
    fn collect_tokens(&self, token: EgldOrEsdtTokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_delegate(&caller);
        self.require_whitelisted(&token);

        let amount = self.unaccounted_balance(&token);
        require!(amount > 0u64, ERR_NO_BALANCE_TO_COLLECT);

        self.require_guild_bank_capacity_for(&token);
        self.record_inflow(&self.guild(), &token, &amount);

        self.tokens_collected_event(&token, &amount);
    }

    // ========================================================
    // INTERNAL: capacity checks
    // ========================================================

    fn require_whitelisted(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.token_whitelist().contains(token), ERR_NOT_WHITELISTED);
    }

    fn has_whitelist_capacity(&self) -> bool {
        self.token_whitelist().len() < self.max_token_whitelist_count().get()
    }

    fn require_whitelist_capacity(&self) {
        require!(self.has_whitelist_capacity(), ERR_WHITELIST_FULL);
    }

    /// A token already held by the guild never contests capacity.
    fn has_guild_bank_capacity_for(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        self.guild_bank_tokens().contains(token)
            || self.guild_bank_tokens().len() < self.max_guild_bank_token_count().get()
    }

    fn require_guild_bank_capacity_for(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(
            self.has_guild_bank_capacity_for(token),
            ERR_GUILD_BANK_FULL
        );
    }

    fn whitelist_token(&self, token: &EgldOrEsdtTokenIdentifier) {
        self.token_whitelist().insert(token.clone());
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTokenCount)]
    fn get_token_count(&self) -> usize {
        self.token_whitelist().len()
    }

    #[view(getApprovedTokens)]
    fn get_approved_tokens(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for token in self.token_whitelist().iter() {
            result.push(token);
        }
        result
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        self.token_whitelist().contains(token)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// First entry of the whitelist; deposits and rewards are paid in it
    #[view(getDepositToken)]
    #[storage_mapper("depositToken")]
    fn deposit_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Ordered whitelist with O(1) lookup; tokens are never removed
    #[storage_mapper("tokenWhitelist")]
    fn token_whitelist(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;
}
