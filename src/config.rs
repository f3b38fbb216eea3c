multiversx_sc::imports!();

// ============================================================
// Upper bounds
// ============================================================

/// Maximum length of the voting window, in periods
pub const MAX_VOTING_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

/// Maximum length of the grace window, in periods
pub const MAX_GRACE_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

pub const MAX_DILUTION_BOUND: u64 = 1_000_000_000_000_000_000;

/// Bound on total shares + loot, so weight arithmetic stays meaningful
pub const MAX_NUMBER_OF_SHARES_AND_LOOT: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Configuration and period clock
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule {
    /// Periods elapsed since summoning.
    #[view(getCurrentPeriod)]
    fn get_current_period(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now.saturating_sub(self.summoning_time().get());
        elapsed / self.period_duration().get()
    }

    #[view(getSummoningTime)]
    #[storage_mapper("summoningTime")]
    fn summoning_time(&self) -> SingleValueMapper<u64>;

    /// Seconds per period
    #[view(getPeriodDuration)]
    #[storage_mapper("periodDuration")]
    fn period_duration(&self) -> SingleValueMapper<u64>;

    #[view(getVotingPeriodLength)]
    #[storage_mapper("votingPeriodLength")]
    fn voting_period_length(&self) -> SingleValueMapper<u64>;

    #[view(getGracePeriodLength)]
    #[storage_mapper("gracePeriodLength")]
    fn grace_period_length(&self) -> SingleValueMapper<u64>;

    /// Paid by the sponsor in the deposit token, returned on processing
    #[view(getProposalDeposit)]
    #[storage_mapper("proposalDeposit")]
    fn proposal_deposit(&self) -> SingleValueMapper<BigUint>;

    /// Part of the deposit paid to whoever processes a proposal
    #[view(getProcessingReward)]
    #[storage_mapper("processingReward")]
    fn processing_reward(&self) -> SingleValueMapper<BigUint>;

    #[view(getDilutionBound)]
    #[storage_mapper("dilutionBound")]
    fn dilution_bound(&self) -> SingleValueMapper<u64>;

    /// W: capacity of the token whitelist
    #[view(getMaxTokenWhitelistCount)]
    #[storage_mapper("maxTokenWhitelistCount")]
    fn max_token_whitelist_count(&self) -> SingleValueMapper<usize>;

    /// G: capacity of the set of tokens held by the guild bank
    #[view(getMaxGuildBankTokenCount)]
    #[storage_mapper("maxGuildBankTokenCount")]
    fn max_guild_bank_token_count(&self) -> SingleValueMapper<usize>;
}
