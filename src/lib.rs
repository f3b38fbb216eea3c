#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod exit;
pub mod governance;
pub mod ledger;
pub mod membership;
pub mod proposals;
pub mod token_registry;
pub mod types;

use config::{
    MAX_DILUTION_BOUND, MAX_GRACE_PERIOD_LENGTH, MAX_NUMBER_OF_SHARES_AND_LOOT,
    MAX_VOTING_PERIOD_LENGTH,
};
use errors::{ERR_DUPLICATE_TOKEN, ERR_INVALID_CONFIG};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Moloch:
    config::ConfigModule
    + ledger::LedgerModule
    + token_registry::TokenRegistryModule
    + membership::MembershipModule
    + proposals::ProposalRegistryModule
    + governance::GovernanceModule
    + exit::ExitModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer is summoned as the first member. The first
    // approved token becomes the deposit token.
    // ========================================================

    #[init]
    #[allow(clippy::too_many_arguments)]
    fn init(
        &self,
        period_duration: u64,
        voting_period_length: u64,
        grace_period_length: u64,
        proposal_deposit: BigUint,
        dilution_bound: u64,
        processing_reward: BigUint,
        max_token_whitelist_count: usize,
        max_guild_bank_token_count: usize,
        summoner_shares: BigUint,
        approved_tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) {
        require!(period_duration > 0, ERR_INVALID_CONFIG);
        require!(
            voting_period_length > 0 && voting_period_length <= MAX_VOTING_PERIOD_LENGTH,
            ERR_INVALID_CONFIG
        );
        require!(
            grace_period_length <= MAX_GRACE_PERIOD_LENGTH,
            ERR_INVALID_CONFIG
        );
        require!(
            dilution_bound > 0 && dilution_bound <= MAX_DILUTION_BOUND,
            ERR_INVALID_CONFIG
        );
        require!(processing_reward <= proposal_deposit, ERR_INVALID_CONFIG);
        require!(
            max_guild_bank_token_count > 0
                && max_guild_bank_token_count <= max_token_whitelist_count,
            ERR_INVALID_CONFIG
        );
        require!(
            summoner_shares > 0u64 && summoner_shares <= MAX_NUMBER_OF_SHARES_AND_LOOT,
            ERR_INVALID_CONFIG
        );

        self.summoning_time().set(self.blockchain().get_block_timestamp());
        self.period_duration().set(period_duration);
        self.voting_period_length().set(voting_period_length);
        self.grace_period_length().set(grace_period_length);
        self.proposal_deposit().set(&proposal_deposit);
        self.dilution_bound().set(dilution_bound);
        self.processing_reward().set(&processing_reward);
        self.max_token_whitelist_count().set(max_token_whitelist_count);
        self.max_guild_bank_token_count().set(max_guild_bank_token_count);

        for token in approved_tokens.into_iter() {
            require!(token.is_valid(), ERR_INVALID_CONFIG);
            require!(!self.token_whitelist().contains(&token), ERR_DUPLICATE_TOKEN);
            if self.token_whitelist().is_empty() {
                self.deposit_token().set(&token);
            }
            self.whitelist_token(&token);
        }
        let whitelisted = self.token_whitelist().len();
        require!(
            whitelisted > 0 && whitelisted <= max_token_whitelist_count,
            ERR_INVALID_CONFIG
        );

        let summoner = self.blockchain().get_caller();
        self.grant_membership(&summoner, &summoner_shares, &BigUint::zero());

        self.summon_complete_event(&summoner, &self.deposit_token().get(), &summoner_shares);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
