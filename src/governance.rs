multiversx_sc::imports!();

use crate::config::MAX_NUMBER_OF_SHARES_AND_LOOT;
use crate::errors::*;
use crate::types::{Proposal, ProposalFlags, ProposalKind, VoteDirection};

// ============================================================
// Governance engine
//
// Submitted -> Sponsored -> voting window -> grace window ->
// Processed { passed | failed }. No transition leaves Processed.
// ============================================================

#[multiversx_sc::module]
pub trait GovernanceModule:
    crate::config::ConfigModule
    + crate::ledger::LedgerModule
    + crate::token_registry::TokenRegistryModule
    + crate::membership::MembershipModule
    + crate::proposals::ProposalRegistryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitProposal
    // Tribute is attached to the call and held in ESCROW.
    // ========================================================

    #[payable("*")]
    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        applicant: ManagedAddress,
        shares_requested: BigUint,
        loot_requested: BigUint,
        payment_requested: BigUint,
        payment_token: EgldOrEsdtTokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        let tribute = self.call_value().egld_or_single_esdt();
        require!(tribute.token_nonce == 0, ERR_INVALID_PAYMENT);

        require!(
            &shares_requested + &loot_requested <= MAX_NUMBER_OF_SHARES_AND_LOOT,
            ERR_TOO_MANY_SHARES
        );
        require!(!self.is_reserved_address(&applicant), ERR_RESERVED_ADDRESS);
        require!(!self.is_jailed(&applicant), ERR_APPLICANT_JAILED);

        if payment_requested > 0u64 {
            self.require_whitelisted(&payment_token);
        }
        if tribute.amount > 0u64 {
            self.require_whitelisted(&tribute.token_identifier);
            self.require_guild_bank_capacity_for(&tribute.token_identifier);
            self.record_inflow(&self.escrow(), &tribute.token_identifier, &tribute.amount);
        }

        self.create_proposal(
            ProposalKind::Standard,
            applicant,
            shares_requested,
            loot_requested,
            tribute.amount,
            tribute.token_identifier,
            payment_requested,
            payment_token,
            details,
        )
    }

    // ========================================================
    // ENDPOINT: submitWhitelistProposal
    // ========================================================

    #[endpoint(submitWhitelistProposal)]
    fn submit_whitelist_proposal(
        &self,
        token_to_whitelist: EgldOrEsdtTokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        require!(token_to_whitelist.is_valid(), ERR_INVALID_TOKEN);
        require!(
            !self.token_whitelist().contains(&token_to_whitelist),
            ERR_ALREADY_WHITELISTED
        );
        self.require_whitelist_capacity();

        let caller = self.blockchain().get_caller();
        let deposit_token = self.deposit_token().get();
        self.create_proposal(
            ProposalKind::Whitelist(token_to_whitelist.clone()),
            caller,
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
            token_to_whitelist,
            BigUint::zero(),
            deposit_token,
            details,
        )
    }

    // ========================================================
    // ENDPOINT: submitGuildKickProposal
    // ========================================================

    #[endpoint(submitGuildKickProposal)]
    fn submit_guild_kick_proposal(
        &self,
        member_to_kick: ManagedAddress,
        details: ManagedBuffer,
    ) -> u64 {
        require!(self.is_member(&member_to_kick), ERR_KICK_TARGET_INVALID);
        let member = self.members(&member_to_kick).get();
        require!(
            member.shares > 0u64 || member.loot > 0u64,
            ERR_KICK_TARGET_INVALID
        );
        require!(member.jailed == 0, ERR_MEMBER_JAILED);

        let deposit_token = self.deposit_token().get();
        self.create_proposal(
            ProposalKind::GuildKick(member_to_kick.clone()),
            member_to_kick,
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
            deposit_token.clone(),
            BigUint::zero(),
            deposit_token,
            details,
        )
    }

    // ========================================================
    // ENDPOINT: sponsorProposal
    // Sponsor pays the proposal deposit; the proposal enters the
    // queue with a starting period after every earlier one.
    // ========================================================

    #[payable("*")]
    #[endpoint(sponsorProposal)]
    fn sponsor_proposal(&self, proposal_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let sponsor = self.require_delegate(&caller);

        let deposit = self.call_value().egld_or_single_esdt();
        let proposal_deposit = self.proposal_deposit().get();
        if proposal_deposit > 0u64 {
            require!(
                deposit.token_identifier == self.deposit_token().get()
                    && deposit.token_nonce == 0
                    && deposit.amount == proposal_deposit,
                ERR_INVALID_DEPOSIT
            );
        } else {
            require!(deposit.amount == 0u64, ERR_INVALID_DEPOSIT);
        }

        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.flags.sponsored, ERR_ALREADY_SPONSORED);
        require!(!proposal.flags.cancelled, ERR_PROPOSAL_CANCELLED);

        match &proposal.kind {
            ProposalKind::Standard => {
                require!(!self.is_jailed(&proposal.applicant), ERR_APPLICANT_JAILED);
                if proposal.tribute_offered > 0u64 {
                    self.require_guild_bank_capacity_for(&proposal.tribute_token);
                }
            }
            ProposalKind::Whitelist(token) => {
                require!(!self.proposed_to_whitelist(token).get(), ERR_WHITELIST_PENDING);
                require!(!self.token_whitelist().contains(token), ERR_ALREADY_WHITELISTED);
                self.require_whitelist_capacity();
                self.proposed_to_whitelist(token).set(true);
            }
            ProposalKind::GuildKick(member) => {
                require!(!self.proposed_to_kick(member).get(), ERR_KICK_PENDING);
                require!(!self.is_jailed(member), ERR_MEMBER_JAILED);
                self.proposed_to_kick(member).set(true);
            }
        }

        if deposit.amount > 0u64 {
            self.record_inflow(&self.escrow(), &deposit.token_identifier, &deposit.amount);
        }

        let current_period = self.get_current_period();
        let starting_period = core::cmp::max(current_period, self.last_starting_period().get()) + 1;
        self.last_starting_period().set(starting_period);

        let queue_index = self.proposal_queue().push(&proposal_id) as u64;

        proposal.sponsor = sponsor.clone();
        proposal.starting_period = starting_period;
        proposal.queue_index = queue_index;
        proposal.flags.sponsored = true;
        self.proposals(proposal_id).set(&proposal);

        self.sponsor_proposal_event(proposal_id, &sponsor, queue_index, starting_period);

        queue_index
    }

    // ========================================================
    // ENDPOINT: submitVote
    // Weighted by the member's shares at the time of voting.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, queue_index: u64, vote: VoteDirection) {
        let caller = self.blockchain().get_caller();
        let member_address = self.require_delegate(&caller);
        require!(vote != VoteDirection::Null, ERR_INVALID_VOTE);

        let mut proposal = self.require_queued_proposal(queue_index);
        let current_period = self.get_current_period();
        require!(current_period >= proposal.starting_period, ERR_NOT_YET_VOTABLE);
        require!(
            current_period < self.voting_window_end(&proposal),
            ERR_VOTING_EXPIRED
        );

        let vote_mapper = self.votes_by_member(proposal.id, &member_address);
        require!(vote_mapper.get() == VoteDirection::Null, ERR_ALREADY_VOTED);
        vote_mapper.set(vote);

        let mut member = self.members(&member_address).get();
        match vote {
            VoteDirection::Yes => {
                proposal.yes_votes += &member.shares;

                if queue_index > member.highest_index_yes_vote {
                    member.highest_index_yes_vote = queue_index;
                    self.members(&member_address).set(&member);
                }

                let total_weight = self.total_weight();
                if total_weight > proposal.max_total_weight_at_yes_vote {
                    proposal.max_total_weight_at_yes_vote = total_weight;
                }
            }
            VoteDirection::No => {
                proposal.no_votes += &member.shares;
            }
            VoteDirection::Null => {}
        }
        self.proposals(proposal.id).set(&proposal);

        self.submit_vote_event(queue_index, &member_address, &caller, vote);
    }

    // ========================================================
    // ENDPOINT: processProposal
    // Anyone may process once the grace window is over, strictly
    // in queue order. The caller earns the processing reward.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, queue_index: u64) {
        let mut proposal = self.require_queued_proposal(queue_index);
        require!(!proposal.flags.processed, ERR_ALREADY_PROCESSED);
        require!(
            self.get_current_period() >= self.processable_from(&proposal),
            ERR_NOT_YET_PROCESSABLE
        );
        require!(
            self.is_queue_entry_processed(queue_index - 1),
            ERR_PREVIOUS_NOT_PROCESSED
        );

        let passed = match proposal.kind.clone() {
            ProposalKind::Standard => self.resolve_standard(&proposal),
            ProposalKind::Whitelist(token) => self.resolve_whitelist(&proposal, &token),
            ProposalKind::GuildKick(member) => self.resolve_guild_kick(&proposal, &member),
        };

        proposal.flags.processed = true;
        proposal.flags.passed = passed;
        self.proposals(proposal.id).set(&proposal);

        self.return_deposit(&proposal.sponsor);

        self.process_proposal_event(queue_index, proposal.id, passed);
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Only before sponsorship; tribute goes back to the proposer.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.flags.sponsored, ERR_ALREADY_SPONSORED);
        require!(!proposal.flags.cancelled, ERR_PROPOSAL_CANCELLED);
        require!(proposal.proposer == caller, ERR_NOT_PROPOSER);

        proposal.flags.cancelled = true;
        self.proposals(proposal_id).set(&proposal);

        self.internal_transfer(
            &self.escrow(),
            &proposal.proposer,
            &proposal.tribute_token,
            &proposal.tribute_offered,
        );

        self.cancel_proposal_event(proposal_id, &caller);
    }

    // ========================================================
    // INTERNAL: proposal creation
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    fn create_proposal(
        &self,
        kind: ProposalKind<Self::Api>,
        applicant: ManagedAddress,
        shares_requested: BigUint,
        loot_requested: BigUint,
        tribute_offered: BigUint,
        tribute_token: EgldOrEsdtTokenIdentifier,
        payment_requested: BigUint,
        payment_token: EgldOrEsdtTokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        let proposer = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            kind,
            proposer: proposer.clone(),
            sponsor: ManagedAddress::zero(),
            applicant: applicant.clone(),
            shares_requested,
            loot_requested,
            tribute_offered,
            tribute_token,
            payment_requested,
            payment_token,
            details: details.clone(),
            submitted_period: self.get_current_period(),
            starting_period: 0,
            queue_index: 0,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            max_total_weight_at_yes_vote: BigUint::zero(),
            flags: ProposalFlags::default(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.submit_proposal_event(proposal_id, &proposer, &applicant, &details);

        proposal_id
    }

    // ========================================================
    // INTERNAL: outcome resolution
    // Every check runs before the first write.
    // ========================================================

    /// Majority and dilution bound, common to every kind.
    fn did_pass(&self, proposal: &Proposal<Self::Api>) -> bool {
        if proposal.yes_votes <= proposal.no_votes {
            return false;
        }

        let bound = &proposal.max_total_weight_at_yes_vote * self.dilution_bound().get();
        self.total_weight() <= bound
    }

    fn resolve_standard(&self, proposal: &Proposal<Self::Api>) -> bool {
        let guild = self.guild();
        let escrow = self.escrow();

        let mut passed = self.did_pass(proposal);

        if self.is_jailed(&proposal.applicant) {
            passed = false;
        }

        let new_weight =
            self.total_weight() + &proposal.shares_requested + &proposal.loot_requested;
        if new_weight > MAX_NUMBER_OF_SHARES_AND_LOOT {
            passed = false;
        }

        if proposal.tribute_offered > 0u64
            && !self.has_guild_bank_capacity_for(&proposal.tribute_token)
        {
            passed = false;
        }

        // payments are honored in full or not at all
        if proposal.payment_requested
            > self
                .user_token_balances(&guild, &proposal.payment_token)
                .get()
        {
            passed = false;
        }

        if passed {
            self.grant_membership(
                &proposal.applicant,
                &proposal.shares_requested,
                &proposal.loot_requested,
            );
            self.internal_transfer(
                &escrow,
                &guild,
                &proposal.tribute_token,
                &proposal.tribute_offered,
            );
            self.internal_transfer(
                &guild,
                &proposal.applicant,
                &proposal.payment_token,
                &proposal.payment_requested,
            );
        } else {
            self.internal_transfer(
                &escrow,
                &proposal.proposer,
                &proposal.tribute_token,
                &proposal.tribute_offered,
            );
        }

        passed
    }

    fn resolve_whitelist(
        &self,
        proposal: &Proposal<Self::Api>,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> bool {
        let passed = self.did_pass(proposal) && self.has_whitelist_capacity();
        if passed {
            self.whitelist_token(token);
        }
        self.proposed_to_whitelist(token).clear();
        passed
    }

    fn resolve_guild_kick(&self, proposal: &Proposal<Self::Api>, member: &ManagedAddress) -> bool {
        let passed = self.did_pass(proposal);
        if passed {
            self.jail_member(member, proposal.queue_index);
        }
        self.proposed_to_kick(member).clear();
        passed
    }

    /// Splits the sponsor's deposit between the processor and the sponsor.
    fn return_deposit(&self, sponsor: &ManagedAddress) {
        let escrow = self.escrow();
        let deposit_token = self.deposit_token().get();
        let proposal_deposit = self.proposal_deposit().get();
        let processing_reward = self.processing_reward().get();
        let processor = self.blockchain().get_caller();

        self.internal_transfer(&escrow, &processor, &deposit_token, &processing_reward);
        self.internal_transfer(
            &escrow,
            sponsor,
            &deposit_token,
            &(proposal_deposit - &processing_reward),
        );
    }
}
