multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::types::{Proposal, VoteDirection};

#[multiversx_sc::module]
pub trait ProposalRegistryModule: crate::config::ConfigModule {
    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// Resolves a 1-based queue index to the proposal id sponsored at it.
    fn require_queued_proposal(&self, queue_index: u64) -> Proposal<Self::Api> {
        let queue = self.proposal_queue();
        require!(
            queue_index >= 1 && queue_index as usize <= queue.len(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.require_proposal(queue.get(queue_index as usize))
    }

    fn voting_window_end(&self, proposal: &Proposal<Self::Api>) -> u64 {
        proposal.starting_period + self.voting_period_length().get()
    }

    fn processable_from(&self, proposal: &Proposal<Self::Api>) -> u64 {
        self.voting_window_end(proposal) + self.grace_period_length().get()
    }

    /// The proposal at `queue_index` has been processed; index 0 means "none".
    fn is_queue_entry_processed(&self, queue_index: u64) -> bool {
        if queue_index == 0 {
            return true;
        }
        let proposal_id = self.proposal_queue().get(queue_index as usize);
        self.proposals(proposal_id).get().flags.processed
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    /// `[sponsored, processed, passed, cancelled, isWhitelist, isGuildKick]`
    #[view(getProposalFlags)]
    fn get_proposal_flags(
        &self,
        proposal_id: u64,
    ) -> MultiValue6<bool, bool, bool, bool, bool, bool> {
        let proposal = self.require_proposal(proposal_id);
        (
            proposal.flags.sponsored,
            proposal.flags.processed,
            proposal.flags.passed,
            proposal.flags.cancelled,
            proposal.kind.is_whitelist(),
            proposal.kind.is_guild_kick(),
        )
            .into()
    }

    #[view(getProposalQueueLength)]
    fn get_proposal_queue_length(&self) -> usize {
        self.proposal_queue().len()
    }

    #[view(getProposalIdByIndex)]
    fn get_proposal_id_by_index(&self, queue_index: u64) -> u64 {
        self.require_queued_proposal(queue_index).id
    }

    #[view(hasVotingPeriodExpired)]
    fn has_voting_period_expired(&self, queue_index: u64) -> bool {
        let proposal = self.require_queued_proposal(queue_index);
        self.get_current_period() >= self.voting_window_end(&proposal)
    }

    #[view(getMemberProposalVote)]
    fn get_member_proposal_vote(
        &self,
        member: &ManagedAddress,
        queue_index: u64,
    ) -> VoteDirection {
        let proposal = self.require_queued_proposal(queue_index);
        self.votes_by_member(proposal.id, member).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Sponsored proposal ids, in voting order
    #[storage_mapper("proposalQueue")]
    fn proposal_queue(&self) -> VecMapper<u64>;

    /// Starting period of the most recently sponsored proposal
    #[view(getLastStartingPeriod)]
    #[storage_mapper("lastStartingPeriod")]
    fn last_starting_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votesByMember")]
    fn votes_by_member(
        &self,
        proposal_id: u64,
        member: &ManagedAddress,
    ) -> SingleValueMapper<VoteDirection>;

    #[view(isProposedToWhitelist)]
    #[storage_mapper("proposedToWhitelist")]
    fn proposed_to_whitelist(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    #[view(isProposedToKick)]
    #[storage_mapper("proposedToKick")]
    fn proposed_to_kick(&self, member: &ManagedAddress) -> SingleValueMapper<bool>;
}
