multiversx_sc::imports!();

use crate::types::VoteDirection;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("summonComplete")]
    fn summon_complete_event(
        &self,
        #[indexed] summoner: &ManagedAddress,
        #[indexed] deposit_token: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    );

    #[event("submitProposal")]
    fn submit_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] applicant: &ManagedAddress,
        details: &ManagedBuffer,
    );

    #[event("sponsorProposal")]
    fn sponsor_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] sponsor: &ManagedAddress,
        #[indexed] queue_index: u64,
        starting_period: u64,
    );

    #[event("submitVote")]
    fn submit_vote_event(
        &self,
        #[indexed] queue_index: u64,
        #[indexed] member: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        vote: VoteDirection,
    );

    #[event("processProposal")]
    fn process_proposal_event(
        &self,
        #[indexed] queue_index: u64,
        #[indexed] proposal_id: u64,
        passed: bool,
    );

    #[event("cancelProposal")]
    fn cancel_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("ragequit")]
    fn ragequit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] shares_burned: &BigUint,
        loot_burned: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("tokensCollected")]
    fn tokens_collected_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("updateDelegateKey")]
    fn update_delegate_key_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] new_delegate_key: &ManagedAddress,
    );
}
