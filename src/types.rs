multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal kind: exactly one per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalKind<M: ManagedTypeApi> {
    /// Grants shares/loot against tribute, optionally pays out of the guild bank.
    Standard,
    /// Adds a token to the whitelist.
    Whitelist(EgldOrEsdtTokenIdentifier<M>),
    /// Jails a member and converts all of their shares to loot.
    GuildKick(ManagedAddress<M>),
}

impl<M: ManagedTypeApi> ProposalKind<M> {
    pub fn is_whitelist(&self) -> bool {
        matches!(self, ProposalKind::Whitelist(_))
    }

    pub fn is_guild_kick(&self) -> bool {
        matches!(self, ProposalKind::GuildKick(_))
    }
}

// ============================================================
// Proposal flags: mutable lifecycle state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Default, PartialEq, Debug)]
pub struct ProposalFlags {
    pub sponsored: bool,
    pub processed: bool,
    pub passed: bool,
    pub cancelled: bool,
}

// ============================================================
// Proposal: immutable terms plus voting state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub kind: ProposalKind<M>,
    pub proposer: ManagedAddress<M>,
    /// Member address of the sponsor (zero until sponsored)
    pub sponsor: ManagedAddress<M>,
    pub applicant: ManagedAddress<M>,
    pub shares_requested: BigUint<M>,
    pub loot_requested: BigUint<M>,
    pub tribute_offered: BigUint<M>,
    pub tribute_token: EgldOrEsdtTokenIdentifier<M>,
    pub payment_requested: BigUint<M>,
    pub payment_token: EgldOrEsdtTokenIdentifier<M>,
    pub details: ManagedBuffer<M>,
    pub submitted_period: u64,
    /// First period of the voting window (0 until sponsored)
    pub starting_period: u64,
    /// 1-based position in the sponsored queue (0 until sponsored)
    pub queue_index: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    /// Highest total shares + loot observed at any YES vote
    pub max_total_weight_at_yes_vote: BigUint<M>,
    pub flags: ProposalFlags,
}

// ============================================================
// Vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    /// Not voted; also what an empty vote record decodes to
    Null,
    Yes,
    No,
}

// ============================================================
// Member
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Member<M: ManagedTypeApi> {
    /// Address allowed to vote and sponsor on the member's behalf
    pub delegate_key: ManagedAddress<M>,
    pub shares: BigUint<M>,
    pub loot: BigUint<M>,
    pub exists: bool,
    /// Queue index of the latest proposal this member voted YES on
    pub highest_index_yes_vote: u64,
    /// Queue index of the guild kick that jailed this member, 0 if free
    pub jailed: u64,
}
