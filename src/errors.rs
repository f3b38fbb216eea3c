// ============================================================
// Error messages
//
// Every rejected call aborts with one of these; the VM discards
// all writes of the call, so no partial state is ever visible.
// ============================================================

// ── Capacity ──

pub const ERR_WHITELIST_FULL: &str = "capacity exceeded: whitelist";
pub const ERR_GUILD_BANK_FULL: &str = "capacity exceeded: guild bank tokens";

// ── Tokens and balances ──

pub const ERR_NOT_WHITELISTED: &str = "token not whitelisted";
pub const ERR_ALREADY_WHITELISTED: &str = "token already whitelisted";
pub const ERR_INVALID_TOKEN: &str = "invalid token identifier";
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient balance";
pub const ERR_INSUFFICIENT_SHARES: &str = "insufficient balance: shares";
pub const ERR_INSUFFICIENT_LOOT: &str = "insufficient balance: loot";
pub const ERR_ARITY_MISMATCH: &str = "arity mismatch: tokens and amounts must be the same length";
pub const ERR_NO_BALANCE_TO_COLLECT: &str = "no balance to collect";
pub const ERR_INVALID_PAYMENT: &str = "invalid payment";
pub const ERR_INVALID_DEPOSIT: &str =
    "deposit must be exactly the proposal deposit in the deposit token";

// ── Authorization ──

pub const ERR_NOT_MEMBER: &str = "unauthorized: not a member";
pub const ERR_NOT_DELEGATE: &str = "unauthorized: not a delegate of a shareholder";
pub const ERR_NOT_SHAREHOLDER: &str = "unauthorized: not a shareholder";
pub const ERR_NOT_PROPOSER: &str = "unauthorized: only the proposer can cancel";

// ── Proposal lifecycle ──

pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_ALREADY_SPONSORED: &str = "proposal has already been sponsored";
pub const ERR_PROPOSAL_CANCELLED: &str = "proposal has been cancelled";
pub const ERR_ALREADY_VOTED: &str = "member has already voted";
pub const ERR_INVALID_VOTE: &str = "vote must be yes or no";
pub const ERR_ALREADY_PROCESSED: &str = "proposal has already been processed";
pub const ERR_NOT_YET_VOTABLE: &str = "not yet votable: voting period has not started";
pub const ERR_VOTING_EXPIRED: &str = "voting period has expired";
pub const ERR_NOT_YET_PROCESSABLE: &str =
    "not yet processable: proposal is not ready to be processed";
pub const ERR_PREVIOUS_NOT_PROCESSED: &str =
    "not yet processable: previous proposal must be processed";
pub const ERR_TOO_MANY_SHARES: &str = "too many shares requested";
pub const ERR_APPLICANT_JAILED: &str = "proposal applicant must not be jailed";
pub const ERR_RESERVED_ADDRESS: &str = "applicant address cannot be reserved";
pub const ERR_WHITELIST_PENDING: &str = "already proposed to whitelist";
pub const ERR_KICK_PENDING: &str = "already proposed to kick";
pub const ERR_KICK_TARGET_INVALID: &str = "member must have at least one share or one loot";
pub const ERR_MEMBER_JAILED: &str = "member must not already be jailed";

// ── Exit ──

pub const ERR_RAGEQUIT_BLOCKED: &str =
    "cannot ragequit until highest index proposal member voted YES on is processed";
pub const ERR_NOT_JAILED: &str = "member must be in jail";
pub const ERR_NO_LOOT: &str = "member must have some loot";

// ── Delegate keys ──

pub const ERR_DELEGATE_ZERO: &str = "new delegate key cannot be zero";
pub const ERR_DELEGATE_IS_MEMBER: &str = "cannot overwrite existing members";
pub const ERR_DELEGATE_TAKEN: &str = "cannot overwrite existing delegate keys";

// ── Summoning ──

pub const ERR_INVALID_CONFIG: &str = "invalid configuration";
pub const ERR_DUPLICATE_TOKEN: &str = "duplicate approved token";
