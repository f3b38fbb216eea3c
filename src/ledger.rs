multiversx_sc::imports!();

use crate::errors::ERR_INSUFFICIENT_BALANCE;

/// Pseudo-account holding the collectively owned treasury.
pub const GUILD: [u8; 32] = pseudo_account(0xdead);

/// Pseudo-account holding tribute and deposits of unresolved proposals.
pub const ESCROW: [u8; 32] = pseudo_account(0xbeef);

const fn pseudo_account(tag: u16) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[30] = (tag >> 8) as u8;
    bytes[31] = tag as u8;
    bytes
}

// ============================================================
// Internal ledger
//
// (account, token) -> balance. GUILD and ESCROW are ordinary keys.
// The tracked total of a token always equals the sum of its
// balances across all accounts.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule {
    fn guild(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&GUILD)
    }

    fn escrow(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&ESCROW)
    }

    fn is_reserved_address(&self, address: &ManagedAddress) -> bool {
        address.is_zero() || *address == self.guild() || *address == self.escrow()
    }

    fn credit(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if *amount == 0u64 {
            return;
        }

        let mapper = self.user_token_balances(account, token);
        if *account == self.guild() && mapper.get() == 0u64 {
            self.guild_bank_tokens().insert(token.clone());
        }
        mapper.update(|balance| *balance += amount);
    }

    fn debit(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if *amount == 0u64 {
            return;
        }

        let mapper = self.user_token_balances(account, token);
        let balance = mapper.get();
        require!(*amount <= balance, ERR_INSUFFICIENT_BALANCE);

        let remaining = balance - amount;
        if remaining == 0u64 && *account == self.guild() {
            self.guild_bank_tokens().swap_remove(token);
        }
        mapper.set(&remaining);
    }

    fn internal_transfer(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.debit(from, token, amount);
        self.credit(to, token, amount);
    }

    /// Value arrived on-chain and is now owned by `account`.
    fn record_inflow(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.credit(account, token, amount);
        self.total_token_balance(token).update(|total| *total += amount);
    }

    /// Value leaves `account` and is about to be sent off-chain.
    fn record_outflow(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.debit(account, token, amount);
        self.total_token_balance(token).update(|total| *total -= amount);
    }

    /// On-chain balance of `token` not yet reflected in any ledger entry.
    fn unaccounted_balance(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let held = self.blockchain().get_sc_balance(token, 0);
        let tracked = self.total_token_balance(token).get();
        if held > tracked {
            held - tracked
        } else {
            BigUint::zero()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalGuildBankTokens)]
    fn get_total_guild_bank_tokens(&self) -> usize {
        self.guild_bank_tokens().len()
    }

    #[view(getGuildBankTokens)]
    fn get_guild_bank_tokens(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for token in self.guild_bank_tokens().iter() {
            result.push(token);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getUserTokenBalance)]
    #[storage_mapper("userTokenBalances")]
    fn user_token_balances(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getTotalTokenBalance)]
    #[storage_mapper("totalTokenBalance")]
    fn total_token_balance(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Tokens with a non-zero GUILD balance; its length is bounded by G
    #[storage_mapper("guildBankTokens")]
    fn guild_bank_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;
}
