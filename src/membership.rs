multiversx_sc::imports!();

use crate::errors::{
    ERR_DELEGATE_IS_MEMBER, ERR_DELEGATE_TAKEN, ERR_DELEGATE_ZERO, ERR_NOT_DELEGATE,
    ERR_NOT_MEMBER, ERR_NOT_SHAREHOLDER,
};
use crate::types::Member;

// ============================================================
// Membership registry
//
// Members are keyed by their own address; each one acts through
// a delegate key, which is indexed back to the member.
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: updateDelegateKey
    // ========================================================

    #[endpoint(updateDelegateKey)]
    fn update_delegate_key(&self, new_delegate_key: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let mut member = self.require_shareholder(&caller);
        require!(!new_delegate_key.is_zero(), ERR_DELEGATE_ZERO);

        // a member may always reset the key to their own address
        if new_delegate_key != caller {
            require!(!self.is_member(&new_delegate_key), ERR_DELEGATE_IS_MEMBER);
            let taken_by = self.member_address_by_delegate_key(&new_delegate_key);
            require!(
                taken_by.is_empty() || !self.is_member(&taken_by.get()),
                ERR_DELEGATE_TAKEN
            );
        }

        self.member_address_by_delegate_key(&member.delegate_key).clear();
        self.member_address_by_delegate_key(&new_delegate_key)
            .set(&caller);
        member.delegate_key = new_delegate_key.clone();
        self.members(&caller).set(&member);

        self.update_delegate_key_event(&caller, &new_delegate_key);
    }

    // ========================================================
    // INTERNAL: membership gates
    // ========================================================

    fn is_member(&self, address: &ManagedAddress) -> bool {
        let mapper = self.members(address);
        !mapper.is_empty() && mapper.get().exists
    }

    /// Caller holds shares or loot in their own name.
    fn require_member(&self, address: &ManagedAddress) -> Member<Self::Api> {
        require!(self.is_member(address), ERR_NOT_MEMBER);
        let member = self.members(address).get();
        require!(member.shares > 0u64 || member.loot > 0u64, ERR_NOT_MEMBER);
        member
    }

    fn require_shareholder(&self, address: &ManagedAddress) -> Member<Self::Api> {
        require!(self.is_member(address), ERR_NOT_SHAREHOLDER);
        let member = self.members(address).get();
        require!(member.shares > 0u64, ERR_NOT_SHAREHOLDER);
        member
    }

    /// Resolves `delegate` to the member it acts for; the member must hold shares.
    fn require_delegate(&self, delegate: &ManagedAddress) -> ManagedAddress {
        let mapper = self.member_address_by_delegate_key(delegate);
        require!(!mapper.is_empty(), ERR_NOT_DELEGATE);

        let member_address = mapper.get();
        require!(self.is_member(&member_address), ERR_NOT_DELEGATE);
        require!(
            self.members(&member_address).get().shares > 0u64,
            ERR_NOT_DELEGATE
        );
        member_address
    }

    fn is_jailed(&self, address: &ManagedAddress) -> bool {
        self.is_member(address) && self.members(address).get().jailed != 0
    }

    /// Adds shares and loot to `applicant`, creating the member record if needed.
    fn grant_membership(&self, applicant: &ManagedAddress, shares: &BigUint, loot: &BigUint) {
        if self.is_member(applicant) {
            self.members(applicant).update(|member| {
                member.shares += shares;
                member.loot += loot;
            });
        } else {
            // the applicant's address may already be someone's delegate key
            let delegate_mapper = self.member_address_by_delegate_key(applicant);
            if !delegate_mapper.is_empty() {
                let holder = delegate_mapper.get();
                if self.is_member(&holder) {
                    self.members(&holder)
                        .update(|member| member.delegate_key = holder.clone());
                    self.member_address_by_delegate_key(&holder).set(&holder);
                }
            }

            let member = Member {
                delegate_key: applicant.clone(),
                shares: shares.clone(),
                loot: loot.clone(),
                exists: true,
                highest_index_yes_vote: 0,
                jailed: 0,
            };
            self.members(applicant).set(&member);
            self.member_address_by_delegate_key(applicant).set(applicant);
        }

        self.total_shares().update(|total| *total += shares);
        self.total_loot().update(|total| *total += loot);
    }

    /// Jails `address` and converts all of its shares to loot.
    fn jail_member(&self, address: &ManagedAddress, queue_index: u64) {
        let mut member = self.members(address).get();
        let shares = core::mem::replace(&mut member.shares, BigUint::zero());
        member.loot += &shares;
        member.jailed = queue_index;
        self.members(address).set(&member);

        self.total_shares().update(|total| *total -= &shares);
        self.total_loot().update(|total| *total += &shares);
    }

    fn total_weight(&self) -> BigUint {
        self.total_shares().get() + self.total_loot().get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMember)]
    fn get_member(&self, address: &ManagedAddress) -> OptionalValue<Member<Self::Api>> {
        if self.is_member(address) {
            OptionalValue::Some(self.members(address).get())
        } else {
            OptionalValue::None
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[view(getMemberAddressByDelegateKey)]
    #[storage_mapper("memberAddressByDelegateKey")]
    fn member_address_by_delegate_key(
        &self,
        delegate: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalLoot)]
    #[storage_mapper("totalLoot")]
    fn total_loot(&self) -> SingleValueMapper<BigUint>;
}
