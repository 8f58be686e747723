use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates the initial state with no tokens issued.
    pub fn new(state_builder: &mut StateBuilder<S>, admin: AccountAddress, base_url: String) -> Self {
        State {
            admin,
            base_url,
            total_issued: 0,
            owners: state_builder.new_map(),
            balances: state_builder.new_map(),
        }
    }

    /// Validate that `quantity` more tokens may be issued and return the
    /// first identifier of the contiguous range. Validates only; the counter
    /// advances in [`State::issue_range`] once the payment has been checked.
    pub fn reserve(&self, quantity: u32) -> ContractResult<u32> {
        ensure!(
            quantity <= MAX_MINT,
            CustomContractError::MintLimitExceeded.into()
        );
        ensure!(
            self.total_issued + quantity <= MAX_SUPPLY,
            CustomContractError::SupplyExhausted.into()
        );
        Ok(self.total_issued + 1)
    }

    /// Record `count` consecutive tokens starting at `start_id` as owned by
    /// `owner` and advance the issue counter.
    pub fn issue_range(&mut self, owner: Address, start_id: u32, count: u32) {
        for id in start_id..start_id + count {
            self.owners.insert(TokenIdU32(id), owner);
        }
        let mut balance = self.balances.entry(owner).or_insert(0);
        *balance += count as u64;
        self.total_issued += count;
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.owners.get(token_id).is_some()
    }

    /// Get the current owner of a given token ID.
    /// Results in an error if the token ID was never issued.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.owners
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Number of tokens held by `owner`. Zero for any address that never
    /// received a token.
    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.balances.get(owner).map_or(0, |count| *count)
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the `from` address is not the current owner.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        // A zero transfer does not modify the state.
        if amount == 0.into() {
            return Ok(());
        }

        // Every token is unique.
        ensure!(amount == 1.into(), ContractError::InsufficientFunds);
        ensure!(
            self.owner_of(token_id)? == *from,
            ContractError::InsufficientFunds
        );

        self.owners.insert(*token_id, *to);
        {
            let mut from_balance = self
                .balances
                .entry(*from)
                .occupied_or(ContractError::InsufficientFunds)?;
            *from_balance -= 1;
        }
        {
            let mut to_balance = self.balances.entry(*to).or_insert(0);
            *to_balance += 1;
        }

        Ok(())
    }

    /// Replace the metadata location prefix, returning the previous one.
    pub fn set_base_url(&mut self, url: String) -> String {
        core::mem::replace(&mut self.base_url, url)
    }
}
