use super::*;

/// Setup parameters for a new contract instance.
#[derive(Serialize, SchemaType)]
pub struct InitParams {
    /// Metadata location prefix for every token. Expected to end with its
    /// own separator, the decimal token ID is appended verbatim.
    pub url: String,
}

/// Parameter for the `purchase` function.
#[derive(Serialize, SchemaType)]
pub struct PurchaseParams {
    /// Number of tokens to issue to the sender.
    pub quantity: u32,
}

/// Parameter for the `setBaseUrl` function.
#[derive(Serialize, SchemaType)]
pub struct SetBaseUrlParams {
    /// New metadata location prefix.
    pub url: String,
}

/// Snapshot of the instance returned by the `view` function.
#[derive(Serialize, SchemaType)]
pub struct ViewState {
    /// The administrator and payee.
    pub admin: AccountAddress,
    /// Current metadata location prefix.
    pub base_url: String,
    /// Number of tokens issued so far.
    pub total_issued: u32,
    /// Number of tokens still available for purchase.
    pub remaining: u32,
    /// Price of a single token.
    pub unit_price: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that created the instance. Receives every purchase payment
    /// and is the only account allowed to repoint the metadata location.
    pub admin: AccountAddress,
    /// Metadata location prefix for every token.
    pub base_url: String,
    /// Number of tokens issued so far. Token IDs `1..=total_issued` exist,
    /// no other ID does.
    pub total_issued: u32,
    /// Owner of every issued token.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// Number of tokens held by each address.
    pub balances: StateMap<Address, u64, S>,
}
