use super::*;

/// Initialize a new contract instance with no tokens issued.
/// The account creating the instance becomes the administrator and the
/// payee of every purchase.
#[init(contract = "CappedNFT", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Construct the initial contract state.
    let state = State::new(state_builder, ctx.init_origin(), params.url);
    Ok(state)
}

/// Buy `quantity` tokens for the sender.
/// The new tokens get the next consecutive identifiers, so one call always
/// issues a contiguous range. The full attached amount is forwarded to the
/// payee; anything above the required price is kept, callers are expected
/// to attach the exact amount.
/// Logs a `Mint` and a `TokenMetadata` event for each issued token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The quantity is zero.
/// - The quantity is above the per-call mint ceiling.
/// - Fewer tokens than the quantity are left for issuing.
/// - The attached amount is below `UNIT_PRICE * quantity`.
/// - The payment cannot be forwarded to the payee.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "CappedNFT",
    name = "purchase",
    parameter = "PurchaseParams",
    mutable,
    enable_logger,
    payable
)]
fn purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: PurchaseParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    ensure!(
        params.quantity > 0,
        CustomContractError::InvalidQuantity.into()
    );

    let state = host.state_mut();

    // Validate the supply, then the payment. Nothing is committed until
    // both checks have passed.
    let start_id = state.reserve(params.quantity)?;

    let required = UNIT_PRICE * params.quantity as u64;
    ensure!(
        amount >= required,
        CustomContractError::InsufficientAmount.into()
    );

    state.issue_range(sender, start_id, params.quantity);
    let payee = state.admin;
    let base_url = state.base_url.clone();

    // Forward the full attached amount. A failing transfer rejects the call
    // and rolls back the issued range.
    host.invoke_transfer(&payee, amount)?;

    for token_id in (start_id..start_id + params.quantity).map(TokenIdU32) {
        // Event for minted NFT.
        logger.log(&Cis2Event::Mint(MintEvent {
            token_id,
            amount: ContractTokenAmount::from(1),
            owner: sender,
        }))?;

        // Metadata URL for the NFT.
        logger.log(&token_metadata_event(&base_url, token_id))?;
    }

    Ok(())
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Produces an action which sends a message to each contract which are the
/// receiver of a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the `from` address.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    contract = "CappedNFT",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        // Only the current owner may move a token, there is no operator
        // tier in this contract.
        ensure!(transfer.from == sender, ContractError::Unauthorized);

        let to_address = transfer.to.address();
        // Update the contract state.
        host.state_mut()
            .transfer(&transfer.token_id, transfer.amount, &transfer.from, &to_address)?;

        // Log transfer event.
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, send it a message.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Look up the owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID was never issued.
#[receive(
    contract = "CappedNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    host.state().owner_of(&token_id)
}

/// Number of tokens held by an address. Addresses that never received a
/// token hold zero.
#[receive(
    contract = "CappedNFT",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u64"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    // Parse the parameter.
    let owner: Address = ctx.parameter_cursor().get()?;

    Ok(host.state().balance_of(&owner))
}

/// Metadata location of a token, computed on demand from the base URL in
/// effect at query time.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID was never issued.
#[receive(
    contract = "CappedNFT",
    name = "tokenUrl",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_url<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    let state = host.state();
    ensure!(state.contains_token(&token_id), ContractError::InvalidTokenId);

    Ok(build_token_url(&state.base_url, token_id))
}

/// Repoint the metadata location prefix. Takes effect immediately for all
/// tokens, including already issued ones.
/// Logs a `SetBaseUrl` event with the previous and the new location.
///
/// It rejects if:
/// - The sender is not the administrator.
/// - Fails to parse parameter.
/// - Fails to log SetBaseUrl event.
#[receive(
    contract = "CappedNFT",
    name = "setBaseUrl",
    parameter = "SetBaseUrlParams",
    mutable,
    enable_logger
)]
fn set_base_url<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: SetBaseUrlParams = ctx.parameter_cursor().get()?;

    // Ensuring only the administrator can repoint the metadata location.
    ensure!(
        ctx.sender().matches_account(&host.state().admin),
        ContractError::Unauthorized
    );

    let from = host.state_mut().set_base_url(params.url.clone());

    // Event for the repointed metadata location.
    logger.log(&CustomEvent::SetBaseUrl(SetBaseUrlEvent {
        from,
        to: params.url,
    }))?;

    Ok(())
}

/// View the instance configuration and issue progress.
#[receive(contract = "CappedNFT", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();

    Ok(ViewState {
        admin: state.admin,
        base_url: state.base_url.clone(),
        total_issued: state.total_issued,
        remaining: MAX_SUPPLY - state.total_issued,
        unit_price: UNIT_PRICE,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1u8; 32]);
    const BUYER_1: AccountAddress = AccountAddress([16u8; 32]);
    const ADDRESS_BUYER_1: Address = Address::Account(BUYER_1);
    const BUYER_2: AccountAddress = AccountAddress([17u8; 32]);
    const ADDRESS_BUYER_2: Address = Address::Account(BUYER_2);

    const BASE_URL: &str = "https://nft.example.com/metadata/";
    const OTHER_BASE_URL: &str = "https://nft.example.org/metadata/";

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            url: String::from(BASE_URL),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_init_origin(ADMIN).set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Contract initialization failed");
        TestHost::new(state, state_builder)
    }

    /// Call `purchase` for `buyer` with the given quantity and attached
    /// amount.
    fn buy(
        host: &mut TestHost<State<TestStateApi>>,
        buyer: AccountAddress,
        quantity: u32,
        amount: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let params = PurchaseParams { quantity };
        let parameter_bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(buyer))
            .set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(amount);
        purchase(&ctx, host, amount, &mut logger)
    }

    /// Test initialization succeeds and the instance starts empty.
    #[concordium_test]
    fn test_init() {
        let host = new_host();
        let state = host.state();

        claim_eq!(state.total_issued, 0, "No token should be issued");
        claim_eq!(state.admin, ADMIN, "Deployer should be the administrator");
        claim_eq!(state.base_url, BASE_URL);
        claim_eq!(
            state.owners.iter().count(),
            0,
            "No owner should be recorded"
        );
    }

    /// Buying a single token for the exact price: the buyer owns token 1,
    /// the metadata URL resolves, the payee receives the payment and the
    /// events are logged.
    #[concordium_test]
    fn test_purchase_single() {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        let params = PurchaseParams { quantity: 1 };
        let parameter_bytes = to_bytes(&params);
        ctx.set_sender(ADDRESS_BUYER_1)
            .set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(UNIT_PRICE);
        let result = purchase(&ctx, &mut host, UNIT_PRICE, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(host.state().total_issued, 1);
        claim_eq!(
            host.state()
                .owner_of(&TokenIdU32(1))
                .expect_report("Token 1 is expected to exist"),
            ADDRESS_BUYER_1
        );
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 1);

        // The payment went to the payee.
        claim!(host.transfer_occurred(&ADMIN, UNIT_PRICE));

        // Check the logs.
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                owner: ADDRESS_BUYER_1,
            }))),
            "Expected an event for minting token 1"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&token_metadata_event(BASE_URL, TokenIdU32(1)))),
            "Expected a metadata event for token 1"
        );

        // The URL resolves through the entrypoint as well.
        let parameter_bytes = to_bytes(&TokenIdU32(1));
        ctx.set_parameter(&parameter_bytes);
        let url = token_url(&ctx, &host).expect_report("Token 1 is expected to resolve");
        claim_eq!(url.as_str(), "https://nft.example.com/metadata/1");
    }

    /// Buying several tokens in one call issues a contiguous range and
    /// forwards the combined price.
    #[concordium_test]
    fn test_purchase_batch() {
        let mut host = new_host();

        let result = buy(&mut host, BUYER_2, 4, UNIT_PRICE * 4);
        claim!(result.is_ok(), "Results in rejection");

        // All four identifiers are consecutive starting at 1 and belong to
        // the buyer.
        for id in 1..=4 {
            claim_eq!(
                host.state()
                    .owner_of(&TokenIdU32(id))
                    .expect_report("Token is expected to exist"),
                ADDRESS_BUYER_2
            );
        }
        claim_eq!(host.state().total_issued, 4);
        claim!(host.transfer_occurred(&ADMIN, UNIT_PRICE * 4));

        // Held count through the entrypoint.
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ADDRESS_BUYER_2);
        ctx.set_parameter(&parameter_bytes);
        let balance = balance_of(&ctx, &host).expect_report("Query should not fail");
        claim_eq!(balance, 4);
    }

    /// Ranges of successive purchases do not overlap.
    #[concordium_test]
    fn test_purchase_consecutive_ranges() {
        let mut host = new_host();

        claim_eq!(buy(&mut host, BUYER_1, 2, UNIT_PRICE * 2), Ok(()));
        claim_eq!(buy(&mut host, BUYER_2, 3, UNIT_PRICE * 3), Ok(()));

        for id in 1..=2 {
            claim_eq!(host.state().owner_of(&TokenIdU32(id)), Ok(ADDRESS_BUYER_1));
        }
        for id in 3..=5 {
            claim_eq!(host.state().owner_of(&TokenIdU32(id)), Ok(ADDRESS_BUYER_2));
        }
        claim_eq!(host.state().total_issued, 5);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 2);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_2), 3);
    }

    /// A purchase of zero tokens is rejected as an invalid request, not as
    /// a supply violation.
    #[concordium_test]
    fn test_purchase_zero_quantity() {
        let mut host = new_host();

        let err = buy(&mut host, BUYER_1, 0, Amount::zero())
            .expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::InvalidQuantity)
        );
        claim_eq!(host.state().total_issued, 0);
    }

    /// A quantity above the per-call ceiling is rejected with the ceiling
    /// flavor even on a fresh instance where the total cap would also be
    /// violated.
    #[concordium_test]
    fn test_purchase_above_mint_limit() {
        let mut host = new_host();

        let err = buy(&mut host, BUYER_1, 11, UNIT_PRICE * 11)
            .expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::MintLimitExceeded)
        );

        // Nothing was committed.
        claim_eq!(host.state().total_issued, 0);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 0);
        claim!(!host.transfer_occurred(&ADMIN, UNIT_PRICE * 11));
    }

    /// Once all tokens are issued, any further purchase is rejected with
    /// the exhaustion flavor even with sufficient payment attached.
    #[concordium_test]
    fn test_purchase_supply_exhausted() {
        let mut host = new_host();

        claim_eq!(buy(&mut host, BUYER_1, 2, UNIT_PRICE * 2), Ok(()));
        claim_eq!(buy(&mut host, BUYER_1, 7, UNIT_PRICE * 7), Ok(()));
        claim_eq!(buy(&mut host, BUYER_2, 1, UNIT_PRICE), Ok(()));
        claim_eq!(host.state().total_issued, MAX_SUPPLY);

        let err = buy(&mut host, BUYER_2, 1, UNIT_PRICE).expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::SupplyExhausted)
        );
        claim_eq!(host.state().total_issued, MAX_SUPPLY);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_2), 1);
    }

    /// A partial batch never happens: a quantity that no longer fits the
    /// remaining supply is rejected outright.
    #[concordium_test]
    fn test_purchase_no_partial_batch() {
        let mut host = new_host();

        claim_eq!(buy(&mut host, BUYER_1, 8, UNIT_PRICE * 8), Ok(()));

        let err = buy(&mut host, BUYER_2, 3, UNIT_PRICE * 3).expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::SupplyExhausted)
        );
        claim_eq!(host.state().total_issued, 8);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_2), 0);

        // The remaining two can still be bought.
        claim_eq!(buy(&mut host, BUYER_2, 2, UNIT_PRICE * 2), Ok(()));
        claim_eq!(host.state().total_issued, MAX_SUPPLY);
    }

    /// An attached amount below the required price rejects the purchase
    /// without taking the payment or issuing anything.
    #[concordium_test]
    fn test_purchase_insufficient_amount() {
        let mut host = new_host();

        let attached = Amount::from_micro_ccd(20_000);
        let err = buy(&mut host, BUYER_1, 1, attached).expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::InsufficientAmount)
        );

        claim_eq!(host.state().total_issued, 0);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 0);
        claim!(!host.transfer_occurred(&ADMIN, attached));
    }

    /// Overpayment is not refunded: the payee receives the full attached
    /// amount.
    #[concordium_test]
    fn test_purchase_keeps_overpayment() {
        let mut host = new_host();

        let attached = Amount::from_micro_ccd(70_000);
        claim_eq!(buy(&mut host, BUYER_1, 1, attached), Ok(()));

        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 1);
        claim!(host.transfer_occurred(&ADMIN, attached));
    }

    /// Test transfer succeeds, when `from` is the sender and owns the
    /// token.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 1, UNIT_PRICE), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_BUYER_1);

        let transfer_data = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_BUYER_1,
            to: Receiver::from_account(BUYER_2),
            data: AdditionalData::empty(),
        };
        let parameter = TransferParams::from(vec![transfer_data]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let result = transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(host.state().owner_of(&TokenIdU32(1)), Ok(ADDRESS_BUYER_2));
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_1), 0);
        claim_eq!(host.state().balance_of(&ADDRESS_BUYER_2), 1);

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                from: ADDRESS_BUYER_1,
                to: ADDRESS_BUYER_2,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer fails, when the sender is not the `from` address.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 1, UNIT_PRICE), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_BUYER_2);

        let transfer_data = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_BUYER_1,
            to: Receiver::from_account(BUYER_2),
            data: AdditionalData::empty(),
        };
        let parameter = TransferParams::from(vec![transfer_data]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let result = transfer(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(host.state().owner_of(&TokenIdU32(1)), Ok(ADDRESS_BUYER_1));
    }

    /// Test transfer fails, when `from` does not own the token.
    #[concordium_test]
    fn test_transfer_wrong_owner() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 1, UNIT_PRICE), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_BUYER_2);

        let transfer_data = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_BUYER_2,
            to: Receiver::from_account(BUYER_2),
            data: AdditionalData::empty(),
        };
        let parameter = TransferParams::from(vec![transfer_data]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let result = transfer(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InsufficientFunds);
    }

    /// Queries for identifiers outside `[1, total_issued]` fail.
    #[concordium_test]
    fn test_owner_of_unknown_token() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 1, UNIT_PRICE), Ok(()));

        for &unknown in &[0u32, 2, 11] {
            let mut ctx = TestReceiveContext::empty();
            let parameter_bytes = to_bytes(&TokenIdU32(unknown));
            ctx.set_parameter(&parameter_bytes);
            let result = owner_of(&ctx, &host);
            claim_eq!(result, Err(ContractError::InvalidTokenId));
        }
    }

    /// Held count of an address that never bought anything is zero, not an
    /// error.
    #[concordium_test]
    fn test_balance_of_unknown_address() {
        let host = new_host();

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ADDRESS_BUYER_1);
        ctx.set_parameter(&parameter_bytes);
        let balance = balance_of(&ctx, &host).expect_report("Query should not fail");
        claim_eq!(balance, 0);
    }

    /// The metadata URL reflects the base URL in effect at query time, not
    /// at mint time.
    #[concordium_test]
    fn test_token_url_tracks_base_url() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 1, UNIT_PRICE), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let token_bytes = to_bytes(&TokenIdU32(1));
        ctx.set_parameter(&token_bytes);
        let url = token_url(&ctx, &host).expect_report("Token 1 is expected to resolve");
        claim_eq!(url.as_str(), "https://nft.example.com/metadata/1");

        // Repoint the base URL as the administrator.
        let mut ctx = TestReceiveContext::empty();
        let params = SetBaseUrlParams {
            url: String::from(OTHER_BASE_URL),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(ADMIN))
            .set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let result = set_base_url(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::SetBaseUrl(SetBaseUrlEvent {
                    from: String::from(BASE_URL),
                    to: String::from(OTHER_BASE_URL),
                }))),
            "Expected an event for the repointed metadata location"
        );

        // The already minted token resolves under the new location.
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&token_bytes);
        let url = token_url(&ctx, &host).expect_report("Token 1 is expected to resolve");
        claim_eq!(url.as_str(), "https://nft.example.org/metadata/1");
    }

    /// The URL of a token that was never issued does not resolve.
    #[concordium_test]
    fn test_token_url_unknown_token() {
        let host = new_host();

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&TokenIdU32(1));
        ctx.set_parameter(&parameter_bytes);
        let result = token_url(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    /// Only the administrator can repoint the metadata location.
    #[concordium_test]
    fn test_set_base_url_unauthorized() {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        let params = SetBaseUrlParams {
            url: String::from(OTHER_BASE_URL),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_sender(ADDRESS_BUYER_1)
            .set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let result = set_base_url(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(host.state().base_url, BASE_URL);
    }

    /// The view function reports configuration and issue progress.
    #[concordium_test]
    fn test_view() {
        let mut host = new_host();
        claim_eq!(buy(&mut host, BUYER_1, 3, UNIT_PRICE * 3), Ok(()));

        let ctx = TestReceiveContext::empty();
        let view_state = view(&ctx, &host).expect_report("Query should not fail");

        claim_eq!(view_state.admin, ADMIN);
        claim_eq!(view_state.base_url, BASE_URL);
        claim_eq!(view_state.total_issued, 3);
        claim_eq!(view_state.remaining, 7);
        claim_eq!(view_state.unit_price, UNIT_PRICE);
    }
}
