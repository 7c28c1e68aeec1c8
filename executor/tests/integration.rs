//! Integration tests for the swap execution engine using cw-multi-test.
//!
//! A mock venue stands in for liquidity pools: it pulls its declared input
//! under the allowance the engine granted and pays out a fixed output, or
//! fails on demand. These tests verify resident and pulled funding, the
//! reserved-balance sweep, the min-out floor, and all-or-nothing execution.

use cosmwasm_std::{coins, to_json_binary, Addr, Binary, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::{AssetInfo, SwapStep};
use executor::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

// ============================================================================
// Mock Venue
// ============================================================================

mod mock_venue {
    use common::AssetInfo;
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
        StdResult, Uint128, WasmMsg,
    };
    use cw20::Cw20ExecuteMsg;

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Pull `input_amount` of `input_token` from the caller under the
        /// allowance it granted, then pay `output_amount` of `output_token`
        /// back to the caller.
        Swap {
            input_token: String,
            input_amount: Uint128,
            output_token: String,
            output_amount: Uint128,
        },
        /// Native input rides in as attached funds; pay out a cw20.
        SwapNativeIn {
            output_token: String,
            output_amount: Uint128,
        },
        /// Always fails.
        Fail {},
        /// Calls back into the engine mid-step with a fresh execution.
        ReenterExecute { engine: String, token: String },
    }

    pub fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Empty,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        _deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, StdError> {
        match msg {
            ExecuteMsg::Swap {
                input_token,
                input_amount,
                output_token,
                output_amount,
            } => {
                let pull = WasmMsg::Execute {
                    contract_addr: input_token,
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: input_amount,
                    })?,
                    funds: vec![],
                };
                let pay = WasmMsg::Execute {
                    contract_addr: output_token,
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: info.sender.to_string(),
                        amount: output_amount,
                    })?,
                    funds: vec![],
                };
                Ok(Response::new().add_message(pull).add_message(pay))
            }
            ExecuteMsg::SwapNativeIn {
                output_token,
                output_amount,
            } => {
                let pay = WasmMsg::Execute {
                    contract_addr: output_token,
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: info.sender.to_string(),
                        amount: output_amount,
                    })?,
                    funds: vec![],
                };
                Ok(Response::new().add_message(pay))
            }
            ExecuteMsg::Fail {} => Err(StdError::generic_err("venue failure")),
            ExecuteMsg::ReenterExecute { engine, token } => {
                let reenter = WasmMsg::Execute {
                    contract_addr: engine,
                    msg: to_json_binary(&executor::msg::ExecuteMsg::Execute {
                        transfer_id: Binary::from([2u8; 32].to_vec()),
                        steps: vec![],
                        input_asset: AssetInfo::Cw20 {
                            contract_addr: Addr::unchecked(token),
                        },
                        input_amount: Uint128::new(1),
                        receiver: env.contract.address.to_string(),
                        min_amount_out: Uint128::zero(),
                        pull_input: false,
                    })?,
                    funds: vec![],
                };
                Ok(Response::new().add_message(reenter))
            }
        }
    }

    pub fn query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
        to_json_binary(&Empty {})
    }
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_executor() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        executor::contract::execute,
        executor::contract::instantiate,
        executor::contract::query,
    );
    Box::new(contract)
}

fn contract_custody_proxy() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        custody_proxy::contract::execute,
        custody_proxy::contract::instantiate,
        custody_proxy::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_venue() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_venue::execute,
        mock_venue::instantiate,
        mock_venue::query,
    );
    Box::new(contract)
}

struct Setup {
    app: App,
    engine: Addr,
    proxy: Addr,
    venue: Addr,
    token_a: Addr,
    token_b: Addr,
    token_c: Addr,
    owner: Addr,
    user: Addr,
    receiver: Addr,
}

/// Venue starts with 1_000_000 of tokens B and C; the user starts with
/// 1_000_000 of token A and uluna.
fn setup() -> Setup {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let receiver = Addr::unchecked("terra1recipient");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(1_000_000, "uluna"))
            .unwrap();
    });

    let proxy_code = app.store_code(contract_custody_proxy());
    let proxy = app
        .instantiate_contract(
            proxy_code,
            owner.clone(),
            &custody_proxy::msg::InstantiateMsg {
                owner: owner.to_string(),
                authorized: vec![],
            },
            &[],
            "custody-proxy",
            Some(owner.to_string()),
        )
        .unwrap();

    let engine_code = app.store_code(contract_executor());
    let engine = app
        .instantiate_contract(
            engine_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                custody_proxy: proxy.to_string(),
            },
            &[],
            "executor",
            Some(owner.to_string()),
        )
        .unwrap();

    // Allow-list the engine on the proxy for pull-based funding.
    app.execute_contract(
        owner.clone(),
        proxy.clone(),
        &custody_proxy::msg::ExecuteMsg::Authorize {
            caller: engine.to_string(),
            enabled: true,
        },
        &[],
    )
    .unwrap();

    let venue_code = app.store_code(contract_venue());
    let venue = app
        .instantiate_contract(
            venue_code,
            owner.clone(),
            &cosmwasm_std::Empty {},
            &[],
            "venue",
            None,
        )
        .unwrap();

    let cw20_code = app.store_code(contract_cw20());
    let token_a = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "AAA",
        vec![(user.clone(), 1_000_000)],
    );
    let token_b = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "BBB",
        vec![(venue.clone(), 1_000_000), (owner.clone(), 1_000_000)],
    );
    let token_c = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "CCC",
        vec![(venue.clone(), 1_000_000)],
    );

    Setup {
        app,
        engine,
        proxy,
        venue,
        token_a,
        token_b,
        token_c,
        owner,
        user,
        receiver,
    }
}

fn instantiate_token(
    app: &mut App,
    code_id: u64,
    owner: &Addr,
    symbol: &str,
    balances: Vec<(Addr, u128)>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("Token {symbol}"),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: balances
                .into_iter()
                .map(|(address, amount)| Cw20Coin {
                    address: address.to_string(),
                    amount: Uint128::new(amount),
                })
                .collect(),
            mint: None,
            marketing: None,
        },
        &[],
        symbol.to_lowercase(),
        None,
    )
    .unwrap()
}

fn cw20_asset(token: &Addr) -> AssetInfo {
    AssetInfo::Cw20 {
        contract_addr: token.clone(),
    }
}

fn cw20_balance(app: &App, token: &Addr, address: &Addr) -> Uint128 {
    let resp: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

fn transfer_cw20(app: &mut App, token: &Addr, from: &Addr, to: &Addr, amount: u128) {
    app.execute_contract(
        from.clone(),
        token.clone(),
        &Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
}

fn test_transfer_id() -> Binary {
    Binary::from([1u8; 32].to_vec())
}

/// Build a step that trades `input_amount` of `input` for `output_amount`
/// of `output` on the mock venue.
fn swap_step(
    venue: &Addr,
    input: &Addr,
    input_amount: u128,
    output: &Addr,
    output_amount: u128,
) -> SwapStep {
    SwapStep {
        venue: venue.to_string(),
        approval_target: venue.to_string(),
        input_asset: cw20_asset(input),
        output_asset: cw20_asset(output),
        input_amount: Uint128::new(input_amount),
        call_data: to_json_binary(&mock_venue::ExecuteMsg::Swap {
            input_token: input.to_string(),
            input_amount: Uint128::new(input_amount),
            output_token: output.to_string(),
            output_amount: Uint128::new(output_amount),
        })
        .unwrap(),
        requires_pull: false,
    }
}

fn has_event(res: &AppResponse, ty: &str) -> bool {
    res.events.iter().any(|e| e.ty == format!("wasm-{ty}"))
}

// ============================================================================
// Instantiation & Validation
// ============================================================================

#[test]
fn test_instantiate_and_config() {
    let s = setup();

    let config: ConfigResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.engine, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.owner, s.owner);
    assert_eq!(config.custody_proxy, s.proxy);
}

#[test]
fn test_invalid_transfer_id_rejected() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: Binary::from(vec![1, 2, 3]),
            steps: vec![],
            input_asset: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &coins(100, "uluna"),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("expected 32 bytes, got 3"));
}

#[test]
fn test_zero_amount_rejected() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![],
            input_asset: cw20_asset(&s.token_a),
            input_amount: Uint128::zero(),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("must be greater than zero"));
}

#[test]
fn test_step_zero_amount_rejected() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    let mut step = swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250);
    step.input_amount = Uint128::zero();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![step],
            input_asset: cw20_asset(&s.token_a),
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid step amount at index 0"));
}

// ============================================================================
// Zero-Step Transfers
// ============================================================================

#[test]
fn test_zero_step_native_transfer() {
    let mut s = setup();

    let res = s
        .app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![],
                input_asset: AssetInfo::Native {
                    denom: "uluna".to_string(),
                },
                input_amount: Uint128::new(5_000),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::new(5_000),
                pull_input: false,
            },
            &coins(5_000, "uluna"),
        )
        .unwrap();

    assert!(has_event(&res, "transfer_completed"));
    let balance = s.app.wrap().query_balance(&s.receiver, "uluna").unwrap();
    assert_eq!(balance.amount, Uint128::new(5_000));
}

#[test]
fn test_native_input_requires_attached_funds() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![],
            input_asset: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            input_amount: Uint128::new(5_000),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient native funds"));
}

#[test]
fn test_zero_step_min_out_enforced() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![],
            input_asset: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::new(200),
            pull_input: false,
        },
        &coins(100, "uluna"),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient output"));
}

// ============================================================================
// Swap Sequences
// ============================================================================

#[test]
fn test_single_step_cw20_swap() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    let res = s
        .app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250)],
                input_asset: cw20_asset(&s.token_a),
                input_amount: Uint128::new(100),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::new(200),
                pull_input: false,
            },
            &[],
        )
        .unwrap();

    assert!(has_event(&res, "asset_swapped"));
    assert!(has_event(&res, "transfer_completed"));

    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::new(250)
    );
    // The engine ends flat.
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.engine),
        Uint128::zero()
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.engine),
        Uint128::zero()
    );
}

#[test]
fn test_reserved_balances_untouched() {
    let mut s = setup();

    // Pre-existing engine balances that this execution must not sweep.
    transfer_cw20(&mut s.app, &s.token_b, &s.owner, &s.engine, 10);
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 7);

    // Resident funding for the execution itself.
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    s.app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250)],
                input_asset: cw20_asset(&s.token_a),
                input_amount: Uint128::new(100),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::zero(),
                pull_input: false,
            },
            &[],
        )
        .unwrap();

    // Exactly the produced output was delivered; the pre-existing 10 B and
    // 7 A stay with the engine.
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::new(250)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.engine),
        Uint128::new(10)
    );
    assert_eq!(cw20_balance(&s.app, &s.token_a, &s.engine), Uint128::new(7));
}

#[test]
fn test_multi_step_sweeps_intermediate_surplus() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    // A -> B yields 120, but the second step only consumes 100 B; the
    // leftover 20 B is surplus and goes to the receiver alongside the C.
    let steps = vec![
        swap_step(&s.venue, &s.token_a, 100, &s.token_b, 120),
        swap_step(&s.venue, &s.token_b, 100, &s.token_c, 80),
    ];

    s.app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps,
                input_asset: cw20_asset(&s.token_a),
                input_amount: Uint128::new(100),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::new(80),
                pull_input: false,
            },
            &[],
        )
        .unwrap();

    assert_eq!(
        cw20_balance(&s.app, &s.token_c, &s.receiver),
        Uint128::new(80)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::new(20)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.engine),
        Uint128::zero()
    );
}

#[test]
fn test_min_out_failure_reverts_whole_sequence() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250)],
            input_asset: cw20_asset(&s.token_a),
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::new(300),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient output"));

    // Everything rolled back: funding stays with the engine, nothing paid.
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.engine),
        Uint128::new(100)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::zero()
    );
}

#[test]
fn test_failing_venue_reverts_whole_sequence() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    let mut step = swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250);
    step.call_data = to_json_binary(&mock_venue::ExecuteMsg::Fail {}).unwrap();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![step],
            input_asset: cw20_asset(&s.token_a),
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("venue failure"));

    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.engine),
        Uint128::new(100)
    );
}

#[test]
fn test_reentrant_venue_rejected() {
    let mut s = setup();
    transfer_cw20(&mut s.app, &s.token_a, &s.user, &s.engine, 100);

    // The venue tries to start a second execution while the first one's
    // finalize plan is still pending.
    let mut step = swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250);
    step.call_data = to_json_binary(&mock_venue::ExecuteMsg::ReenterExecute {
        engine: s.engine.to_string(),
        token: s.token_a.to_string(),
    })
    .unwrap();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![step],
            input_asset: cw20_asset(&s.token_a),
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: false,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Execution already in progress"));

    // The whole sequence rolled back with it.
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.engine),
        Uint128::new(100)
    );
}

#[test]
fn test_native_input_swap() {
    let mut s = setup();

    let step = SwapStep {
        venue: s.venue.to_string(),
        approval_target: s.venue.to_string(),
        input_asset: AssetInfo::Native {
            denom: "uluna".to_string(),
        },
        output_asset: cw20_asset(&s.token_b),
        input_amount: Uint128::new(1_000),
        call_data: to_json_binary(&mock_venue::ExecuteMsg::SwapNativeIn {
            output_token: s.token_b.to_string(),
            output_amount: Uint128::new(90),
        })
        .unwrap(),
        requires_pull: false,
    };

    s.app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![step],
                input_asset: AssetInfo::Native {
                    denom: "uluna".to_string(),
                },
                input_amount: Uint128::new(1_000),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::new(90),
                pull_input: false,
            },
            &coins(1_000, "uluna"),
        )
        .unwrap();

    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::new(90)
    );
    let venue_luna = s.app.wrap().query_balance(&s.venue, "uluna").unwrap();
    assert_eq!(venue_luna.amount, Uint128::new(1_000));
}

// ============================================================================
// Pull-Based Funding
// ============================================================================

#[test]
fn test_pull_input_zero_step_goes_direct() {
    let mut s = setup();

    s.app
        .execute_contract(
            s.user.clone(),
            s.token_a.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: s.proxy.to_string(),
                amount: Uint128::new(400),
                expires: None,
            },
            &[],
        )
        .unwrap();

    s.app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![],
                input_asset: cw20_asset(&s.token_a),
                input_amount: Uint128::new(400),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::zero(),
                pull_input: true,
            },
            &[],
        )
        .unwrap();

    // Caller -> receiver directly; the engine never held the tokens.
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.receiver),
        Uint128::new(400)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.engine),
        Uint128::zero()
    );
}

#[test]
fn test_pull_input_funds_swap() {
    let mut s = setup();

    s.app
        .execute_contract(
            s.user.clone(),
            s.token_a.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: s.proxy.to_string(),
                amount: Uint128::new(100),
                expires: None,
            },
            &[],
        )
        .unwrap();

    s.app
        .execute_contract(
            s.user.clone(),
            s.engine.clone(),
            &ExecuteMsg::Execute {
                transfer_id: test_transfer_id(),
                steps: vec![swap_step(&s.venue, &s.token_a, 100, &s.token_b, 250)],
                input_asset: cw20_asset(&s.token_a),
                input_amount: Uint128::new(100),
                receiver: s.receiver.to_string(),
                min_amount_out: Uint128::new(250),
                pull_input: true,
            },
            &[],
        )
        .unwrap();

    assert_eq!(
        cw20_balance(&s.app, &s.token_b, &s.receiver),
        Uint128::new(250)
    );
    assert_eq!(
        cw20_balance(&s.app, &s.token_a, &s.user),
        Uint128::new(999_900)
    );
}

#[test]
fn test_pull_native_rejected() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::Execute {
            transfer_id: test_transfer_id(),
            steps: vec![],
            input_asset: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            input_amount: Uint128::new(100),
            receiver: s.receiver.to_string(),
            min_amount_out: Uint128::zero(),
            pull_input: true,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("cannot be pulled"));
}

// ============================================================================
// Finalize & Admin
// ============================================================================

#[test]
fn test_finalize_rejects_external_caller() {
    let mut s = setup();

    let res = s
        .app
        .execute_contract(s.user.clone(), s.engine.clone(), &ExecuteMsg::Finalize {}, &[]);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"));
}

#[test]
fn test_set_custody_proxy_owner_only() {
    let mut s = setup();

    let res = s.app.execute_contract(
        s.user.clone(),
        s.engine.clone(),
        &ExecuteMsg::SetCustodyProxy {
            custody_proxy: "terra1otherproxy".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    s.app
        .execute_contract(
            s.owner.clone(),
            s.engine.clone(),
            &ExecuteMsg::SetCustodyProxy {
                custody_proxy: "terra1otherproxy".to_string(),
            },
            &[],
        )
        .unwrap();

    let config: ConfigResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.engine, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.custody_proxy, Addr::unchecked("terra1otherproxy"));
}
