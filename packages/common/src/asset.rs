//! Asset abstraction over native coins and CW20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifies a fungible asset: a native coin denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    /// Native coin (the chain's bank module)
    Native {
        /// Coin denomination, e.g. "uluna"
        denom: String,
    },
    /// CW20 token contract
    Cw20 {
        /// Token contract address
        contract_addr: Addr,
    },
}

impl AssetInfo {
    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Stable string key, used for deduplication and event attributes.
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native { denom } => format!("native:{denom}"),
            AssetInfo::Cw20 { contract_addr } => format!("cw20:{contract_addr}"),
        }
    }

    /// Query `address`'s balance of this asset.
    pub fn query_balance(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => {
                Ok(querier.query_balance(address.to_string(), denom)?.amount)
            }
            AssetInfo::Cw20 { contract_addr } => {
                let resp: BalanceResponse = querier.query_wasm_smart(
                    contract_addr.to_string(),
                    &Cw20QueryMsg::Balance {
                        address: address.to_string(),
                    },
                )?;
                Ok(resp.balance)
            }
        }
    }

    /// Build a message transferring `amount` of this asset to `to`.
    pub fn transfer_msg(&self, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: to.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: to.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Build a CW20 allowance grant for `spender`. Native assets carry value
    /// with the call itself and never need an allowance.
    pub fn increase_allowance_msg(
        &self,
        spender: &Addr,
        amount: Uint128,
    ) -> StdResult<Option<CosmosMsg>> {
        match self {
            AssetInfo::Native { .. } => Ok(None),
            AssetInfo::Cw20 { contract_addr } => Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount,
                    expires: None,
                })?,
                funds: vec![],
            }))),
        }
    }
}

/// An asset paired with an amount.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: Uint128) -> Self {
        Asset { info, amount }
    }

    pub fn transfer_msg(&self, to: &Addr) -> StdResult<CosmosMsg> {
        self.info.transfer_msg(to, self.amount)
    }
}
