// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Trades (fills) and the contract terms used to value them.

use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    arith::{both, div_or_none},
    enums::{LiquiditySide, OrderSide, OrderType},
    fee::Fee,
};

/// How a market's quantities convert into quote value.
///
/// The default describes a spot or linear market with a unit contract size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    /// The amount of the underlying per contract, `None` outside contract markets.
    #[serde(default)]
    pub contract_size: Option<String>,
    /// Whether the contract is quoted inversely (settled in the base currency).
    #[serde(default)]
    pub inverse: bool,
}

impl ContractTerms {
    #[must_use]
    pub fn linear(contract_size: &str) -> Self {
        Self {
            contract_size: Some(contract_size.to_string()),
            inverse: false,
        }
    }

    #[must_use]
    pub fn inverse(contract_size: &str) -> Self {
        Self {
            contract_size: Some(contract_size.to_string()),
            inverse: true,
        }
    }

    /// Returns the contract size, defaulting to one.
    #[must_use]
    pub fn contract_size_or_one(&self) -> &str {
        self.contract_size.as_deref().unwrap_or("1")
    }
}

/// A single fill reported by a venue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: Option<String>,
    /// The identifier of the order this trade filled.
    pub order: Option<String>,
    pub symbol: Option<Ustr>,
    pub side: Option<OrderSide>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    pub liquidity_side: Option<LiquiditySide>,
    pub timestamp: Option<i64>,
    pub amount: Option<String>,
    pub price: Option<String>,
    pub cost: Option<String>,
    pub fee: Option<Fee>,
    #[serde(default)]
    pub fees: Vec<Fee>,
}

impl Trade {
    /// Derives a missing cost from price and amount.
    ///
    /// In a contract market the price per unit is scaled by the contract size, and an
    /// inverse contract is valued at `1 / price` per contract. A zero price on an
    /// inverse contract leaves the cost unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a present numeric field is not a decimal literal.
    pub fn reconcile_cost(&mut self, terms: &ContractTerms) -> Result<(), PreciseError> {
        if self.cost.is_some() {
            return Ok(());
        }

        let mut unit_value = self.price.clone();

        if let Some(contract_size) = terms.contract_size.as_deref() {
            if terms.inverse {
                unit_value = match unit_value.as_deref() {
                    Some(price) => div_or_none("1", price)?,
                    None => None,
                };
            }
            unit_value = both(unit_value.as_deref(), Some(contract_size), precise::mul)?;
        }

        self.cost = both(unit_value.as_deref(), self.amount.as_deref(), precise::mul)?;
        Ok(())
    }
}
