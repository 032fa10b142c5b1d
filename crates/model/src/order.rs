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

//! Orders and the reconciliation of their fill state.

use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    arith::{both, div_or_none, omit_zero},
    enums::{OrderSide, OrderStatus, OrderType},
    fee::{Fee, reduce_fees},
    trade::{ContractTerms, Trade},
};

/// An order as reported by a venue, possibly with its fills.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<String>,
    pub symbol: Option<Ustr>,
    pub side: Option<OrderSide>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub timestamp: Option<i64>,
    pub last_trade_timestamp: Option<i64>,
    pub price: Option<String>,
    /// The average fill price.
    pub average: Option<String>,
    pub amount: Option<String>,
    pub filled: Option<String>,
    pub remaining: Option<String>,
    pub cost: Option<String>,
    #[serde(default)]
    pub trades: Vec<Trade>,
    pub fee: Option<Fee>,
    #[serde(default)]
    pub fees: Vec<Fee>,
}

impl Order {
    /// Fills in every derivable field from the reported fields and fills.
    ///
    /// A zero amount, average or price counts as not reported. Then, in order:
    /// 1. Missing identity fields are taken from the first trade, and a missing
    ///    filled amount or cost is summed over the trades.
    /// 2. Order and trade fees are merged with [`reduce_fees`].
    /// 3. `amount == filled + remaining` is completed from any two of its terms. A
    ///    closed order without a remaining amount is taken as fully filled.
    /// 4. A missing average is derived from cost and filled, per `terms`.
    /// 5. An unreported cost is recomputed from filled and the average (or price).
    /// 6. A market order without a price takes the average as its price.
    ///
    /// # Errors
    ///
    /// Returns an error if a present numeric field is not a decimal literal.
    pub fn reconcile(&mut self, terms: &ContractTerms) -> Result<(), PreciseError> {
        omit_zero(&mut self.amount)?;
        omit_zero(&mut self.average)?;
        omit_zero(&mut self.price)?;

        let parse_filled = self.filled.is_none();
        let parse_cost = self.cost.is_none();
        let parse_fees = self.fee.is_none() || self.fees.is_empty();

        for trade in &mut self.trades {
            trade.reconcile_cost(terms)?;
        }

        self.absorb_trades(parse_filled, parse_cost)?;

        if parse_fees {
            self.merge_fees()?;
        }

        self.reconcile_quantities()?;

        let contract_size = terms.contract_size_or_one();

        if self.average.is_none() {
            if let (Some(filled), Some(cost)) = (self.filled.as_deref(), self.cost.as_deref()) {
                if precise::gt(filled, "0")? {
                    let filled_contracts = precise::mul(filled, contract_size)?;
                    self.average = if terms.inverse {
                        div_or_none(&filled_contracts, cost)?
                    } else {
                        div_or_none(cost, &filled_contracts)?
                    };
                }
            }
        }

        if parse_cost {
            let unit_price = self.average.as_deref().or(self.price.as_deref());
            if let (Some(filled), Some(unit_price)) = (self.filled.as_deref(), unit_price) {
                let filled_contracts = precise::mul(filled, contract_size)?;
                self.cost = if terms.inverse {
                    div_or_none(&filled_contracts, unit_price)?
                } else {
                    Some(precise::mul(&filled_contracts, unit_price)?)
                };
            }
        }

        if self.price.is_none() && self.order_type == Some(OrderType::Market) {
            self.price.clone_from(&self.average);
        }

        Ok(())
    }

    fn absorb_trades(&mut self, parse_filled: bool, parse_cost: bool) -> Result<(), PreciseError> {
        let Some(first) = self.trades.first() else {
            return Ok(());
        };

        if self.symbol.is_none() {
            self.symbol = first.symbol;
        }
        if self.side.is_none() {
            self.side = first.side;
        }
        if self.order_type.is_none() {
            self.order_type = first.order_type;
        }
        if self.id.is_none() {
            self.id.clone_from(&first.order);
        }

        if parse_filled {
            let mut filled = String::from("0");
            for amount in self.trades.iter().filter_map(|t| t.amount.as_deref()) {
                filled = precise::add(&filled, amount)?;
            }
            self.filled = Some(filled);
        }

        if parse_cost {
            let mut cost = String::from("0");
            for trade_cost in self.trades.iter().filter_map(|t| t.cost.as_deref()) {
                cost = precise::add(&cost, trade_cost)?;
            }
            self.cost = Some(cost);
        }

        if self.last_trade_timestamp.is_none() {
            self.last_trade_timestamp = self.trades.iter().filter_map(|t| t.timestamp).max();
        }

        Ok(())
    }

    fn merge_fees(&mut self) -> Result<(), PreciseError> {
        let mut collected = self.fees.clone();
        for trade in &self.trades {
            if trade.fees.is_empty() {
                collected.extend(trade.fee.clone());
            } else {
                collected.extend(trade.fees.iter().cloned());
            }
        }

        let mut reduced = reduce_fees(&collected)?;

        if self.fee.is_none() {
            if reduced.len() == 1 {
                self.fee = reduced.first().cloned();
            }
        } else if reduced.is_empty() {
            reduced.extend(self.fee.clone());
        }

        self.fees = reduced;
        Ok(())
    }

    fn reconcile_quantities(&mut self) -> Result<(), PreciseError> {
        if self.amount.is_none() {
            if let (Some(filled), Some(remaining)) = (self.filled.as_deref(), self.remaining.as_deref()) {
                self.amount = Some(precise::add(filled, remaining)?);
            } else if self.status == Some(OrderStatus::Closed) {
                self.amount.clone_from(&self.filled);
            }
        }

        if self.filled.is_none() {
            self.filled = both(self.amount.as_deref(), self.remaining.as_deref(), precise::sub)?;
        }

        if self.remaining.is_none() {
            self.remaining = both(self.amount.as_deref(), self.filled.as_deref(), precise::sub)?;
        }

        if let (Some(amount), Some(filled)) = (self.amount.as_deref(), self.filled.as_deref()) {
            if precise::gt(filled, amount)? {
                log::warn!(
                    "Order {} reports filled {filled} above amount {amount}",
                    self.id.as_deref().unwrap_or("<unknown>")
                );
            }
        }

        Ok(())
    }
}
