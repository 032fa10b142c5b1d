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

//! Trading fees: aggregation and estimation.

use anyhow::bail;
use indexmap::IndexMap;
use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    arith::both,
    enums::{FeeSide, LiquiditySide, OrderSide, OrderType},
};

/// A fee charged on a trade or order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub currency: Option<Ustr>,
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
}

impl Fee {
    #[must_use]
    pub fn new(currency: &str, cost: &str, rate: Option<&str>) -> Self {
        Self {
            currency: Some(Ustr::from(currency)),
            cost: Some(cost.to_string()),
            rate: rate.map(str::to_string),
        }
    }
}

/// Sums fees sharing a currency and rate.
///
/// Groups are emitted per currency in first-seen order, then per rate in first-seen
/// order within that currency. Fees without a currency and fees with a zero cost are
/// dropped. Rates are compared numerically, so `"0.001"` and `"0.0010"` share a group.
/// A group containing a fee with no reported cost has no cost.
///
/// # Errors
///
/// Returns an error if a cost or rate is not a decimal literal.
pub fn reduce_fees(fees: &[Fee]) -> Result<Vec<Fee>, PreciseError> {
    let mut reduced: IndexMap<Ustr, IndexMap<Option<String>, Fee>> = IndexMap::new();

    for fee in fees {
        let Some(currency) = fee.currency else {
            continue;
        };

        if let Some(cost) = fee.cost.as_deref() {
            if precise::eq(cost, "0")? {
                continue;
            }
        }

        let rate_key = fee.rate.as_deref().map(precise::normalize).transpose()?;
        let groups = reduced.entry(currency).or_default();

        match groups.get_mut(&rate_key) {
            Some(group) => {
                group.cost = both(group.cost.as_deref(), fee.cost.as_deref(), precise::add)?;
            }
            None => {
                groups.insert(rate_key, fee.clone());
            }
        }
    }

    Ok(reduced.into_values().flat_map(IndexMap::into_values).collect())
}

/// The fee schedule of a market, as needed to estimate fees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFeeSchedule {
    pub base: Ustr,
    pub quote: Ustr,
    /// The settlement currency of a derivative market.
    #[serde(default)]
    pub settle: Option<Ustr>,
    pub spot: bool,
    /// The taker fee rate.
    pub taker: String,
    /// The maker fee rate.
    pub maker: String,
    #[serde(default)]
    pub fee_side: FeeSide,
}

/// An estimated fee for a prospective order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
    /// The currency the fee is charged in, `None` for a derivative without a settle currency.
    pub currency: Option<Ustr>,
    pub cost: String,
    pub rate: String,
    pub liquidity_side: LiquiditySide,
}

/// Estimates the fee for an order of `amount` at `price` in `market`.
///
/// Market orders always pay the taker rate. Derivative markets charge fees in
/// their settle currency.
///
/// # Errors
///
/// Returns an error if:
/// - `order_type` is [`OrderType::Market`] and `liquidity_side` is [`LiquiditySide::Maker`].
/// - `amount`, `price` or a schedule rate is not a decimal literal.
pub fn calculate_fee(
    market: &MarketFeeSchedule,
    order_type: OrderType,
    side: OrderSide,
    amount: &str,
    price: &str,
    liquidity_side: LiquiditySide,
) -> anyhow::Result<FeeEstimate> {
    if order_type == OrderType::Market && liquidity_side == LiquiditySide::Maker {
        bail!("Invalid fee request: a market order cannot be a maker");
    }

    let use_quote = match market.fee_side {
        FeeSide::Get => side == OrderSide::Sell,
        FeeSide::Give => side == OrderSide::Buy,
        FeeSide::Quote => true,
        FeeSide::Base => false,
    };

    let (notional, mut currency) = if use_quote {
        (precise::mul(amount, price)?, Some(market.quote))
    } else {
        (precise::normalize(amount)?, Some(market.base))
    };

    if !market.spot {
        currency = market.settle;
    }

    let rate = match liquidity_side {
        LiquiditySide::Taker => &market.taker,
        LiquiditySide::Maker => &market.maker,
    };

    Ok(FeeEstimate {
        currency,
        cost: precise::mul(&notional, rate)?,
        rate: rate.clone(),
        liquidity_side,
    })
}
