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

//! Fixtures for model records in tests.

use rstest::fixture;
use ustr::Ustr;

use crate::{
    balance::{Balance, Balances},
    enums::{FeeSide, OrderSide, OrderType},
    fee::{Fee, MarketFeeSchedule},
    order::Order,
    ticker::Ticker,
    trade::Trade,
};

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[fixture]
pub fn balances_spot() -> Balances {
    let mut balances = Balances::new();
    balances.insert("BTC", Balance::new(Some("0.1"), Some("0.2"), None));
    balances.insert("USDT", Balance::new(None, Some("100"), Some("1000")));
    balances.insert("ETH", Balance::new(Some("2"), None, None));

    if let Some(usdt) = balances.currencies.get_mut(&Ustr::from("USDT")) {
        usdt.debt = some("50");
    }
    balances
}

#[fixture]
pub fn market_fee_schedule_spot() -> MarketFeeSchedule {
    MarketFeeSchedule {
        base: Ustr::from("BTC"),
        quote: Ustr::from("USDT"),
        settle: None,
        spot: true,
        taker: "0.001".to_string(),
        maker: "0.0008".to_string(),
        fee_side: FeeSide::Quote,
    }
}

#[fixture]
pub fn market_fee_schedule_swap() -> MarketFeeSchedule {
    MarketFeeSchedule {
        base: Ustr::from("ETH"),
        quote: Ustr::from("USD"),
        settle: Some(Ustr::from("USDC")),
        spot: false,
        taker: "0.0005".to_string(),
        maker: "0.0002".to_string(),
        fee_side: FeeSide::Quote,
    }
}

#[fixture]
pub fn trade_buy() -> Trade {
    Trade {
        id: some("T-1"),
        order: some("O-1"),
        symbol: Some(Ustr::from("BTC/USDT")),
        side: Some(OrderSide::Buy),
        order_type: Some(OrderType::Limit),
        liquidity_side: None,
        timestamp: Some(1_700_000_001_000),
        amount: some("0.001"),
        price: some("50050"),
        cost: None,
        fee: Some(Fee::new("USDT", "0.05005", Some("0.001"))),
        fees: Vec::new(),
    }
}

#[fixture]
pub fn order_limit_with_trades() -> Order {
    let first = Trade {
        id: some("T-1"),
        price: some("50000"),
        fee: Some(Fee::new("USDT", "0.05", Some("0.001"))),
        ..trade_buy()
    };
    let second = Trade {
        id: some("T-2"),
        timestamp: Some(1_700_000_002_000),
        amount: some("0.002"),
        price: some("50150"),
        fee: Some(Fee::new("USDT", "0.1003", Some("0.001"))),
        ..trade_buy()
    };

    Order {
        order_type: Some(OrderType::Limit),
        timestamp: Some(1_700_000_000_000),
        price: some("50200"),
        amount: some("0.01"),
        trades: vec![first, second],
        ..Default::default()
    }
}

#[fixture]
pub fn ticker_btcusdt() -> Ticker {
    Ticker {
        symbol: Some(Ustr::from("BTC/USDT")),
        timestamp: Some(1_700_000_000_000),
        high: some("52500"),
        low: some("49500"),
        bid: some("51999"),
        ask: some("52001"),
        open: some("50000"),
        last: some("52000"),
        base_volume: some("10"),
        quote_volume: some("505000"),
        ..Default::default()
    }
}
