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

//! Unified trading records and the derivations that complete them.
//!
//! Venues report balances, orders, trades and tickers with fields missing. Each record
//! here carries its numeric fields as decimal strings (`None` when not reported) and a
//! `reconcile` method which derives whatever the reported fields determine. All
//! arithmetic runs through [`nexuscore_precise`], so no value passes through binary
//! floating point.
//!
//! Derivations never overwrite a reported value. A derivation whose divisor is zero
//! leaves its field unset; a malformed input is returned as a
//! [`PreciseError`](nexuscore_precise::PreciseError).
//!
//! # Feature flags
//!
//! - `stubs`: Enables `rstest` fixtures for the records in this crate.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]

pub mod balance;
pub mod enums;
pub mod fee;
pub mod ledger;
pub mod order;
pub mod ticker;
pub mod trade;

mod arith;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use balance::{Balance, Balances};
pub use enums::{FeeSide, LedgerDirection, LiquiditySide, OrderSide, OrderStatus, OrderType};
pub use fee::{Fee, FeeEstimate, MarketFeeSchedule, calculate_fee, reduce_fees};
pub use ledger::LedgerEntry;
pub use order::Order;
pub use ticker::Ticker;
pub use trade::{ContractTerms, Trade};
