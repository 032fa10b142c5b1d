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

//! Account balances per currency.
//!
//! Venues often report only two of `free`, `used` and `total`. [`Balance::reconcile`]
//! fills in the missing one so that `total == free + used` holds whenever all three
//! can be known.

use indexmap::IndexMap;
use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// The balance of a single currency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The amount available for trading.
    pub free: Option<String>,
    /// The amount locked in open orders or positions.
    pub used: Option<String>,
    /// The total amount held.
    pub total: Option<String>,
    /// The amount borrowed, for margin accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt: Option<String>,
}

impl Balance {
    /// Creates a new [`Balance`] from whichever components the venue reported.
    #[must_use]
    pub fn new(free: Option<&str>, used: Option<&str>, total: Option<&str>) -> Self {
        Self {
            free: free.map(str::to_string),
            used: used.map(str::to_string),
            total: total.map(str::to_string),
            debt: None,
        }
    }

    /// Derives the single missing component from the other two.
    ///
    /// Nothing is derived when fewer than two components are present.
    ///
    /// # Errors
    ///
    /// Returns an error if a present component is not a decimal literal.
    pub fn reconcile(&mut self) -> Result<(), PreciseError> {
        if self.total.is_none() {
            if let (Some(free), Some(used)) = (&self.free, &self.used) {
                self.total = Some(precise::add(free, used)?);
            }
        }

        if self.free.is_none() {
            if let (Some(total), Some(used)) = (&self.total, &self.used) {
                self.free = Some(precise::sub(total, used)?);
            }
        }

        if self.used.is_none() {
            if let (Some(total), Some(free)) = (&self.total, &self.free) {
                self.used = Some(precise::sub(total, free)?);
            }
        }

        Ok(())
    }
}

/// Balances for every currency in an account, in venue order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances {
    pub currencies: IndexMap<Ustr, Balance>,
}

impl Balances {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the balance for `code`.
    pub fn insert(&mut self, code: &str, balance: Balance) {
        self.currencies.insert(Ustr::from(code), balance);
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Balance> {
        self.currencies.get(&Ustr::from(code))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Reconciles every currency balance in place.
    ///
    /// # Errors
    ///
    /// Returns the first reconciliation error. Balances reconciled before it keep
    /// their derived fields.
    pub fn reconcile(&mut self) -> Result<(), PreciseError> {
        for (code, balance) in &mut self.currencies {
            balance.reconcile().inspect_err(|e| {
                log::warn!("Failed to reconcile {code} balance: {e}");
            })?;
        }
        Ok(())
    }

    /// Returns the free amount per currency.
    #[must_use]
    pub fn free(&self) -> IndexMap<Ustr, Option<String>> {
        self.project(|b| b.free.clone())
    }

    /// Returns the used amount per currency.
    #[must_use]
    pub fn used(&self) -> IndexMap<Ustr, Option<String>> {
        self.project(|b| b.used.clone())
    }

    /// Returns the total amount per currency.
    #[must_use]
    pub fn total(&self) -> IndexMap<Ustr, Option<String>> {
        self.project(|b| b.total.clone())
    }

    /// Returns the debt per currency, omitting currencies without debt.
    #[must_use]
    pub fn debt(&self) -> IndexMap<Ustr, String> {
        self.currencies
            .iter()
            .filter_map(|(code, b)| b.debt.clone().map(|debt| (*code, debt)))
            .collect()
    }

    fn project<F>(&self, f: F) -> IndexMap<Ustr, Option<String>>
    where
        F: Fn(&Balance) -> Option<String>,
    {
        self.currencies
            .iter()
            .map(|(code, balance)| (*code, f(balance)))
            .collect()
    }
}
