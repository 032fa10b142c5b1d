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

//! Ledger entries describing movements of funds.

use std::cmp::Ordering;

use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::enums::LedgerDirection;

/// A single movement of funds in an account ledger.
///
/// `amount` is the signed change applied to the balance, so `after == before + amount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Option<String>,
    pub currency: Option<Ustr>,
    pub direction: Option<LedgerDirection>,
    pub amount: Option<String>,
    /// The balance before the movement.
    pub before: Option<String>,
    /// The balance after the movement.
    pub after: Option<String>,
}

impl LedgerEntry {
    /// Derives a missing `before` or `after` balance, then a missing direction.
    ///
    /// The direction is `In` when the balance rose and `Out` when it fell. An
    /// unchanged balance leaves the direction unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a present numeric field is not a decimal literal.
    pub fn reconcile(&mut self) -> Result<(), PreciseError> {
        if let Some(amount) = self.amount.as_deref() {
            if self.before.is_none() {
                if let Some(after) = self.after.as_deref() {
                    self.before = Some(precise::sub(after, amount)?);
                }
            } else if self.after.is_none() {
                if let Some(before) = self.before.as_deref() {
                    self.after = Some(precise::add(before, amount)?);
                }
            }
        }

        if self.direction.is_none() {
            if let (Some(before), Some(after)) = (self.before.as_deref(), self.after.as_deref()) {
                self.direction = match precise::compare(after, before)? {
                    Ordering::Greater => Some(LedgerDirection::In),
                    Ordering::Less => Some(LedgerDirection::Out),
                    Ordering::Equal => None,
                };
            }
        }

        Ok(())
    }
}
