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

//! 24-hour ticker statistics.

use nexuscore_precise::{self as precise, PreciseError};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::arith::{both, div_or_none, omit_zero};

/// Rolling price statistics for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: Option<Ustr>,
    pub timestamp: Option<i64>,
    pub high: Option<String>,
    pub low: Option<String>,
    pub bid: Option<String>,
    pub ask: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub last: Option<String>,
    /// The absolute change, `last - open`.
    pub change: Option<String>,
    /// The relative change in percent, `change / open * 100`.
    pub percentage: Option<String>,
    /// The mid of open and last, `(last + open) / 2`.
    pub average: Option<String>,
    /// The volume weighted average price, `quote_volume / base_volume`.
    pub vwap: Option<String>,
    pub base_volume: Option<String>,
    pub quote_volume: Option<String>,
}

impl Ticker {
    /// Derives every statistic that can be computed from the reported ones.
    ///
    /// Reported values are never overwritten. Afterwards, price fields reported or
    /// derived as zero are cleared, since venues send zero for "no data".
    ///
    /// # Errors
    ///
    /// Returns an error if a present numeric field is not a decimal literal.
    pub fn reconcile(&mut self) -> Result<(), PreciseError> {
        if self.vwap.is_none() {
            if let (Some(quote), Some(base)) = (self.quote_volume.as_deref(), self.base_volume.as_deref()) {
                self.vwap = div_or_none(quote, base)?;
            }
        }

        if self.close.is_none() {
            self.close.clone_from(&self.last);
        } else if self.last.is_none() {
            self.last.clone_from(&self.close);
        }

        if let (Some(last), Some(open)) = (self.last.as_deref(), self.open.as_deref()) {
            if self.change.is_none() {
                self.change = Some(precise::sub(last, open)?);
            }
            if self.average.is_none() {
                self.average = div_or_none(&precise::add(last, open)?, "2")?;
            }
        }

        if self.percentage.is_none() {
            if let (Some(change), Some(open)) = (self.change.as_deref(), self.open.as_deref()) {
                if precise::gt(open, "0")? {
                    let ratio = div_or_none(change, open)?;
                    self.percentage = both(ratio.as_deref(), Some("100"), precise::mul)?;
                }
            }
        }

        if self.change.is_none() {
            if let (Some(percentage), Some(open)) = (self.percentage.as_deref(), self.open.as_deref()) {
                self.change = div_or_none(&precise::mul(percentage, open)?, "100")?;
            }
        }

        if self.open.is_none() {
            if let (Some(last), Some(change)) = (self.last.as_deref(), self.change.as_deref()) {
                self.open = Some(precise::sub(last, change)?);
            }
        }

        for field in [
            &mut self.high,
            &mut self.low,
            &mut self.bid,
            &mut self.ask,
            &mut self.open,
            &mut self.close,
            &mut self.last,
            &mut self.average,
            &mut self.vwap,
        ] {
            omit_zero(field)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::stubs::ticker_btcusdt;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[rstest]
    fn test_reconcile_full(mut ticker_btcusdt: Ticker) {
        ticker_btcusdt.reconcile().unwrap();

        assert_eq!(ticker_btcusdt.close, s("52000"));
        assert_eq!(ticker_btcusdt.change, s("2000"));
        assert_eq!(ticker_btcusdt.average, s("51000"));
        assert_eq!(ticker_btcusdt.percentage, s("4"));
        assert_eq!(ticker_btcusdt.vwap, s("50500"));
    }

    #[rstest]
    fn test_reconcile_last_from_close() {
        let mut ticker = Ticker {
            close: s("10"),
            open: s("8"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.last, s("10"));
        assert_eq!(ticker.change, s("2"));
        assert_eq!(ticker.percentage, s("25"));
    }

    #[rstest]
    fn test_reconcile_change_from_percentage() {
        let mut ticker = Ticker {
            open: s("200"),
            percentage: s("-2.5"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.change, s("-5"));
        assert_eq!(ticker.last, None);
    }

    #[rstest]
    fn test_reconcile_open_from_last_and_change() {
        let mut ticker = Ticker {
            last: s("0.5"),
            change: s("-0.25"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.open, s("0.75"));
        assert_eq!(ticker.percentage, None);
    }

    #[rstest]
    fn test_reconcile_zero_base_volume_leaves_vwap_unset() {
        let mut ticker = Ticker {
            base_volume: s("0"),
            quote_volume: s("0"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.vwap, None);
    }

    #[rstest]
    fn test_reconcile_zero_open_skips_percentage() {
        let mut ticker = Ticker {
            open: s("0"),
            last: s("1"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.change, s("1"));
        assert_eq!(ticker.percentage, None);
        assert_eq!(ticker.open, None);
    }

    #[rstest]
    fn test_reconcile_repeating_average() {
        let mut ticker = Ticker {
            open: s("1"),
            last: s("2"),
            quote_volume: s("1"),
            base_volume: s("3"),
            ..Default::default()
        };
        ticker.reconcile().unwrap();
        assert_eq!(ticker.average, s("1.5"));
        assert_eq!(ticker.vwap, s("0.333333333333333333"));
    }

    #[rstest]
    fn test_serde_camel_case(ticker_btcusdt: Ticker) {
        let json = serde_json::to_value(&ticker_btcusdt).unwrap();
        assert_eq!(json["baseVolume"], "10");
        assert_eq!(json["quoteVolume"], "505000");
    }
}
