//! Intent classification
//!
//! Rule-based: the first matching rule wins, in this order:
//!
//! 1. holdings keywords → `QueryHoldings`
//! 2. profit keywords → `QueryFund` when a fund name is present, else `QueryProfit`
//! 3. a fund name alone → `QueryFund` for the day
//! 4. report keywords → `QueryReport`
//! 5. anything else → `Qa`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use core_kernel::Period;

/// Suffix branches are tried in order at each position, so a `…基金` name wins
/// over a longer run that ends in 精选 or 成长.
static FUND_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[一-龥]+基金|[一-龥]+精选|[一-龥]+成长").expect("fund name pattern is valid")
});

const HOLDINGS_KEYWORDS: [&str; 3] = ["持仓", "持有", "我的基金"];
const PROFIT_KEYWORDS: [&str; 3] = ["赚", "收益", "盈亏"];
const REPORT_KEYWORDS: [&str; 3] = ["日报", "报告", "总结"];
const WEEK_KEYWORDS: [&str; 2] = ["这周", "本周"];
const MONTH_KEYWORDS: [&str; 2] = ["这月", "本月"];

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum Intent {
    QueryHoldings,
    QueryProfit {
        period: Period,
    },
    #[serde(rename_all = "camelCase")]
    QueryFund {
        fund_name: String,
        period: Period,
    },
    QueryReport,
    Qa {
        question: String,
    },
}

impl Intent {
    /// Wire name of the intent kind
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::QueryHoldings => "query_holdings",
            Intent::QueryProfit { .. } => "query_profit",
            Intent::QueryFund { .. } => "query_fund",
            Intent::QueryReport => "query_report",
            Intent::Qa { .. } => "qa",
        }
    }
}

/// Keyword classifier for chat messages
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a message; never fails
    pub fn classify(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();
        let fund_name = extract_fund_name(text);

        if contains_any(&lower, &HOLDINGS_KEYWORDS) {
            return Intent::QueryHoldings;
        }

        if contains_any(&lower, &PROFIT_KEYWORDS) {
            let period = detect_period(&lower);
            return match fund_name {
                Some(name) => Intent::QueryFund {
                    fund_name: name.to_string(),
                    period,
                },
                None => Intent::QueryProfit { period },
            };
        }

        if let Some(name) = fund_name {
            return Intent::QueryFund {
                fund_name: name.to_string(),
                period: Period::Day,
            };
        }

        if contains_any(&lower, &REPORT_KEYWORDS) {
            return Intent::QueryReport;
        }

        Intent::Qa {
            question: text.to_string(),
        }
    }
}

/// The leftmost fund name in `text`: a run of ideographs ending in 基金, 精选 or 成长
pub fn extract_fund_name(text: &str) -> Option<&str> {
    FUND_NAME.find(text).map(|m| m.as_str())
}

/// Period named in `text`, `Day` when none is
///
/// 今天/今日 select the day explicitly, which is also the default.
pub fn detect_period(text: &str) -> Period {
    if contains_any(text, &WEEK_KEYWORDS) {
        Period::Week
    } else if contains_any(text, &MONTH_KEYWORDS) {
        Period::Month
    } else {
        Period::Day
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Intent {
        IntentClassifier::new().classify(text)
    }

    #[test]
    fn test_holdings() {
        assert_eq!(classify("我的持仓情况"), Intent::QueryHoldings);
        assert_eq!(classify("我持有哪些"), Intent::QueryHoldings);
        // holdings win over profit keywords
        assert_eq!(classify("我的基金收益"), Intent::QueryHoldings);
    }

    #[test]
    fn test_profit_periods() {
        assert_eq!(classify("今天赚了多少"), Intent::QueryProfit { period: Period::Day });
        assert_eq!(classify("这周收益怎么样"), Intent::QueryProfit { period: Period::Week });
        assert_eq!(classify("本月盈亏"), Intent::QueryProfit { period: Period::Month });
        assert_eq!(classify("收益如何"), Intent::QueryProfit { period: Period::Day });
    }

    #[test]
    fn test_fund_profit() {
        assert_eq!(
            classify("易方达消费精选本周收益"),
            Intent::QueryFund {
                fund_name: "易方达消费精选".into(),
                period: Period::Week,
            }
        );
    }

    #[test]
    fn test_bare_fund_name() {
        assert_eq!(
            classify("华夏成长怎么样"),
            Intent::QueryFund {
                fund_name: "华夏成长".into(),
                period: Period::Day,
            }
        );
    }

    #[test]
    fn test_report() {
        assert_eq!(classify("生成日报"), Intent::QueryReport);
        assert_eq!(classify("给我一份总结"), Intent::QueryReport);
    }

    #[test]
    fn test_fallback_to_qa() {
        assert_eq!(
            classify("赎回费怎么算"),
            Intent::Qa {
                question: "赎回费怎么算".into()
            }
        );
    }

    #[test]
    fn test_extract_fund_name_leftmost() {
        assert_eq!(extract_fund_name("银河创新成长和华夏成长"), Some("银河创新成长和华夏成长"));
        assert_eq!(extract_fund_name("看看 银河创新成长 and 华夏成长"), Some("银河创新成长"));
        assert_eq!(extract_fund_name("hello"), None);
    }

    #[test]
    fn test_extract_fund_name_prefers_jijin_suffix() {
        assert_eq!(extract_fund_name("华夏基金的华夏成长收益"), Some("华夏基金"));
        assert_eq!(extract_fund_name("易方达蓝筹精选基金"), Some("易方达蓝筹精选基金"));
        assert_eq!(extract_fund_name("易方达消费精选和华夏成长"), Some("易方达消费精选"));
    }

    #[test]
    fn test_intent_wire_format() {
        let json = serde_json::to_value(classify("易方达消费精选")).unwrap();
        assert_eq!(json["type"], "query_fund");
        assert_eq!(json["params"]["fundName"], "易方达消费精选");
        assert_eq!(json["params"]["period"], "day");

        let json = serde_json::to_value(Intent::QueryHoldings).unwrap();
        assert_eq!(json["type"], "query_holdings");
    }
}
