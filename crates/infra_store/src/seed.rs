//! Sample portfolio fixture
//!
//! Eight funds, ten holdings for `user1`, disclosed top holdings, two realized
//! profits and a generated NAV history ending at the as-of date.
//!
//! Each fund's NAV follows `start + days_ago × slope + noise`, with noise drawn
//! uniformly from `[-amplitude, amplitude]`. Figures are kept in basis points
//! (1/10000) so the curve stays exact until the NAV is rounded to 2 dp.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use core_kernel::{FundId, HoldingId, UserId};
use domain_fund::{Fund, FundPrice, FundTopHolding, FundType, Holding, RealizedProfit};

use crate::error::StoreError;
use crate::memory::InMemoryStore;

/// Default length of the generated NAV history
pub const DEFAULT_SEED_DAYS: u32 = 90;

/// Parameters of the generated price history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// Date of the newest price sample
    pub as_of: NaiveDate,
    /// Number of daily samples per fund
    pub days: u32,
    /// RNG seed; `None` draws one from the OS
    pub rng_seed: Option<u64>,
}

impl SeedConfig {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            days: DEFAULT_SEED_DAYS,
            rng_seed: None,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// NAV curve of one fund, in basis points
#[derive(Debug, Clone, Copy)]
struct NavCurve {
    fund: &'static str,
    start: i64,
    slope: i64,
    amplitude: i64,
}

const CURVES: [NavCurve; 8] = [
    NavCurve { fund: "f1", start: 14000, slope: 30, amplitude: 100 },
    NavCurve { fund: "f2", start: 19000, slope: 20, amplitude: 150 },
    NavCurve { fund: "f3", start: 16500, slope: 10, amplitude: 125 },
    NavCurve { fund: "f4", start: 11500, slope: 20, amplitude: 200 },
    NavCurve { fund: "f5", start: 24000, slope: 40, amplitude: 75 },
    NavCurve { fund: "f6", start: 15500, slope: 25, amplitude: 100 },
    NavCurve { fund: "f7", start: 17500, slope: 15, amplitude: 75 },
    NavCurve { fund: "f8", start: 13500, slope: 30, amplitude: 250 },
];

/// Builds the complete sample store
///
/// # Errors
///
/// Returns `StoreError::InvalidSeed` when `days` is zero or the history would
/// start before the earliest representable date
pub fn sample_store(config: &SeedConfig) -> Result<InMemoryStore, StoreError> {
    let prices = generate_prices(config)?;

    let store = InMemoryStore::builder()
        .funds(sample_funds())
        .holdings(sample_holdings()?)
        .prices(prices)
        .top_holdings(sample_top_holdings())
        .realized_profits(sample_realized_profits())
        .build()?;

    info!(
        as_of = %config.as_of,
        days = config.days,
        seeded = config.rng_seed.is_some(),
        stats = ?store.stats(),
        "Seeded sample store"
    );
    Ok(store)
}

/// Generates `days` daily prices per sample fund, oldest first
///
/// The first day of each fund has a zero change; later days derive their
/// change from the previous rounded NAV.
pub fn generate_prices(config: &SeedConfig) -> Result<Vec<FundPrice>, StoreError> {
    if config.days == 0 {
        return Err(StoreError::InvalidSeed("days must be at least 1".into()));
    }

    let mut rng = config.rng();
    let mut previous: Vec<Option<Decimal>> = vec![None; CURVES.len()];
    let mut prices = Vec::with_capacity(CURVES.len() * config.days as usize);

    for days_ago in (0..config.days).rev() {
        let date = config
            .as_of
            .checked_sub_days(Days::new(u64::from(days_ago)))
            .ok_or_else(|| StoreError::InvalidSeed(format!("{} days before {} is out of range", days_ago, config.as_of)))?;

        for (curve, previous_nav) in CURVES.iter().zip(previous.iter_mut()) {
            let noise = rng.gen_range(-curve.amplitude..=curve.amplitude);
            let basis_points = curve.start + i64::from(days_ago) * curve.slope + noise;
            let price = FundPrice::following(
                FundId::from(curve.fund),
                date,
                Decimal::new(basis_points, 4),
                *previous_nav,
            );
            *previous_nav = Some(price.nav);
            prices.push(price);
        }
    }

    Ok(prices)
}

pub fn sample_funds() -> Vec<Fund> {
    [
        ("f1", "110022", "易方达消费精选", FundType::Equity, "张坤"),
        ("f2", "000001", "华夏成长", FundType::Mixed, "王亚伟"),
        ("f3", "001938", "中欧时代先锋", FundType::Equity, "周应波"),
        ("f4", "161725", "招商中证白酒", FundType::Index, "侯昊"),
        ("f5", "005827", "易方达蓝筹精选", FundType::Mixed, "张坤"),
        ("f6", "110011", "易方达中小盘", FundType::Equity, "张坤"),
        ("f7", "000002", "华夏回报", FundType::Mixed, "蔡向阳"),
        ("f8", "519674", "银河创新成长", FundType::Mixed, "郑巍山"),
    ]
    .into_iter()
    .map(|(id, code, name, fund_type, manager)| Fund::new(FundId::from(id), code, name, fund_type, manager))
    .collect()
}

/// Holdings of `user1`
pub fn sample_holdings() -> Result<Vec<Holding>, StoreError> {
    [
        ("h1", "f1", dec!(1000), dec!(1.5), (2024, 1, 1)),
        ("h2", "f2", dec!(2000), dec!(2.0), (2024, 1, 15)),
        ("h3", "f3", dec!(1500), dec!(1.8), (2024, 2, 1)),
        ("h4", "f4", dec!(3000), dec!(1.2), (2023, 12, 10)),
        ("h5", "f5", dec!(800), dec!(2.5), (2024, 1, 20)),
        ("h6", "f6", dec!(1200), dec!(1.6), (2024, 2, 15)),
        ("h7", "f7", dec!(2500), dec!(1.8), (2023, 11, 5)),
        ("h8", "f8", dec!(1800), dec!(1.4), (2024, 3, 1)),
        ("h9", "f1", dec!(500), dec!(1.55), (2024, 3, 10)),
        ("h10", "f2", dec!(1000), dec!(2.1), (2024, 3, 20)),
    ]
    .into_iter()
    .map(|(id, fund, shares, cost, (y, m, d))| -> Result<Holding, StoreError> {
        let purchased = fixture_date(y, m, d)?;
        Ok(Holding::new(
            HoldingId::from(id),
            FundId::from(fund),
            UserId::default(),
            shares,
            cost,
            purchased,
        )?)
    })
    .collect()
}

pub fn sample_top_holdings() -> Vec<FundTopHolding> {
    [
        ("f1", "贵州茅台", "600519", dec!(0.15), "白酒"),
        ("f1", "五粮液", "000858", dec!(0.12), "白酒"),
        ("f1", "泸州老窖", "000568", dec!(0.10), "白酒"),
        ("f1", "山西汾酒", "600809", dec!(0.08), "白酒"),
        ("f1", "洋河股份", "002304", dec!(0.07), "白酒"),
        ("f1", "海天味业", "603288", dec!(0.06), "食品"),
        ("f2", "中国平安", "601318", dec!(0.10), "金融"),
        ("f2", "招商银行", "600036", dec!(0.08), "金融"),
        ("f2", "工商银行", "601398", dec!(0.07), "金融"),
        ("f2", "建设银行", "601939", dec!(0.06), "金融"),
        ("f2", "兴业银行", "601166", dec!(0.05), "金融"),
        ("f2", "中国太保", "601601", dec!(0.04), "金融"),
        ("f3", "宁德时代", "300750", dec!(0.12), "新能源"),
        ("f3", "比亚迪", "002594", dec!(0.10), "新能源"),
        ("f3", "隆基绿能", "601012", dec!(0.09), "新能源"),
        ("f3", "通威股份", "600438", dec!(0.08), "新能源"),
        ("f3", "阳光电源", "300274", dec!(0.07), "新能源"),
        ("f4", "贵州茅台", "600519", dec!(0.18), "白酒"),
        ("f4", "五粮液", "000858", dec!(0.15), "白酒"),
        ("f4", "泸州老窖", "000568", dec!(0.12), "白酒"),
        ("f4", "山西汾酒", "600809", dec!(0.10), "白酒"),
        ("f4", "洋河股份", "002304", dec!(0.08), "白酒"),
        ("f5", "贵州茅台", "600519", dec!(0.12), "白酒"),
        ("f5", "腾讯控股", "00700", dec!(0.10), "科技"),
        ("f5", "美团", "03690", dec!(0.09), "科技"),
        ("f5", "招商银行", "600036", dec!(0.08), "金融"),
        ("f5", "中国平安", "601318", dec!(0.07), "金融"),
        ("f6", "海康威视", "002415", dec!(0.10), "科技"),
        ("f6", "立讯精密", "002475", dec!(0.09), "科技"),
        ("f6", "三一重工", "600031", dec!(0.08), "机械"),
        ("f6", "恒瑞医药", "600276", dec!(0.07), "医药"),
        ("f7", "中国平安", "601318", dec!(0.08), "金融"),
        ("f7", "招商银行", "600036", dec!(0.07), "金融"),
        ("f7", "贵州茅台", "600519", dec!(0.06), "白酒"),
        ("f7", "五粮液", "000858", dec!(0.05), "白酒"),
        ("f8", "宁德时代", "300750", dec!(0.11), "新能源"),
        ("f8", "比亚迪", "002594", dec!(0.10), "新能源"),
        ("f8", "海康威视", "002415", dec!(0.09), "科技"),
        ("f8", "立讯精密", "002475", dec!(0.08), "科技"),
        ("f8", "韦尔股份", "603501", dec!(0.07), "科技"),
    ]
    .into_iter()
    .map(|(fund, name, code, weight, industry)| FundTopHolding::new(FundId::from(fund), name, code, weight, industry))
    .collect()
}

pub fn sample_realized_profits() -> Vec<RealizedProfit> {
    let records = [
        ("rp1", "h1", NaiveDate::from_ymd_opt(2024, 2, 15), dec!(120.5)),
        ("rp2", "h2", NaiveDate::from_ymd_opt(2024, 3, 1), dec!(200.0)),
    ];
    records
        .into_iter()
        .filter_map(|(id, holding, date, profit)| {
            date.map(|date| RealizedProfit::new(id.into(), holding.into(), date, profit))
        })
        .collect()
}

fn fixture_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, StoreError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| StoreError::InvalidSeed(format!("invalid fixture date {}-{}-{}", year, month, day)))
}
