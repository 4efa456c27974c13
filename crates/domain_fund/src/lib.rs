//! Fund Domain
//!
//! Entities of a retail mutual-fund portfolio and the repository port through
//! which they are read.
//!
//! # Key Concepts
//!
//! - **Fund**: A mutual fund identified by its exchange code
//! - **Holding**: A user's position in one fund (shares at a cost price)
//! - **NAV**: Net asset value per share, published once per day
//! - **Top holding**: A heavyweight stock disclosed by the fund
//! - **Realized profit**: Gains locked in from a partial redemption

pub mod fund;
pub mod holding;
pub mod nav;
pub mod top_holding;
pub mod realized;
pub mod ports;
pub mod error;

pub use fund::{Fund, FundType};
pub use holding::Holding;
pub use nav::{FundPrice, NavHistory};
pub use top_holding::FundTopHolding;
pub use realized::RealizedProfit;
pub use ports::{PortfolioRepository, Position};
pub use error::FundError;
