pub mod account;
pub mod coins;

pub use account::{AccountId, Address};
pub use coins::{parse_coins, Coin, Coins};
