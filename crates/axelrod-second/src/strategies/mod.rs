//! Decision rules from Axelrod's second tournament

mod champion;
mod eatherley;
mod gladstein;
mod grofman;
mod tester;

pub use champion::Champion;
pub use eatherley::Eatherley;
pub use gladstein::Gladstein;
pub use grofman::MoreGrofman;
pub use tester::Tester;
