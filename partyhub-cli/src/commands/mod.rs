pub mod games;
pub mod lottery;

pub use games::{handle_game_command, GameCommands};
pub use lottery::{handle_lottery_command, LotteryCommands};
