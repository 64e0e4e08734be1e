use crate::config::CliConfig;
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::{Confirm, Input, Select};
use partyhub_games::memory::MOVE_LIMIT;
use partyhub_games::number_guess::{SECRET_MAX, SECRET_MIN};
use partyhub_games::rps::MATCH_TARGET;
use partyhub_games::{
    Difficulty, FlipOutcome, GuessFeedback, GuessPhase, MemoryEffect, MemoryGame, MemoryPhase,
    Move, NumberGuess, QuickTap, QuickTapEffect, RoundResult, RpsMatch, RpsPhase,
};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Subcommand)]
pub enum GameCommands {
    /// Quick Tap: wait for the signal, then react as fast as you can
    QuickTap {
        /// Difficulty (chill, pro)
        #[arg(short, long)]
        difficulty: Option<String>,
    },
    /// Number Guess: crack the hidden number before attempts run out
    Guess,
    /// Rock Paper Scissors: first to three wins
    Rps,
    /// Memory Match: clear the board within the move limit
    Memory,
}

pub async fn handle_game_command(cmd: GameCommands, config: &CliConfig) -> anyhow::Result<()> {
    match cmd {
        GameCommands::QuickTap { difficulty } => {
            let difficulty =
                parse_difficulty(difficulty.as_deref().unwrap_or(&config.default_difficulty))?;
            play_quick_tap(difficulty).await
        }
        GameCommands::Guess => play_number_guess(),
        GameCommands::Rps => play_rps(),
        GameCommands::Memory => play_memory(),
    }
}

fn parse_difficulty(raw: &str) -> anyhow::Result<Difficulty> {
    match raw.to_lowercase().as_str() {
        "chill" => Ok(Difficulty::Chill),
        "pro" => Ok(Difficulty::Pro),
        _ => anyhow::bail!(
            "Invalid difficulty: {}. Supported difficulties: chill, pro",
            raw
        ),
    }
}

async fn play_quick_tap(difficulty: Difficulty) -> anyhow::Result<()> {
    let mut game = QuickTap::new(difficulty);
    let mut rng = rand::rng();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let settings = game.settings();

    println!("Quick Tap ({})", settings.label);
    println!("Wait for the signal, then press Enter as fast as you can.");
    println!("Target: {}ms or faster.", settings.target_ms);

    loop {
        println!();
        println!("Press Enter to arm the round (q to quit)...");
        match lines.next_line().await? {
            Some(line) if line.trim().eq_ignore_ascii_case("q") => break,
            Some(_) => {}
            None => break,
        }

        let QuickTapEffect::ScheduleSignal { delay_ms } = game.start_round(&mut rng)? else {
            anyhow::bail!("unexpected effect while arming the round");
        };

        println!("Wait for it...");
        let signal_fired = tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(delay_ms)) => true,
            _ = lines.next_line() => false,
        };

        if signal_fired {
            game.signal();
            println!(">>> TAP NOW! (press Enter) <<<");
            let armed = Instant::now();
            lines.next_line().await?;
            let reaction_ms = armed.elapsed().as_millis() as u64;

            let result = game.register_tap(reaction_ms)?;
            if result.win {
                println!("Lightning fast! {}ms.", result.reaction_ms);
                if result.new_best {
                    println!("New personal best.");
                }
            } else {
                println!("Too slow this time: {}ms.", result.reaction_ms);
            }
        } else {
            game.false_start()?;
            println!("Too soon! You jumped early.");
        }

        let tally = game.tally();
        let best = game
            .best_ms()
            .map(|b| format!("{}ms", b))
            .unwrap_or_else(|| "-".to_string());
        println!("Wins: {}  Losses: {}  Best: {}", tally.wins, tally.losses, best);
    }

    Ok(())
}

fn play_number_guess() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut game = NumberGuess::new(&mut rng);

    println!("Number Guess");

    loop {
        println!(
            "Guess a number between {} and {}. {} attempt(s) left.",
            SECRET_MIN,
            SECRET_MAX,
            game.attempts_left()
        );

        while game.phase() == GuessPhase::Playing {
            let raw: String = Input::new().with_prompt("Your guess").interact_text()?;
            let Ok(value) = raw.trim().parse::<i64>() else {
                println!("Enter a whole number to lock in your guess.");
                continue;
            };

            match game.guess(value)? {
                GuessFeedback::OutOfRange => {
                    println!("Stay between {} and {}.", SECRET_MIN, SECRET_MAX);
                }
                GuessFeedback::TooHigh => {
                    println!("Too high. Try lower. {} attempt(s) left.", game.attempts_left());
                }
                GuessFeedback::TooLow => {
                    println!("Too low. Try higher. {} attempt(s) left.", game.attempts_left());
                }
                GuessFeedback::Correct => {
                    println!("You nailed it! You win the round.");
                }
            }
        }

        if game.phase() == GuessPhase::Lost {
            println!("No more tries. The number was {}.", game.secret());
        }

        let tally = game.tally();
        println!("Wins: {}  Losses: {}", tally.wins, tally.losses);

        if !Confirm::new()
            .with_prompt("New round?")
            .default(true)
            .interact()?
        {
            break;
        }
        game.reset(&mut rng);
    }

    Ok(())
}

fn play_rps() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut game = RpsMatch::new();

    println!("Rock Paper Scissors - first to {} takes the match.", MATCH_TARGET);

    loop {
        while game.phase() == RpsPhase::Playing {
            let labels: Vec<&str> = Move::ALL.iter().map(|m| m.as_str()).collect();
            let pick = Select::new()
                .with_prompt("Make your move")
                .items(&labels)
                .default(0)
                .interact()?;

            match game.play(Move::ALL[pick], &mut rng)? {
                RoundResult::Tie { both } => {
                    println!("Tie! Both chose {}.", both.as_str());
                }
                RoundResult::PlayerWins { player, cpu } => {
                    println!("You win the round! {} beats {}.", player.as_str(), cpu.as_str());
                }
                RoundResult::CpuWins { player, cpu } => {
                    println!("You lose the round. {} beats {}.", cpu.as_str(), player.as_str());
                }
            }
            println!(
                "You: {}  CPU: {}  Ties: {}",
                game.player_score(),
                game.cpu_score(),
                game.ties()
            );
        }

        match game.phase() {
            RpsPhase::Won => println!("Match won!"),
            RpsPhase::Lost => println!("CPU takes the match."),
            RpsPhase::Playing => {}
        }

        if !Confirm::new()
            .with_prompt("Rematch?")
            .default(true)
            .interact()?
        {
            break;
        }
        game.reset();
    }

    Ok(())
}

fn play_memory() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut game = MemoryGame::new(&mut rng);

    println!("Memory Match - clear the board within {} moves.", MOVE_LIMIT);

    loop {
        while game.phase() == MemoryPhase::Playing {
            print_board(&game);
            println!("Moves left: {}", game.moves_left());

            let raw: String = Input::new()
                .with_prompt(format!("Flip card (1-{})", game.cards().len()))
                .interact_text()?;
            let Ok(number) = raw.trim().parse::<usize>() else {
                println!("Enter a card number.");
                continue;
            };
            if number < 1 || number > game.cards().len() {
                println!("Pick a card between 1 and {}.", game.cards().len());
                continue;
            }

            match game.flip(number - 1)? {
                FlipOutcome::Ignored => println!("That card is already face-up."),
                FlipOutcome::Revealed => {}
                FlipOutcome::PairUp {
                    resolve: MemoryEffect::ScheduleResolve { delay_ms },
                } => {
                    print_board(&game);
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let outcome = game.resolve_pair()?;
                    if outcome.matched {
                        println!("A match!");
                    } else {
                        println!("No match.");
                    }
                }
            }
        }

        print_board(&game);
        match game.phase() {
            MemoryPhase::Won => println!("Perfect match!"),
            MemoryPhase::Lost => println!("Move limit reached."),
            MemoryPhase::Playing => {}
        }

        let tally = game.tally();
        println!("Wins: {}  Losses: {}", tally.wins, tally.losses);

        if !Confirm::new()
            .with_prompt("Shuffle and play again?")
            .default(true)
            .interact()?
        {
            break;
        }
        game.reset(&mut rng);
    }

    Ok(())
}

fn print_board(game: &MemoryGame) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    // 12 cards as a 3x4 grid; hidden cards show their number.
    for row in 0..3 {
        let cells: Vec<String> = (0..4)
            .map(|col| {
                let index = row * 4 + col;
                if game.is_matched(index) {
                    format!("[{}]", game.cards()[index])
                } else if game.is_revealed(index) {
                    game.cards()[index].to_string()
                } else {
                    format!("#{}", index + 1)
                }
            })
            .collect();
        table.add_row(cells);
    }

    println!("{}", table);
}
