use crate::config::CliConfig;
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::Input;
use partyhub_core::{normalize, parse_winner_count, run_draw, split_roster, DrawOutcome};

#[derive(Subcommand)]
pub enum LotteryCommands {
    /// Draw ranked winners from a participant list
    Draw {
        /// Participant names; commas or newlines inside an argument split it further.
        /// With no names given, the list is built interactively.
        names: Vec<String>,
        /// Number of winners to draw
        #[arg(short, long)]
        count: Option<String>,
        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Preview normalization (trim + de-duplication) without drawing
    Normalize {
        /// Participant names
        names: Vec<String>,
    },
}

pub async fn handle_lottery_command(cmd: LotteryCommands, config: &CliConfig) -> anyhow::Result<()> {
    match cmd {
        LotteryCommands::Draw { names, count, json } => {
            let mut raw: Vec<String> = names.iter().flat_map(|n| split_roster(n)).collect();
            let interactive = raw.is_empty();

            if interactive {
                collect_participants(&mut raw)?;
            }

            let count_text = match count {
                Some(text) => text,
                None if interactive => Input::<String>::new()
                    .with_prompt("Number of winners")
                    .default(config.default_winner_count.to_string())
                    .interact_text()?,
                None => config.default_winner_count.to_string(),
            };
            let count = parse_winner_count(&count_text)?;

            tracing::debug!("drawing {} winner(s) from {} raw entries", count, raw.len());
            let outcome = run_draw(&raw, count, &mut rand::rng())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                render_outcome(&outcome);
            }
        }

        LotteryCommands::Normalize { names } => {
            let raw: Vec<String> = names.iter().flat_map(|n| split_roster(n)).collect();
            let normalization = normalize(&raw);

            if normalization.unique.is_empty() {
                println!("No participants after normalization.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["#", "Name"]);
            for (index, name) in normalization.unique.iter().enumerate() {
                table.add_row(vec![(index + 1).to_string(), name.clone()]);
            }
            println!("{}", table);
            println!(
                "{} entered, {} kept, {} duplicate(s) removed.",
                normalization.trimmed.len(),
                normalization.unique.len(),
                normalization.duplicates_removed()
            );
        }
    }

    Ok(())
}

/// Build the participant list entry by entry; a blank line finishes.
fn collect_participants(raw: &mut Vec<String>) -> anyhow::Result<()> {
    println!("Enter each participant name once. Duplicates are removed automatically.");
    println!("Leave the prompt blank to finish.");

    loop {
        let prompt = format!("Participant {}", raw.len() + 1);
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        if line.trim().is_empty() {
            break;
        }
        raw.extend(split_roster(&line));

        let ready = normalize(raw.iter()).unique.len();
        println!("  {} ready", ready);
    }

    Ok(())
}

fn render_outcome(outcome: &DrawOutcome) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Rank", "Winner"]);
    for (index, winner) in outcome.winners.iter().enumerate() {
        table.add_row(vec![format!("#{}", index + 1), winner.clone()]);
    }

    println!("{}", table);
    println!(
        "{} winner(s) drawn from a pool of {}.",
        outcome.winners.len(),
        outcome.pool_size
    );

    if outcome.duplicates_removed > 0 {
        let notice = if outcome.duplicates_removed == 1 {
            "duplicate name was"
        } else {
            "duplicate names were"
        };
        println!(
            "{} {} removed before drawing.",
            outcome.duplicates_removed, notice
        );
    }
}
