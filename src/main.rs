use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use interview_exercises::adjacency_lists::{build_friend_graph, build_watch_history, user_count};
use interview_exercises::chip_cost::min_cost_to_move_chips;
use interview_exercises::data_cleaning::{load_friendships, load_watch_history};
use interview_exercises::path_sum::{build_tree, has_path_sum, parse_level_order};
use interview_exercises::video_search::videos_watched_by_friends;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runs the interview exercises on command-line input", long_about = None)]
struct CliArgs {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Videos watched by the user's connections at exactly the given degree
    Videos {
        /// CSV with a `user,friend` header
        #[clap(long)]
        friends: PathBuf,
        /// CSV with a `user,title` header
        #[clap(long)]
        watched: PathBuf,
        #[clap(long)]
        user: usize,
        #[clap(long, allow_hyphen_values = true)]
        degree: i64,
        /// Print a JSON array instead of one title per line
        #[clap(long)]
        json: bool,
    },
    /// Minimum cost to move all chips to one position
    Chips {
        #[clap(required = true, allow_hyphen_values = true)]
        positions: Vec<i64>,
    },
    /// Whether a root-to-leaf path sums to the target
    PathSum {
        /// Level-order values, e.g. "2,3,3,1,null,null,1"
        #[clap(long, allow_hyphen_values = true)]
        tree: String,
        #[clap(long, allow_hyphen_values = true)]
        target: i64,
    },
}

fn run_videos(friends: PathBuf, watched: PathBuf, user: usize, degree: i64, json: bool) -> Result<()> {
    let friendships = load_friendships(&friends)
        .with_context(|| format!("Failed to read friendships from {}", friends.display()))?;
    let watched_rows = load_watch_history(&watched)
        .with_context(|| format!("Failed to read watch history from {}", watched.display()))?;

    let num_users = user_count(&friendships, &watched_rows)?;
    let friend_graph = build_friend_graph(&friendships, num_users);
    let watch_history = build_watch_history(&watched_rows, num_users);
    info!("searching {} users for degree {} connections of user {}", num_users, degree, user);

    let videos = videos_watched_by_friends(&watch_history, &friend_graph, user, degree)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
    } else {
        for title in &videos {
            println!("{}", title);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match CliArgs::parse().command {
        Command::Videos {
            friends,
            watched,
            user,
            degree,
            json,
        } => run_videos(friends, watched, user, degree, json)?,
        Command::Chips { positions } => println!("{}", min_cost_to_move_chips(&positions)),
        Command::PathSum { tree, target } => {
            let root = build_tree(&parse_level_order(&tree)?)?;
            println!("{}", has_path_sum(root.as_deref(), target));
        }
    }
    Ok(())
}
