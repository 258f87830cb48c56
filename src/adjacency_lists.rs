use log::warn;

use crate::data_cleaning::{Friendship, WatchedVideo};
use crate::error::{ExerciseError, Result};

/// Largest user id accepted from input files; every id below it gets a slot in the graph.
pub const MAX_USER_ID: usize = 1_000_000;

/// One more than the largest user id appearing in either file.
pub fn user_count(friendships: &[Friendship], watched: &[WatchedVideo]) -> Result<usize> {
    let Some(max_id) = friendships
        .iter()
        .flat_map(|row| [row.user, row.friend])
        .chain(watched.iter().map(|row| row.user))
        .max()
    else {
        return Ok(0);
    };
    if max_id > MAX_USER_ID {
        return Err(ExerciseError::InvalidArgument(format!(
            "user id {} is above the limit of {}",
            max_id, MAX_USER_ID
        )));
    }
    max_id
        .checked_add(1)
        .ok_or_else(|| ExerciseError::InvalidArgument(format!("user id {} is too large", max_id)))
}

pub fn build_friend_graph(friendships: &[Friendship], num_users: usize) -> Vec<Vec<usize>> {
    let mut friend_graph: Vec<Vec<usize>> = vec![Vec::new(); num_users];
    for row in friendships {
        if row.user >= num_users || row.friend >= num_users {
            warn!("dropping friendship {}-{}, only {} users", row.user, row.friend, num_users);
            continue;
        }
        if row.user == row.friend {
            continue; // users aren't their own friends
        }
        friend_graph[row.user].push(row.friend);
        friend_graph[row.friend].push(row.user);
    }

    for friends in friend_graph.iter_mut() {
        friends.sort();
        friends.dedup();
    } // a pair listed twice (either direction) is still one friendship

    friend_graph
}

pub fn build_watch_history(watched: &[WatchedVideo], num_users: usize) -> Vec<Vec<String>> {
    let mut watch_history: Vec<Vec<String>> = vec![Vec::new(); num_users];
    for row in watched {
        match watch_history.get_mut(row.user) {
            Some(videos) => videos.push(row.title.clone()),
            None => warn!("dropping '{}' watched by unknown user {}", row.title, row.user),
        }
    }
    watch_history
}
