use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::error::{ExerciseError, Result};

/// Retrieves the videos watched by the users who are exactly `degree` connections away from `user_id`.
///
/// `watched_videos[i]` holds the titles watched by user i and `friend_graph[i]` holds user i's friends.
/// Friendships are expected to be bidirectional. A degree of 1 looks at direct friends, 2 at friends of
/// friends, and so on; videos watched by closer connections (or by the user themselves) are left out.
///
/// Titles come back sorted by how many of those users watched them (descending), then by title (ascending).
pub fn videos_watched_by_friends<S: AsRef<str>>(
    watched_videos: &[Vec<S>],
    friend_graph: &[Vec<usize>],
    user_id: usize,
    degree: i64,
) -> Result<Vec<String>> {
    if degree < 0 {
        return Err(ExerciseError::InvalidArgument(format!(
            "degree cannot be negative, got {}",
            degree
        )));
    }
    // no shortest path in the graph can be as long as the graph has users
    let degree = match usize::try_from(degree) {
        Ok(degree) if degree < friend_graph.len() => degree,
        _ => {
            debug!(
                "degree {} exceeds what a graph of {} users can hold, skipping search",
                degree,
                friend_graph.len()
            );
            return Ok(Vec::new());
        }
    };
    if user_id >= friend_graph.len() {
        return Err(ExerciseError::UnknownUser(user_id));
    }

    let friends = friends_n_degrees_away(friend_graph, user_id, degree);
    Ok(videos_watched_by(&friends, watched_videos))
}

/// Users separated from `user_id` by exactly `degree` connections, in discovery order.
pub fn friends_n_degrees_away(friend_graph: &[Vec<usize>], user_id: usize, degree: usize) -> Vec<usize> {
    let mut visited = HashSet::from([user_id]);
    let mut friends_at_degree = vec![user_id];

    for layer in 1..=degree {
        friends_at_degree = collect_unvisited_friends(&friends_at_degree, friend_graph, &mut visited);
        debug!("{} users at degree {}", friends_at_degree.len(), layer);
        if friends_at_degree.is_empty() {
            break; // nobody at this degree means nobody further out either
        }
    }
    friends_at_degree
}

fn collect_unvisited_friends(
    users: &[usize],
    friend_graph: &[Vec<usize>],
    visited: &mut HashSet<usize>,
) -> Vec<usize> {
    let mut unvisited_friends = Vec::new();
    for &user in users {
        let Some(friends) = friend_graph.get(user) else {
            warn!("user {} is not in the friend graph, skipping", user);
            continue;
        };
        for &friend in friends {
            if visited.insert(friend) {
                unvisited_friends.push(friend);
            }
        }
    }
    unvisited_friends
}

/// Every title watched by `users`, most frequent first, ties broken by title.
pub fn videos_watched_by<S: AsRef<str>>(users: &[usize], watched_videos: &[Vec<S>]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &user in users {
        for video in watched_videos.get(user).into_iter().flatten() {
            *counts.entry(video.as_ref()).or_default() += 1;
        }
    }

    let mut videos: Vec<(&str, usize)> = counts.into_iter().collect();
    videos.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    videos.into_iter().map(|(title, _)| title.to_string()).collect()
}
