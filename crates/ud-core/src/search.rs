use crate::User;

/// Case-insensitive substring match against name or city.
///
/// An empty query matches every user.
pub fn matches_query(user: &User, query: &str) -> bool {
    let q = query.to_lowercase();
    user.name.to_lowercase().contains(&q) || user.address.city.to_lowercase().contains(&q)
}

/// Derive the filtered view of `users` without touching the source list.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    users
        .iter()
        .filter(|u| matches_query(u, query))
        .cloned()
        .collect()
}
