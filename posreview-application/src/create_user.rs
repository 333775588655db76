use super::*;
use posreview_core::repositories::UserRepo as _;

pub fn create_user(connections: &sqlite::Connections, login_name: &str) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| conn.create_user(login_name))?;
    info!("Created user {} ({})", user.id, user.login_name);
    Ok(user)
}
