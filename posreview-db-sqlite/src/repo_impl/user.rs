use super::*;

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, login_name: &str) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), login_name)
    }
    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _login_name: &str) -> Result<User> {
        Err(read_only_access())
    }
    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl From<models::UserEntity> for User {
    fn from(from: models::UserEntity) -> Self {
        let models::UserEntity { id, login_name } = from;
        Self {
            id: id.into(),
            login_name,
        }
    }
}

fn create_user(conn: &mut SqliteConnection, login_name: &str) -> Result<User> {
    diesel::insert_into(schema::users::table)
        .values(&models::NewUser { login_name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = inserted_rowid(conn)?;
    Ok(User {
        id: id.into(),
        login_name: login_name.to_owned(),
    })
}

fn get_user(conn: &mut SqliteConnection, id: UserId) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}
