use super::*;

impl PosRepo for DbConnection<'_> {
    fn create_pos(&self, name: &str) -> Result<Pos> {
        create_pos(&mut self.conn.borrow_mut(), name)
    }
    fn get_pos(&self, id: PosId) -> Result<Pos> {
        get_pos(&mut self.conn.borrow_mut(), id)
    }
}

impl PosRepo for DbReadOnly<'_> {
    fn create_pos(&self, _name: &str) -> Result<Pos> {
        Err(read_only_access())
    }
    fn get_pos(&self, id: PosId) -> Result<Pos> {
        get_pos(&mut self.conn.borrow_mut(), id)
    }
}

impl From<models::PosEntity> for Pos {
    fn from(from: models::PosEntity) -> Self {
        let models::PosEntity { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

fn create_pos(conn: &mut SqliteConnection, name: &str) -> Result<Pos> {
    diesel::insert_into(schema::pos::table)
        .values(&models::NewPos { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = inserted_rowid(conn)?;
    Ok(Pos {
        id: id.into(),
        name: name.to_owned(),
    })
}

fn get_pos(conn: &mut SqliteConnection, id: PosId) -> Result<Pos> {
    use schema::pos::dsl;
    Ok(dsl::pos
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::PosEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}
