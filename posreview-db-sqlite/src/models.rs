#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = pos)]
pub struct NewPos<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct PosEntity {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub login_name: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub login_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub created_at: i64,
    pub updated_at: i64,
    pub pos_id: i64,
    pub author_id: i64,
    pub text: &'a str,
    pub approval_count: i64,
    pub approved: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = reviews)]
pub struct ReviewChangeset<'a> {
    pub updated_at: i64,
    pub text: &'a str,
    pub approval_count: i64,
    pub approved: bool,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub pos_id: i64,
    pub author_id: i64,
    pub text: String,
    pub approval_count: i64,
    pub approved: bool,
}
