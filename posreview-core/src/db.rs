use crate::repositories::*;

pub trait Db: PosRepo + UserRepo + ReviewRepo {}

impl<T> Db for T where T: PosRepo + UserRepo + ReviewRepo {}
