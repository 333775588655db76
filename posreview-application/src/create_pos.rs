use super::*;
use posreview_core::repositories::PosRepo as _;

pub fn create_pos(connections: &sqlite::Connections, name: &str) -> Result<Pos> {
    let pos = connections
        .exclusive()?
        .transaction(|conn| conn.create_pos(name))?;
    info!("Created POS {} ({})", pos.id, pos.name);
    Ok(pos)
}
