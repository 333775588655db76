use super::*;
use posreview_core::{
    entities::*,
    repositories::{self as repo, *},
};

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn create_pos_and_users(connections: &Connections) -> (Pos, User, User) {
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            let pos = conn.create_pos("Cafe Botanik")?;
            let alice = conn.create_user("alice")?;
            let bob = conn.create_user("bob")?;
            Ok::<_, repo::Error>((pos, alice, bob))
        })
        .unwrap()
}

fn save(connections: &Connections, review: Review) -> Result<Review, uc::Error> {
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.save_review(review))
}

#[test]
fn create_and_get_pos_and_user() {
    let connections = setup();
    let (pos, alice, bob) = create_pos_and_users(&connections);
    assert_ne!(alice.id, bob.id);

    let db = connections.shared().unwrap();
    assert_eq!(pos, db.get_pos(pos.id).unwrap());
    assert_eq!(alice, db.get_user(alice.id).unwrap());
    assert!(matches!(
        db.get_pos(PosId::new(99)),
        Err(repo::Error::NotFound)
    ));
    assert!(matches!(
        db.get_user(UserId::new(99)),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn duplicate_login_name() {
    let connections = setup();
    create_pos_and_users(&connections);
    let res = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.create_user("alice"));
    assert!(matches!(
        res,
        Err(uc::Error::Repo(repo::Error::AlreadyExists))
    ));
}

#[test]
fn first_save_assigns_id_and_timestamps() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    let saved = save(&connections, Review::new(pos.id, alice.id, "Tasty")).unwrap();
    assert!(saved.id.is_some());
    assert!(saved.created_at.is_some());
    assert_eq!(saved.created_at, saved.updated_at);
    assert_eq!(0, saved.approval_count);
    assert!(!saved.approved);

    let loaded = connections
        .shared()
        .unwrap()
        .get_review(saved.id.unwrap())
        .unwrap();
    assert_eq!(saved, loaded);
}

#[test]
fn unique_review_per_pos_and_author() {
    let connections = setup();
    let (pos, alice, bob) = create_pos_and_users(&connections);
    save(&connections, Review::new(pos.id, alice.id, "A")).unwrap();
    let err = save(&connections, Review::new(pos.id, alice.id, "B")).unwrap_err();
    assert!(matches!(err, uc::Error::Repo(repo::Error::AlreadyExists)));
    assert!(save(&connections, Review::new(pos.id, bob.id, "C")).is_ok());

    let db = connections.shared().unwrap();
    let found = db.find_reviews_by_pos_and_author(pos.id, alice.id).unwrap();
    assert_eq!(1, found.len());
    assert_eq!("A", found[0].text);
}

#[test]
fn update_existing_review() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    let saved = save(&connections, Review::new(pos.id, alice.id, "A")).unwrap();
    let updated = save(
        &connections,
        saved.with_approval_count(3).with_approved(true).with_text("B"),
    )
    .unwrap();
    assert_eq!(saved.id, updated.id);
    assert_eq!(saved.created_at, updated.created_at);
    assert!(updated.updated_at >= saved.updated_at);
    assert_eq!(3, updated.approval_count);
    assert!(updated.approved);
    assert_eq!("B", updated.text);
}

#[test]
fn update_missing_review() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    let mut review = Review::new(pos.id, alice.id, "A");
    review.id = Some(ReviewId::new(42));
    let err = save(&connections, review).unwrap_err();
    assert!(matches!(err, uc::Error::Repo(repo::Error::NotFound)));
}

#[test]
fn reject_unknown_references() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    assert!(save(&connections, Review::new(PosId::new(99), alice.id, "A")).is_err());
    assert!(save(&connections, Review::new(pos.id, UserId::new(99), "A")).is_err());
    assert!(connections
        .shared()
        .unwrap()
        .filter_reviews(pos.id, false)
        .unwrap()
        .is_empty());
}

#[test]
fn filter_reviews_by_approval() {
    let connections = setup();
    let (pos, alice, bob) = create_pos_and_users(&connections);
    let first = save(&connections, Review::new(pos.id, alice.id, "A")).unwrap();
    let second = save(&connections, Review::new(pos.id, bob.id, "B")).unwrap();
    save(&connections, second.with_approval_count(1).with_approved(true)).unwrap();

    let db = connections.shared().unwrap();
    let pending = db.filter_reviews(pos.id, false).unwrap();
    assert_eq!(vec![first.id], pending.iter().map(|r| r.id).collect::<Vec<_>>());
    let approved = db.filter_reviews(pos.id, true).unwrap();
    assert_eq!(vec![second.id], approved.iter().map(|r| r.id).collect::<Vec<_>>());
}

#[test]
fn rollback_on_usecase_error() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.save_review(Review::new(pos.id, alice.id, "A"))?;
            Err::<(), _>(uc::Error::SelfApproval)
        })
        .unwrap_err();
    assert!(matches!(err, uc::Error::SelfApproval));
    assert!(connections
        .shared()
        .unwrap()
        .find_reviews_by_pos_and_author(pos.id, alice.id)
        .unwrap()
        .is_empty());
}

#[test]
fn shared_access_is_read_only() {
    let connections = setup();
    let (pos, alice, _) = create_pos_and_users(&connections);
    let db = connections.shared().unwrap();
    assert!(db.save_review(Review::new(pos.id, alice.id, "A")).is_err());
    assert!(db.create_pos("Mensa").is_err());
    assert!(db.create_user("carol").is_err());
}
