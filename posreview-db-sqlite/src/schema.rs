table! {
    pos (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    users (id) {
        id -> BigInt,
        login_name -> Text,
    }
}

table! {
    reviews (id) {
        id -> BigInt,
        // unix timestamp in milliseconds
        created_at -> BigInt,
        // unix timestamp in milliseconds
        updated_at -> BigInt,
        pos_id -> BigInt,
        author_id -> BigInt,
        text -> Text,
        approval_count -> BigInt,
        approved -> Bool,
    }
}

joinable!(reviews -> pos (pos_id));
joinable!(reviews -> users (author_id));

allow_tables_to_appear_in_same_query!(pos, users, reviews);
