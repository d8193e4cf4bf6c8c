diesel::table! {
    products (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        price -> Nullable<Double>,
        image_url -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
    }
}
