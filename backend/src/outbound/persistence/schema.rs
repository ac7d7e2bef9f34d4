//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate or update this
//! file to match (`diesel print-schema` against a live database).

diesel::table! {
    /// Registered user accounts.
    ///
    /// `username` and `email` carry unique constraints; those constraints —
    /// not application-level existence checks — arbitrate duplicate
    /// registrations.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        username -> Varchar,
        email -> Varchar,
        /// Argon2id PHC hash string.
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Destination cards, externally seeded.
    destinations (id) {
        id -> Int4,
        name -> Nullable<Varchar>,
        region -> Nullable<Varchar>,
        image -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Travel package cards, externally seeded.
    travel_packages (id) {
        id -> Int4,
        title -> Nullable<Varchar>,
        description -> Nullable<Text>,
        price -> Nullable<Int4>,
        image -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Promotions with an inclusive active window.
    promotions (id) {
        id -> Int4,
        description -> Nullable<Text>,
        discount -> Nullable<Int4>,
        start_date -> Date,
        end_date -> Date,
    }
}

diesel::table! {
    /// Aggregate statistics singleton; the first row wins.
    stats (id) {
        id -> Int4,
        destinations -> Nullable<Int4>,
        tours -> Nullable<Int4>,
        cruises -> Nullable<Int4>,
        hotels -> Nullable<Int4>,
    }
}
