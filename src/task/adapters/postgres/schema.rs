//! Diesel schema for task persistence.

diesel::table! {
    /// Task records owned by authenticated users.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user's identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Deadline timestamp.
        deadline -> Timestamptz,
        /// Lifecycle status in canonical enum-string form.
        #[max_length = 50]
        status -> Varchar,
        /// Estimated duration in minutes.
        estimated_time -> BigInt,
        /// Clock-in timestamp.
        start_time -> Nullable<Timestamptz>,
        /// Clock-out timestamp.
        finish_time -> Nullable<Timestamptz>,
        /// Recorded spent time in minutes.
        time_spent -> Nullable<BigInt>,
        /// Advisory suggestion from the time-accounting policy.
        suggestion -> Nullable<Text>,
    }
}
