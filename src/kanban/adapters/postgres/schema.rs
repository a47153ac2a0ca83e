//! Diesel schema for kanban persistence.

diesel::table! {
    /// Board documents with list backreferences.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Board title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Trimmed owner name.
        owner -> Text,
        /// List identifiers in board order.
        list_ids -> Array<Uuid>,
        /// Insertion sequence, used as natural order.
        seq -> Int8,
    }
}

diesel::table! {
    /// List documents with task backreferences.
    lists (id) {
        /// List identifier.
        id -> Uuid,
        /// List title.
        title -> Text,
        /// Owning board identifier. Not a foreign key.
        board_id -> Uuid,
        /// Task identifiers in list order.
        task_ids -> Array<Uuid>,
        /// Position among the board's lists, set by reorder.
        position -> Nullable<Int4>,
        /// Insertion sequence, used as natural order.
        seq -> Int8,
    }
}

diesel::table! {
    /// Task documents.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Completion flag.
        completed -> Bool,
        /// Owning list identifier. Not a foreign key.
        list_id -> Uuid,
        /// Insertion sequence, used as natural order.
        seq -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(boards, lists, tasks);
