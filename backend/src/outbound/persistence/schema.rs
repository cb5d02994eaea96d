//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database. Relationships are
//! expressed as explicit foreign-key columns and `joinable!` declarations,
//! not as lazily loaded object graphs.

diesel::table! {
    /// Role catalogue referenced by users. Never mutated on this surface.
    roles (role_id) {
        role_id -> Int4,
        role_name -> Varchar,
    }
}

diesel::table! {
    /// User accounts. Rows are created by an external enrolment flow.
    users (user_id) {
        user_id -> Uuid,
        first_name -> Varchar,
        second_name -> Nullable<Varchar>,
        middle_name -> Varchar,
        login -> Varchar,
        email -> Varchar,
        created_date -> Date,
        role_id -> Int4,
    }
}

diesel::table! {
    /// Academic programs keyed by their business code.
    programs (program_code) {
        program_code -> Varchar,
        program_name -> Varchar,
        description -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Dated revisions of a program.
    program_versions (program_version_id) {
        program_version_id -> Uuid,
        academic_year -> Int4,
        created_at -> Date,
        program_code -> Varchar,
    }
}

diesel::table! {
    /// Discipline catalogue.
    disciplines (discipline_id) {
        discipline_id -> Uuid,
        discipline_name -> Varchar,
        description -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Association of one discipline to one program version with a semester.
    program_disciplines (program_discipline_id) {
        program_discipline_id -> Uuid,
        program_version_id -> Uuid,
        discipline_id -> Uuid,
        semester -> Int4,
    }
}

diesel::table! {
    /// Editor assignments. Present in the store, unused by this surface.
    editors (editor_id) {
        editor_id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Student enrolments into program versions. Unused by this surface.
    student_programs (student_program_id) {
        student_program_id -> Uuid,
        user_id -> Uuid,
        program_version_id -> Uuid,
    }
}

diesel::joinable!(users -> roles (role_id));
diesel::joinable!(program_versions -> programs (program_code));
diesel::joinable!(program_disciplines -> program_versions (program_version_id));
diesel::joinable!(program_disciplines -> disciplines (discipline_id));
diesel::joinable!(editors -> users (user_id));
diesel::joinable!(student_programs -> users (user_id));
diesel::joinable!(student_programs -> program_versions (program_version_id));

diesel::allow_tables_to_appear_in_same_query!(
    roles,
    users,
    programs,
    program_versions,
    disciplines,
    program_disciplines,
    editors,
    student_programs,
);
