pub mod manager;
pub mod user;
pub mod user_manager;

/*
 Managers are seed data: rows land in the table out-of-band and the HTTP
 surface never creates one. A user can only be created under a manager whose
 is_active is the literal "true" (the managers table keeps its boolean as
 text; this is checked once at creation and never re-validated).
 Reassignment goes through user_manager, an append-only history where at
 most one row per user is active at a time.
 */
