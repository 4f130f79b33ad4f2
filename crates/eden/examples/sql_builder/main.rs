//! Example demonstrating eden's DELETE/UPDATE builders.
//!
//! Run with:
//!   cargo run --example sql_builder -p eden

use eden::sql::{self, Filter, SqlBuilder, SqlValue};
use eden::{EdenResult, UpdateBuilder};

#[derive(Debug)]
struct ProfileEdit {
    user_id: u32,
    name: Option<String>,
    age: Option<u32>,
    bio: Option<String>,
}

fn build_profile_update(edit: &ProfileEdit) -> EdenResult<String> {
    let qb: UpdateBuilder = sql::update("user")
        .set_opt("user_name", edit.name.as_deref().map(SqlValue::quoted))
        .set_opt("user_age", edit.age)
        .set_opt("user_bio", edit.bio.as_deref().map(SqlValue::quoted))
        .set("user_updated", SqlValue::raw("NOW()"))
        .and_eq("user_id", edit.user_id)
        .and_is_null("user_deleted");
    qb.to_sql()
}

fn main() -> EdenResult<()> {
    println!("=== UPDATE ===");
    let edit = ProfileEdit {
        user_id: 3,
        name: Some("Chris O'Neil".to_string()),
        age: None,
        bio: Some("Builds things".to_string()),
    };
    println!("{}", build_profile_update(&edit)?);

    println!("\n=== DELETE ===");
    let purge = sql::delete("session")
        .where_raw("session_expires < NOW()")
        .and_any(&["session_user IS NULL", "session_guest = 1"]);
    println!("{}", purge.to_sql()?);

    println!("\n=== Safe defaults ===");
    println!("{}", sql::delete("session"));
    println!("{}", sql::update("user").set("user_active", 0));

    println!("\n=== Validation ===");
    match sql::update("user").and_eq("user_id", 1).to_sql() {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
