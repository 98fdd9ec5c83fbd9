//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdir_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::db::open_db_in_memory;
use staffdir_core::{DirectoryService, Employee, SqliteEmployeeRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteEmployeeRepository::new(&conn);
    let service = DirectoryService::new(repo);

    service.register_employee(&Employee::new(100, "John", "Smith"))?;
    service.register_employee(&Employee::new(101, "Ada", "Lovelace"))?;

    // Id 102 is deliberately unseeded to show the not-found path.
    for id in [100, 101, 102] {
        println!(
            "staffdir is_john_smith id={id} -> {}",
            service.is_john_smith(id)?
        );
    }
    println!("staffdir_core version={}", staffdir_core::core_version());

    Ok(())
}
